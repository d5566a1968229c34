use chrono::NaiveTime;

pub const TICK_INTERVAL_MS: u32 = 1000;

pub const UNDERLINE_DELAY_MS: u32 = 920;
pub const UNDERLINE_DURATION_MS: u32 = 1200;
/// Ease-out cubic, `1 - (1 - t)^3`, as a CSS timing function.
const EASE_OUT_CUBIC: &str = "cubic-bezier(0.33, 1, 0.68, 1)";

/// 12-hour clock face, e.g. `3:04:05 PM`.
pub fn clock_label(time: NaiveTime) -> String {
    time.format("%-I:%M:%S %p").to_string()
}

/// Browser-side tick keeping `#clock` current after the server-rendered first frame.
pub fn tick_script() -> String {
    format!(
        "(() => {{ const el = document.getElementById(\"clock\"); if (!el) return; \
         setInterval(() => {{ el.textContent = new Date().toLocaleTimeString([], {{ hour12: true }}); }}, \
         {TICK_INTERVAL_MS}); }})();"
    )
}

/// Inline style for the hero underline. Without animations it is drawn in full.
pub fn underline_style(animations: bool) -> String {
    if animations {
        format!(
            "stroke-dasharray: 1; stroke-dashoffset: 1; \
             animation: underline-draw {UNDERLINE_DURATION_MS}ms {EASE_OUT_CUBIC} {UNDERLINE_DELAY_MS}ms forwards;"
        )
    } else {
        "stroke-dasharray: 1; stroke-dashoffset: 0;".to_string()
    }
}
