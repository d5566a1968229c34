// Home page: randomized greeting, live clock, animated underline.

pub mod clock;
pub mod greeting;

use axum::{extract::State, Extension};
use chrono::{Local, Timelike};
use maud::{html, Markup, PreEscaped};

use crate::home::clock::{clock_label, tick_script, underline_style};
use crate::home::greeting::{compose_greeting, Greeting};
use crate::shell::chrome;
use crate::shell::layout::{page, Page};
use crate::state::AppState;
use crate::visitor::Visitor;

/// GET /
pub async fn handle_home_page(
    State(state): State<AppState>,
    Extension(visitor): Extension<Visitor>,
) -> Markup {
    let now = Local::now();
    let greeting = compose_greeting(&mut rand::thread_rng(), now.hour());
    let clock = clock_label(now.time());

    let chrome = chrome(&state, visitor).await;
    page(
        &chrome,
        Page::Home,
        render(&greeting, &clock, chrome.animations),
    )
}

fn render(greeting: &Greeting, clock: &str, animations: bool) -> Markup {
    html! {
        section class="hero" {
            h1 class="hero-title" {
                "Ari"
                svg class="underline" viewBox="0 0 200 12" aria-hidden="true" {
                    path id="underline-path" d="M2 9 C 60 3, 140 3, 198 9"
                        pathLength="1" style=(underline_style(animations)) {}
                }
            }
            div id="greeting-message" {
                p { (greeting.opener) }
                p { (greeting.role) }
                p class="muted" { (greeting.aside) }
                p class="muted" { (greeting.time_line) }
                p class="muted small" { (greeting.extra) }
            }
            p class="clock-line" {
                "Local time: "
                time id="clock" { (clock) }
            }
        }
        script { (PreEscaped(tick_script())) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::home::greeting::time_aware_line;

    #[test]
    fn test_render_contains_widgets() {
        let greeting = Greeting {
            opener: "Hi.",
            role: "role",
            aside: "aside",
            time_line: time_aware_line(9),
            extra: "extra",
        };
        let out = render(&greeting, "9:00:00 AM", false).into_string();
        assert!(out.contains(r#"<time id="clock">9:00:00 AM</time>"#));
        assert!(out.contains("Morning mode"));
        assert!(out.contains(r#"id="underline-path""#));
        assert!(out.contains("setInterval"));
    }
}
