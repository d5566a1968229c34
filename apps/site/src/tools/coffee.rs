//! Hours slept in, coffee recommendation out.

use serde::Serialize;

const IDEAL_HOURS: f64 = 8.0;
const MAX_DEBT_HOURS: f64 = 12.0;
const HOURS_PER_CUP: f64 = 1.5;
const MAX_CUPS: u32 = 6;
const MAX_HOURS: f64 = 24.0;

/// Lower bounds (inclusive), checked top to bottom.
const TONES: &[(f64, &str)] = &[
    (9.5, "Emotionally stable. Mentally powerful. Scary."),
    (8.0, "Fully functional human behavior."),
    (7.0, "You’re fine. Don’t overthink it."),
    (6.0, "Okay but be gentle with yourself today."),
    (5.0, "Today runs on vibes, not discipline."),
    (4.0, "You’re awake on vibes and audacity."),
];
const SURVIVAL_TONE: &str = "Survival mode. One task. One thought.";
const ZERO_SLEEP_TONE: &str = "Zero sleep?? Bestie please drink water.";

const INVALID_TONE: &str = "Hours slept = a real number between 0 and 24 pls.";
const IMPOSSIBLE_TONE: &str = "Congrats, you bent spacetime.";
const RESET_TONE: &str = "That wasn’t rest, that was a factory reset.";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub cups: u32,
    pub tone: &'static str,
    pub is_error: bool,
    pub message: String,
}

/// Parses the form field. Blank or unparsable input becomes NaN, which
/// [`recommend`] rejects.
pub fn parse_hours(raw: &str) -> f64 {
    raw.trim().parse::<f64>().unwrap_or(f64::NAN)
}

pub fn recommend(hours: f64) -> Recommendation {
    if !hours.is_finite() || hours < 0.0 {
        return Recommendation {
            cups: 0,
            tone: INVALID_TONE,
            is_error: true,
            message: format!("Bestie… be serious for a sec.\n{INVALID_TONE}"),
        };
    }

    // -0 prints as "-0"; it means zero.
    let h = if hours == 0.0 { 0.0 } else { hours };

    if h > MAX_HOURS {
        return Recommendation {
            cups: 0,
            tone: IMPOSSIBLE_TONE,
            is_error: true,
            message: format!(
                "You slept {h} hours.\n{IMPOSSIBLE_TONE}\nTry again without breaking physics."
            ),
        };
    }

    if h == MAX_HOURS {
        return Recommendation {
            cups: 0,
            tone: RESET_TONE,
            is_error: false,
            message: format!("You slept 24 hours.\nCoffee: 0 cups ☕\n{RESET_TONE}"),
        };
    }

    let debt = (IDEAL_HOURS - h).clamp(0.0, MAX_DEBT_HOURS);
    let mut cups = ((debt / HOURS_PER_CUP).ceil() as u32).min(MAX_CUPS);

    let tone = match TONES.iter().find(|(min, _)| h >= *min) {
        Some((_, tone)) => *tone,
        None if h > 0.0 => SURVIVAL_TONE,
        None => {
            cups = MAX_CUPS;
            ZERO_SLEEP_TONE
        }
    };

    let cup_word = if cups == 1 { "cup" } else { "cups" };
    let glyphs = "☕".repeat(cups.max(1) as usize);

    Recommendation {
        cups,
        tone,
        is_error: false,
        message: format!("You slept {h} hours.\nCoffee: {cups} {cup_word} {glyphs}\n{tone}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_over_24_is_impossible() {
        let r = recommend(25.0);
        assert!(r.is_error);
        assert_eq!(r.cups, 0);
        assert!(r.message.starts_with("You slept 25 hours."));
        assert!(r.message.contains("spacetime"));
    }

    #[test]
    fn test_negative_and_non_finite_are_invalid() {
        for hours in [-1.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let r = recommend(hours);
            assert!(r.is_error, "{hours} should be rejected");
            assert_eq!(r.cups, 0);
            assert!(r.message.starts_with("Bestie… be serious"));
        }
    }

    #[test]
    fn test_exactly_24_is_reset() {
        let r = recommend(24.0);
        assert!(!r.is_error);
        assert_eq!(r.cups, 0);
        assert_eq!(r.tone, RESET_TONE);
    }

    #[test]
    fn test_zero_hours_is_six_cups() {
        let r = recommend(0.0);
        assert_eq!(r.cups, 6);
        assert_eq!(r.tone, ZERO_SLEEP_TONE);
        assert_eq!(
            r.message,
            "You slept 0 hours.\nCoffee: 6 cups ☕☕☕☕☕☕\nZero sleep?? Bestie please drink water."
        );
    }

    #[test]
    fn test_negative_zero_reads_as_zero() {
        assert!(recommend(-0.0).message.starts_with("You slept 0 hours."));
    }

    #[test]
    fn test_debt_formula() {
        assert_eq!(recommend(8.0).cups, 0);
        assert_eq!(recommend(7.0).cups, 1);
        assert_eq!(recommend(6.5).cups, 1);
        assert_eq!(recommend(6.0).cups, 2);
        assert_eq!(recommend(5.0).cups, 2);
        assert_eq!(recommend(3.0).cups, 4);
        assert_eq!(recommend(0.5).cups, 5);
    }

    #[test]
    fn test_tone_thresholds() {
        assert_eq!(recommend(10.0).tone, TONES[0].1);
        assert_eq!(recommend(9.5).tone, TONES[0].1);
        assert_eq!(recommend(9.4).tone, TONES[1].1);
        assert_eq!(recommend(7.0).tone, TONES[2].1);
        assert_eq!(recommend(4.0).tone, TONES[5].1);
        assert_eq!(recommend(3.9).tone, SURVIVAL_TONE);
    }

    #[test]
    fn test_pluralization_and_glyphs() {
        assert_eq!(
            recommend(7.5).message,
            "You slept 7.5 hours.\nCoffee: 1 cup ☕\nYou’re fine. Don’t overthink it."
        );
        // Zero cups still shows a single glyph.
        assert!(recommend(9.0).message.contains("Coffee: 0 cups ☕\n"));
    }

    #[test]
    fn test_parse_hours_trims_numbers() {
        assert_eq!(parse_hours(" 7.5 "), 7.5);
        assert!(parse_hours("seven").is_nan());
    }

    #[test]
    fn test_blank_hours_is_invalid_not_zero_sleep() {
        assert!(parse_hours("").is_nan());
        assert!(parse_hours("   ").is_nan());
        let r = recommend(parse_hours(""));
        assert!(r.is_error);
        assert_eq!(r.cups, 0);
        assert_ne!(r.tone, ZERO_SLEEP_TONE);
    }
}
