use rand::Rng;

const OPENERS: &[&str] = &["Hi.", "Welcome.", "Oh hey.", "You made it.", "Hello there."];

const ROLES: &[&str] = &[
    "I design and build human-centered systems.",
    "I work at the intersection of data, design, and technology.",
    "I turn messy problems into usable interfaces.",
    "I build things that try to respect users’ time.",
    "I make prototypes and then politely argue with them until they behave.",
];

const ASIDES: &[&str] = &[
    "Sometimes with AI. Always with opinions.",
    "Usually after too many sticky notes.",
    "With fewer dark patterns than average.",
    "So users don’t have to think too hard.",
    "If something feels effortless, I probably suffered for it.",
];

const EXTRAS: &[&str] = &[
    "Scroll if you’re curious.",
    "This is the portfolio version of me.",
    "No buzzwords, I promise (mostly).",
    "Yes, this was intentionally designed.",
    "If you’re here to judge the vibes, fair.",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Greeting {
    pub opener: &'static str,
    pub role: &'static str,
    pub aside: &'static str,
    pub time_line: &'static str,
    pub extra: &'static str,
}

/// One line from each bucket, plus the line for `hour` (0-23, local time).
pub fn compose_greeting<R: Rng>(rng: &mut R, hour: u32) -> Greeting {
    Greeting {
        opener: pick(rng, OPENERS),
        role: pick(rng, ROLES),
        aside: pick(rng, ASIDES),
        time_line: time_aware_line(hour),
        extra: pick(rng, EXTRAS),
    }
}

pub fn time_aware_line(hour: u32) -> &'static str {
    match hour {
        0..=4 => "It’s currently late-night goblin hours. Respectfully, go drink water.",
        5..=11 => "Morning mode: optimism is high, inbox is ignored (for now).",
        12..=16 => "Afternoon mode: productivity is a spectrum and I’m somewhere on it.",
        17..=21 => "Evening mode: I’m either wrapping up… or starting something I’ll regret.",
        _ => "Night mode: I will call it “one more tweak” and that will be a lie.",
    }
}

fn pick<R: Rng>(rng: &mut R, lines: &'static [&'static str]) -> &'static str {
    if lines.is_empty() {
        return "";
    }
    lines[rng.gen_range(0..lines.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_time_buckets() {
        assert!(time_aware_line(0).contains("goblin"));
        assert!(time_aware_line(4).contains("goblin"));
        assert!(time_aware_line(5).starts_with("Morning"));
        assert!(time_aware_line(11).starts_with("Morning"));
        assert!(time_aware_line(12).starts_with("Afternoon"));
        assert!(time_aware_line(16).starts_with("Afternoon"));
        assert!(time_aware_line(17).starts_with("Evening"));
        assert!(time_aware_line(21).starts_with("Evening"));
        assert!(time_aware_line(22).starts_with("Night"));
        assert!(time_aware_line(23).starts_with("Night"));
    }

    #[test]
    fn test_lines_come_from_their_buckets() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let g = compose_greeting(&mut rng, 9);
            assert!(OPENERS.contains(&g.opener));
            assert!(ROLES.contains(&g.role));
            assert!(ASIDES.contains(&g.aside));
            assert!(EXTRAS.contains(&g.extra));
        }
    }

    #[test]
    fn test_same_seed_same_greeting() {
        let a = compose_greeting(&mut StdRng::seed_from_u64(42), 14);
        let b = compose_greeting(&mut StdRng::seed_from_u64(42), 14);
        assert_eq!(a, b);
    }
}
