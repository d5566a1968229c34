//! Card data computed from a [`ProjectItem`], independent of markup.
//!
//! Truncation limits are fixed policy. The glow and match flags are cosmetic:
//! they never change which cards are shown.

use serde::Serialize;

use crate::projects::filter::Filter;
use crate::projects::models::ProjectItem;

pub const MAX_TECH_CHIPS: usize = 6;
pub const MAX_HIGHLIGHTS: usize = 3;
pub const MAX_METRICS: usize = 4;
pub const MAX_GLOW_DOMAINS: usize = 3;

pub const DEFAULT_ACCENT: &str = "#64748b";

const DOMAIN_COLORS: &[(&str, &str)] = &[
    ("AI", "#8b5cf6"),
    ("Web", "#0ea5e9"),
    ("Data", "#10b981"),
    ("Design", "#f43f5e"),
    ("HCI", "#f59e0b"),
    ("Research", "#6366f1"),
    ("Mobile", "#14b8a6"),
    ("Systems", "#ef4444"),
];

pub fn domain_color(domain: &str) -> &'static str {
    DOMAIN_COLORS
        .iter()
        .find(|(name, _)| *name == domain)
        .map(|(_, color)| *color)
        .unwrap_or(DEFAULT_ACCENT)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Chip {
    pub text: String,
    pub is_match: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardView {
    pub title: String,
    pub kind: String,
    pub color_key: String,
    /// Org, role and date joined by ` · `; empty when all three are absent.
    pub meta: String,
    pub domains: Vec<Chip>,
    pub tech: Vec<String>,
    pub highlights: Vec<String>,
    pub metrics: Vec<String>,
    pub glow: Vec<&'static str>,
    pub is_match: bool,
}

impl CardView {
    pub fn from_item(item: &ProjectItem, filter: &Filter) -> Self {
        let active_domain = match filter {
            Filter::Domain(domain) => Some(domain.as_str()),
            _ => None,
        };

        CardView {
            title: item
                .title
                .as_deref()
                .filter(|t| !t.is_empty())
                .unwrap_or("Untitled")
                .to_string(),
            kind: item.kind.map(|k| k.as_str()).unwrap_or_default().to_string(),
            color_key: item.color_key.clone().unwrap_or_default(),
            meta: meta_line(item),
            domains: item
                .domains
                .iter()
                .map(|d| Chip {
                    text: d.clone(),
                    is_match: active_domain == Some(d.as_str()),
                })
                .collect(),
            tech: item.tech.iter().take(MAX_TECH_CHIPS).cloned().collect(),
            highlights: item.highlights.iter().take(MAX_HIGHLIGHTS).cloned().collect(),
            metrics: item
                .metrics
                .iter()
                .take(MAX_METRICS)
                .map(|m| m.badge_text())
                .collect(),
            glow: glow_colors(&item.domains),
            is_match: *filter != Filter::All && filter.matches(item),
        }
    }
}

fn meta_line(item: &ProjectItem) -> String {
    [&item.org, &item.role, &item.date_range]
        .into_iter()
        .filter_map(|segment| segment.as_deref())
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join(" · ")
}

/// Colors for the first three distinct domains.
fn glow_colors(domains: &[String]) -> Vec<&'static str> {
    let mut seen: Vec<&str> = Vec::new();
    for domain in domains {
        if seen.len() == MAX_GLOW_DOMAINS {
            break;
        }
        if !seen.contains(&domain.as_str()) {
            seen.push(domain);
        }
    }
    seen.into_iter().map(domain_color).collect()
}
