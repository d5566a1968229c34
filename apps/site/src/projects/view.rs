use maud::{html, Markup};

use crate::projects::cards::CardView;
use crate::projects::filter::Filter;
use crate::projects::page::ProjectsPage;

pub const LOAD_FAILED_HINT: &str = "Could not load projects. If you're opening the HTML file \
directly, use Live Server or a local web server.";
pub const NO_MATCHES: &str = "No items match this filter.";

/// Entrance stagger between consecutive cards.
const STAGGER_STEP_MS: usize = 70;
const ENTER_DURATION_MS: usize = 220;

pub fn render(page: &ProjectsPage, animations: bool) -> Markup {
    let cards = page.cards();
    html! {
        section class="projects" {
            h1 { "Projects" }
            (render_filters(&page.filter_options(), page.active_filter()))
            div id="projects-grid" {
                @if cards.is_empty() {
                    p class="grid-status" { (NO_MATCHES) }
                } @else {
                    @for (index, card) in cards.iter().enumerate() {
                        (render_card(card, index, animations))
                    }
                }
            }
        }
    }
}

/// Page body when the data could not be loaded.
pub fn render_unavailable() -> Markup {
    html! {
        section class="projects" {
            h1 { "Projects" }
            div id="projects-grid" {
                p class="grid-status" { (LOAD_FAILED_HINT) }
            }
        }
    }
}

fn render_filters(options: &[Filter], active: &Filter) -> Markup {
    html! {
        form id="filters" method="get" action="/projects" {
            @for option in options {
                @let is_active = option == active;
                button type="submit" name="filter" value=(option.as_str())
                    data-filter=(option.as_str())
                    class=[is_active.then_some("is-active")]
                    aria-pressed=(if is_active { "true" } else { "false" }) {
                    (option.label())
                }
            }
        }
    }
}

pub fn render_card(card: &CardView, index: usize, animations: bool) -> Markup {
    let mut class = String::from("project-card");
    if card.is_match {
        class.push_str(" is-match");
    }
    if !card.glow.is_empty() {
        class.push_str(" has-glow");
    }
    if animations {
        class.push_str(" card-enter");
    }
    let domains = card
        .domains
        .iter()
        .map(|c| c.text.as_str())
        .collect::<Vec<_>>()
        .join(",");

    html! {
        article class=(class) style=(card_style(card, index, animations))
            data-kind=(card.kind) data-colorkey=(card.color_key)
            data-domains=(domains) {
            h3 { (card.title) }
            @if !card.meta.is_empty() {
                p class="project-meta" { (card.meta) }
            }
            @if !card.domains.is_empty() || !card.tech.is_empty() {
                div class="chips" {
                    @if !card.domains.is_empty() {
                        div class="chip-row chip-row--domains" {
                            @for chip in &card.domains {
                                span class=(if chip.is_match { "chip chip-domain is-match" } else { "chip chip-domain" }) {
                                    (chip.text)
                                }
                            }
                        }
                    }
                    @if !card.tech.is_empty() {
                        div class="chip-row chip-row--tech" {
                            @for tech in &card.tech {
                                span class="chip chip-tech" { (tech) }
                            }
                        }
                    }
                }
            }
            @if !card.highlights.is_empty() {
                ul class="highlights" {
                    @for highlight in &card.highlights {
                        li { (highlight) }
                    }
                }
            }
            @if !card.metrics.is_empty() {
                div class="metrics" {
                    @for metric in &card.metrics {
                        span class="metric-badge" { (metric) }
                    }
                }
            }
        }
    }
}

fn card_style(card: &CardView, index: usize, animations: bool) -> String {
    let mut style = card
        .glow
        .iter()
        .enumerate()
        .map(|(i, color)| format!("--glow-{}: {color};", i + 1))
        .collect::<Vec<_>>()
        .join(" ");
    if animations {
        if !style.is_empty() {
            style.push(' ');
        }
        style.push_str(&format!(
            "animation-delay: {}ms; animation-duration: {ENTER_DURATION_MS}ms;",
            index * STAGGER_STEP_MS
        ));
    }
    style
}
