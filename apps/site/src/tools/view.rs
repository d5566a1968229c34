use maud::{html, Markup};

use crate::tools::coffee::Recommendation;
use crate::tools::facts::EarthFact;

pub const FACT_FAILED: &str = "Couldn’t fetch an Earth fact right now. Try again in a moment.";
const FACT_BUTTON_LABEL: &str = "Get Earth fact";
const FACT_BUSY_LABEL: &str = "Fetching...";

/// State of the Earth fact panel after a request completes. The trigger is
/// always enabled again once any of these renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FactPanel {
    Idle,
    Loaded(EarthFact),
    Failed,
}

pub struct CoffeePanel<'a> {
    pub hours: &'a str,
    pub result: Option<&'a Recommendation>,
}

pub fn render(coffee: &CoffeePanel<'_>, fact: &FactPanel, animations: bool) -> Markup {
    html! {
        section class="tools" {
            h1 { "Tools" }
            (render_coffee(coffee, animations))
            (render_fact(fact, animations))
        }
    }
}

fn render_coffee(panel: &CoffeePanel<'_>, animations: bool) -> Markup {
    html! {
        article class="tool" id="sleep-tool" {
            h2 { "Sleep → Coffee" }
            form id="sleep-form" method="post" action="/tools/coffee" {
                label for="sleep-hours" { "Hours slept last night" }
                input id="sleep-hours" name="hours" type="number" step="0.5" min="0" max="24"
                    value=(panel.hours);
                button type="submit" { "Recommend" }
            }
            @if let Some(result) = panel.result {
                pre id="sleep-result" aria-live="polite"
                    class=[animations.then_some("animate-in")]
                    data-state=(if result.is_error { "error" } else { "ok" }) {
                    (result.message)
                }
            } @else {
                pre id="sleep-result" aria-live="polite" {}
            }
        }
    }
}

fn render_fact(panel: &FactPanel, animations: bool) -> Markup {
    let fade = animations.then_some("fade-in");
    html! {
        article class="tool" id="earth-tool" {
            h2 { "Earth facts" }
            form method="post" action="/tools/fact" {
                button id="get-earth-fact" type="submit" data-busy-label=(FACT_BUSY_LABEL) {
                    (FACT_BUTTON_LABEL)
                }
            }
            @match panel {
                FactPanel::Idle => {
                    p id="earth-status" data-state="" {}
                }
                FactPanel::Loaded(fact) => {
                    p id="earth-status" data-state="" {}
                    figure class="earth-figure" {
                        img id="earth-image" class=[fade] src=(fact.image)
                            alt="Random Earth image from Bootprint";
                        figcaption id="earth-fact" class=[fade] { (fact.fact) }
                    }
                }
                FactPanel::Failed => {
                    p id="earth-status" data-state="error" { (FACT_FAILED) }
                }
            }
        }
    }
}
