//! Shared page shell: nav/footer partials, theme, and the page layout every
//! route renders into.

pub mod handlers;
pub mod layout;
pub mod partials;
pub mod theme;

use chrono::{Datelike, Local};

use crate::shell::layout::PageChrome;
use crate::shell::partials::load_partials;
use crate::shell::theme::load_theme;
use crate::state::AppState;
use crate::visitor::Visitor;

/// Gathers what the layout needs for one render: the visitor's theme and the
/// freshly read partials.
pub async fn chrome(state: &AppState, visitor: Visitor) -> PageChrome {
    let theme = load_theme(state.storage.as_ref(), visitor.0).await;
    let partials = load_partials(&state.config.site_root, Local::now().year()).await;
    PageChrome {
        theme,
        partials,
        animations: state.config.animations,
    }
}
