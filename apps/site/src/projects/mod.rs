// Projects page: load the static dataset, filter by kind or domain tag, and
// render cards. Card data (cards.rs) is computed separately from markup (view.rs).

pub mod cards;
pub mod filter;
pub mod handlers;
pub mod loader;
pub mod models;
pub mod page;
pub mod view;
