// Contact page: validation, draft generation, live hints and draft persistence.
// Drafts are only ever built from input that passed validation.

pub mod draft;
pub mod handlers;
pub mod hints;
pub mod models;
pub mod persistence;
pub mod validation;
pub mod view;
