// Tools page: sleep-to-coffee calculator and the Earth fact fetcher.

pub mod coffee;
pub mod facts;
pub mod handlers;
pub mod view;
