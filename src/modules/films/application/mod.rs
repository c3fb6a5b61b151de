pub mod service;

pub use service::{FilmService, DEFAULT_POPULAR_COUNT};
