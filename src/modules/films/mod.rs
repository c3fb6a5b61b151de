pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::{FilmService, DEFAULT_POPULAR_COUNT};
pub use domain::{Film, FilmRepository, LikeRepository, NewFilm};
