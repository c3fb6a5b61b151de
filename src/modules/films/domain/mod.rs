pub mod entities;
pub mod repositories;

// Re-exports for easy access
pub use entities::{Film, FilmDraft, NewFilm};
pub use repositories::{FilmRepository, LikeRepository};
