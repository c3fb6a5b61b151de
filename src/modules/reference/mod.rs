pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::ReferenceService;
pub use domain::{Genre, GenreRepository, Mpa, MpaRepository};
