pub mod entities;
pub mod repositories;

// Re-exports for easy access
pub use entities::{Genre, Mpa};
pub use repositories::{GenreRepository, MpaRepository};
