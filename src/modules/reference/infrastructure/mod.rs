pub mod memory;
pub mod models;
pub mod persistence;

pub use memory::{InMemoryGenreRepository, InMemoryMpaRepository};
pub use persistence::{GenreRepositoryImpl, MpaRepositoryImpl};
