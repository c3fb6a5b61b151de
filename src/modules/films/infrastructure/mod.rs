pub mod memory;
pub mod models;
pub mod persistence;

pub use memory::{InMemoryFilmRepository, InMemoryLikeRepository};
pub use persistence::{FilmRepositoryImpl, LikeRepositoryImpl};
