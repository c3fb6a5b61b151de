pub mod in_memory_film_repository;
pub mod in_memory_like_repository;

pub use in_memory_film_repository::InMemoryFilmRepository;
pub use in_memory_like_repository::InMemoryLikeRepository;
