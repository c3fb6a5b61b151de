pub mod film_repository;
pub mod like_repository;

pub use film_repository::FilmRepository;
pub use like_repository::LikeRepository;
