pub mod film_repository_impl;
pub mod like_repository_impl;

pub use film_repository_impl::FilmRepositoryImpl;
pub use like_repository_impl::LikeRepositoryImpl;
