pub mod friend_repository_impl;
pub mod user_repository_impl;

pub use friend_repository_impl::FriendRepositoryImpl;
pub use user_repository_impl::UserRepositoryImpl;
