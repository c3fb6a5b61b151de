pub mod friend_repository;
pub mod user_repository;

pub use friend_repository::FriendRepository;
pub use user_repository::UserRepository;
