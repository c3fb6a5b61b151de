pub mod in_memory_friend_repository;
pub mod in_memory_user_repository;

pub use in_memory_friend_repository::InMemoryFriendRepository;
pub use in_memory_user_repository::InMemoryUserRepository;
