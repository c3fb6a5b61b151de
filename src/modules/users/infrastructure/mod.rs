pub mod memory;
pub mod models;
pub mod persistence;

pub use memory::{InMemoryFriendRepository, InMemoryUserRepository};
pub use persistence::{FriendRepositoryImpl, UserRepositoryImpl};
