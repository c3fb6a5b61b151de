pub mod entities;
pub mod repositories;

// Re-exports for easy access
pub use entities::{NewUser, User, UserDraft};
pub use repositories::{FriendRepository, UserRepository};
