pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::UserService;
pub use domain::{FriendRepository, NewUser, User, UserRepository};
