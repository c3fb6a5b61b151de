pub mod service;

pub use service::ReferenceService;
