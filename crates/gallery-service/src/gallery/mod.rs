//! Gallery orchestration.

pub mod service;

pub use service::GalleryService;
