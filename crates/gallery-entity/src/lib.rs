//! # gallery-entity
//!
//! Domain entities for AsciiGallery: registered users and gallery items.

pub mod item;
pub mod user;

pub use item::GalleryItem;
pub use user::User;
