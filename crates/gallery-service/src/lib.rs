//! # gallery-service
//!
//! The gallery item pipeline: uploaded images are rendered to ASCII art,
//! labeled by a recognition backend, and indexed per owner.
//!
//! ## Modules
//!
//! - `ascii` — image-to-ASCII rendering
//! - `recognition` — label detection behind the `LabelDetector` trait
//! - `index` — per-owner item storage behind the `GalleryIndex` trait
//! - `gallery` — the orchestrating `GalleryService`

pub mod ascii;
pub mod gallery;
pub mod index;
pub mod recognition;

pub use ascii::AsciiRenderer;
pub use gallery::GalleryService;
pub use index::GalleryIndex;
pub use recognition::LabelDetector;
