//! ASCII art rendering.

pub mod renderer;

pub use renderer::AsciiRenderer;
