//! UI layer: the console rendition of the screen's display regions.

pub mod console;

pub use console::ConsoleSurface;
