pub mod color;
pub mod palette;
pub mod palette_selector;
pub mod rgb;
