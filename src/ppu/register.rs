pub mod display;
pub mod mask;
