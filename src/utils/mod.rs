// Utilities
pub mod display;
pub mod error;
