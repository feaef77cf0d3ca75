// UI Layer
pub mod components;
pub mod i18n;
pub mod icons;
pub mod layout;
pub mod theme;

// Re-export layout types for convenience
pub use layout::{FocusArea, LayoutManager, MIN_HEIGHT, MIN_WIDTH};

pub use i18n::LocaleStore;
pub use icons::{GlyphIconProvider, IconMode, IconProvider};
pub use theme::{Theme, ThemeStore};
