// UI Components
pub mod card_grid;
pub mod chat_view;
pub mod command_bar;
pub mod help_view;
pub mod placeholder;
pub mod settings_view;
pub mod sidebar;
pub mod status_bar;
pub mod tab_bar;
pub mod warning;

// Re-export components for convenience
pub use card_grid::{CardGrid, CardTile};
pub use chat_view::ChatView;
pub use command_bar::{CommandBar, CommandItem};
pub use help_view::HelpView;
pub use placeholder::Placeholder;
pub use settings_view::SettingsView;
pub use sidebar::Sidebar;
pub use status_bar::StatusBar;
pub use tab_bar::{TabBar, TabLabel};
pub use warning::WarningScreen;
