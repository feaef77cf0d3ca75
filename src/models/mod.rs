// Data Models
pub mod chat;
pub mod page;
pub mod sidebar;
pub mod tab_host;

pub use page::{CardType, PageId, PageKey};
pub use sidebar::{NavEntry, SidebarNav};
pub use tab_host::TabHost;
