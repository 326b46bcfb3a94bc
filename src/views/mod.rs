pub mod chat;
pub mod dashboard;
pub mod shared;

pub use chat::{Composer, ConversationLog};
pub use dashboard::DashboardPanel;
