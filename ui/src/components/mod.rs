//! UI Components

pub mod auth_box;
pub mod chat_input;
pub mod chat_message;
pub mod loading;
pub mod sidebar;

pub use auth_box::AuthBox;
pub use chat_input::ChatInput;
pub use chat_message::MessageBubble;
pub use loading::{Spinner, ThinkingIndicator};
pub use sidebar::Sidebar;
