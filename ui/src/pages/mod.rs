//! Pages shown in the content area next to the sidebar

pub mod chat;
pub mod home;
pub mod profile;

pub use chat::ChatPage;
pub use home::HomePage;
pub use profile::ProfilePage;
