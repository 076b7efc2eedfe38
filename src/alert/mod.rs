pub mod discord;
pub mod error;
pub mod types;

pub use discord::DiscordWebhook;
pub use error::AlertError;
