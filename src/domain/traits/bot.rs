use async_trait::async_trait;

use crate::application::errors::BotError;
use crate::domain::entities::{FormattedReply, Markup};

/// Bot trait - abstraction for messaging platform adapters
#[async_trait]
pub trait Bot: Send + Sync {
    /// Start the bot and begin listening for messages
    async fn start(&self) -> Result<(), BotError>;

    /// Send a plain-text message to a chat
    async fn send_message(&self, chat_id: &str, text: &str) -> Result<String, BotError>;

    /// Send a Markdown-formatted message to a chat
    async fn send_markdown(&self, chat_id: &str, text: &str) -> Result<String, BotError>;

    /// Send a formatted reply, dispatching on its markup mode
    async fn send_reply(&self, chat_id: &str, reply: &FormattedReply) -> Result<String, BotError> {
        match reply.markup {
            Markup::Plain => self.send_message(chat_id, &reply.text).await,
            Markup::Markdown => self.send_markdown(chat_id, &reply.text).await,
        }
    }

    /// Get bot info
    fn bot_info(&self) -> BotInfo;
}

/// Bot information
#[derive(Debug, Clone)]
pub struct BotInfo {
    pub id: String,
    pub name: String,
    pub username: String,
}
