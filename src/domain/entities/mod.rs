//! Domain entities - Core business objects with no external dependencies

pub mod address;
pub mod command;
pub mod message;
pub mod quote;
pub mod user;

pub use address::MintAddress;
pub use command::{Command, CommandRegistry};
pub use message::{Content, Message, MessageType};
pub use quote::{FormattedReply, Markup, SwapQuote};
pub use user::User;
