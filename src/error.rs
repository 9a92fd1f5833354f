use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("channel name cannot be empty")]
    EmptyChannel,

    /// Every channel segment was non-empty but none parsed as an integer.
    /// Raised before any request instead of sending to zero receivers.
    #[error("no valid channel ids in {0:?}")]
    NoValidChannels(String),

    #[error("invalid telegram token: {0}")]
    InvalidToken(String),

    #[error("send message to chat {chat_id}: {reason}")]
    Delivery { chat_id: i64, reason: String },

    /// Always built from `reqwest::Error::without_url`; request URLs contain the bot token.
    #[error("HTTP error: {0}")]
    Http(reqwest::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
