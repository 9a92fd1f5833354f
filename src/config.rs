use clap::builder::NonEmptyStringValueParser;
use clap::{Args, Parser, Subcommand};

use crate::utils::default_title;

pub const DEFAULT_API_URL: &str = "https://api.telegram.org";

#[derive(Parser, Debug)]
#[command(name = "pingme", author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Send message to telegram
    #[command(
        long_about = "Telegram uses bot token to authenticate & send messages to defined channels.\n\
                      Multiple channel ids can be used separated by comma ','.\n\
                      All configuration options are also available via environment variables.",
        override_usage = "pingme telegram --token '123' --channel '-123456' --msg 'some message'"
    )]
    Telegram(TelegramArgs),
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct TelegramArgs {
    /// Token of telegram bot used for sending message.
    #[arg(
        short,
        long,
        env = "TELEGRAM_TOKEN",
        hide_env_values = true,
        value_parser = NonEmptyStringValueParser::new()
    )]
    pub token: String,

    /// Channel ids of telegram.
    #[arg(short, long, env = "TELEGRAM_CHANNELS")]
    pub channel: String,

    /// Message content.
    #[arg(short, long, env = "TELEGRAM_MESSAGE", default_value = "")]
    pub msg: String,

    /// Title of the message. Defaults to the current time.
    #[arg(long, env = "TELEGRAM_TITLE")]
    pub title: Option<String>,

    /// Telegram Bot API base URL
    #[arg(long, env = "TELEGRAM_API_URL", default_value = DEFAULT_API_URL, hide = true)]
    pub api_url: String,
}

impl TelegramArgs {
    /// Resolved title; the timestamp default is taken when this is called,
    /// not when the arguments were parsed.
    pub fn title(&self) -> String {
        self.title.clone().unwrap_or_else(default_title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn telegram(args: &[&str]) -> Result<TelegramArgs, clap::Error> {
        let cli = Cli::try_parse_from(args)?;
        match cli.command {
            Commands::Telegram(args) => Ok(args),
        }
    }

    #[test]
    fn test_args_with_required_flags() {
        let args = telegram(&[
            "pingme", "telegram",
            "--token", "123:abc",
            "--channel", "-100123"
        ]).unwrap();

        assert_eq!(args.token, "123:abc");
        assert_eq!(args.channel, "-100123");
        assert_eq!(args.msg, ""); // default
        assert!(args.title.is_none());
        assert_eq!(args.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_args_short_aliases() {
        let args = telegram(&[
            "pingme", "telegram",
            "-t", "123:abc",
            "-c", "1,2,3",
            "-m", "hello"
        ]).unwrap();

        assert_eq!(args.token, "123:abc");
        assert_eq!(args.channel, "1,2,3");
        assert_eq!(args.msg, "hello");
    }

    #[test]
    fn test_args_with_all_options() {
        let args = telegram(&[
            "pingme", "telegram",
            "--token", "123:abc",
            "--channel", "-1,2",
            "--msg", "deploy finished",
            "--title", "CI"
        ]).unwrap();

        assert_eq!(args.msg, "deploy finished");
        assert_eq!(args.title, Some("CI".to_string()));
        assert_eq!(args.title(), "CI");
    }

    #[test]
    fn test_args_missing_token() {
        let result = telegram(&["pingme", "telegram", "--channel", "1"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_args_missing_channel() {
        let result = telegram(&["pingme", "telegram", "--token", "123:abc"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_args_empty_token_rejected() {
        let result = telegram(&["pingme", "telegram", "--token", "", "--channel", "1"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_args_missing_subcommand() {
        let result = Cli::try_parse_from(&["pingme"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_default_title_is_not_empty() {
        let args = telegram(&[
            "pingme", "telegram",
            "--token", "123:abc",
            "--channel", "1"
        ]).unwrap();

        let title = args.title();
        assert!(!title.is_empty());
        assert!(title.starts_with("⏰ "));
    }
}
