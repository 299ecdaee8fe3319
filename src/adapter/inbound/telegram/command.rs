//! Telegram command parsing.

/// Supported Telegram commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TelegramCommand {
    Start,
    TestStake,
}

/// Parse error for Telegram command messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandParseError {
    NotACommand,
    UnknownCommand(String),
}

impl std::fmt::Display for CommandParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotACommand => write!(f, "message is not a command"),
            Self::UnknownCommand(cmd) => write!(f, "unknown command `{cmd}`"),
        }
    }
}

impl std::error::Error for CommandParseError {}

/// Parse a Telegram message into a bot command.
///
/// Accepts `/cmd` and `/cmd@botname`; trailing arguments are ignored.
pub fn parse_command(text: &str) -> Result<TelegramCommand, CommandParseError> {
    let Some(raw_command) = text.split_whitespace().next() else {
        return Err(CommandParseError::NotACommand);
    };
    if !raw_command.starts_with('/') {
        return Err(CommandParseError::NotACommand);
    }

    let command = raw_command
        .split_once('@')
        .map_or(raw_command, |(head, _)| head);

    match command {
        "/start" => Ok(TelegramCommand::Start),
        "/teststake" => Ok(TelegramCommand::TestStake),
        other => Err(CommandParseError::UnknownCommand(other.to_string())),
    }
}

/// Reply sent for `/start`.
pub const WELCOME: &str = "Welcome";

/// Bot commands for Telegram menu registration.
///
/// Returns tuples of (command, description) for `set_my_commands`.
#[must_use]
pub fn bot_commands() -> Vec<(&'static str, &'static str)> {
    vec![("teststake", "Test stake message")]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_commands() {
        assert_eq!(parse_command("/start").unwrap(), TelegramCommand::Start);
        assert_eq!(
            parse_command("/teststake").unwrap(),
            TelegramCommand::TestStake
        );
    }

    #[test]
    fn parse_command_with_bot_mention() {
        assert_eq!(
            parse_command("/teststake@zkstake_bot").unwrap(),
            TelegramCommand::TestStake
        );
    }

    #[test]
    fn parse_command_ignores_arguments() {
        assert_eq!(
            parse_command("/teststake now please").unwrap(),
            TelegramCommand::TestStake
        );
    }

    #[test]
    fn parse_not_a_command() {
        assert_eq!(parse_command(""), Err(CommandParseError::NotACommand));
        assert_eq!(parse_command("hello"), Err(CommandParseError::NotACommand));
    }

    #[test]
    fn parse_unknown_command() {
        assert_eq!(
            parse_command("/status"),
            Err(CommandParseError::UnknownCommand("/status".into()))
        );
    }

    #[test]
    fn bot_commands_cover_test_stake() {
        assert!(bot_commands().iter().any(|(cmd, _)| *cmd == "teststake"));
    }
}
