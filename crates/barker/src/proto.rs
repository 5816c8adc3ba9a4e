//! Line protocol spoken over the marquee control socket. One command per
//! line, newline terminated.

use std::fmt;
use std::io::Write;
use std::os::unix::net::UnixStream;
use std::str::FromStr;
use thiserror::Error;

pub const SOCKET_PATH: &str = "/tmp/marquee.sock";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlCommand {
    Next,
    Previous,
    Select(usize),
    Reload,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseCommandError {
    #[error("unknown command '{0}'")]
    Unknown(String),
    #[error("'select' takes a slide index, got '{0}'")]
    BadIndex(String),
}

impl FromStr for ControlCommand {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let line = s.trim();
        match line {
            "next" => return Ok(Self::Next),
            "previous" => return Ok(Self::Previous),
            "reload" => return Ok(Self::Reload),
            _ => {}
        }
        if let Some(("select", arg)) = line.split_once(char::is_whitespace) {
            let arg = arg.trim();
            return arg
                .parse()
                .map(Self::Select)
                .map_err(|_| ParseCommandError::BadIndex(arg.to_string()));
        }
        Err(ParseCommandError::Unknown(line.to_string()))
    }
}

impl fmt::Display for ControlCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Next => write!(f, "next"),
            Self::Previous => write!(f, "previous"),
            Self::Select(index) => write!(f, "select {}", index),
            Self::Reload => write!(f, "reload"),
        }
    }
}

/// Sends a single command to the running carousel.
pub fn send(command: ControlCommand) -> anyhow::Result<()> {
    let mut stream = UnixStream::connect(SOCKET_PATH).map_err(|e| {
        anyhow::anyhow!(
            "Failed to connect to marquee at {}: {}. Is marquee running?",
            SOCKET_PATH,
            e
        )
    })?;

    writeln!(stream, "{}", command)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bare_commands() {
        assert_eq!("next".parse(), Ok(ControlCommand::Next));
        assert_eq!("previous".parse(), Ok(ControlCommand::Previous));
        assert_eq!("reload".parse(), Ok(ControlCommand::Reload));
        assert_eq!(" next \n".parse(), Ok(ControlCommand::Next));
    }

    #[test]
    fn parses_select_with_index() {
        assert_eq!("select 3".parse(), Ok(ControlCommand::Select(3)));
        assert_eq!("select 0".parse(), Ok(ControlCommand::Select(0)));
        assert_eq!("select  7".parse(), Ok(ControlCommand::Select(7)));
    }

    #[test]
    fn select_requires_a_separator() {
        assert_eq!(
            "select3".parse::<ControlCommand>(),
            Err(ParseCommandError::Unknown("select3".to_string()))
        );
        assert_eq!(
            "select".parse::<ControlCommand>(),
            Err(ParseCommandError::Unknown("select".to_string()))
        );
    }

    #[test]
    fn rejects_garbage() {
        assert!("prev".parse::<ControlCommand>().is_err());
        assert!("".parse::<ControlCommand>().is_err());
        assert_eq!(
            "select two".parse::<ControlCommand>(),
            Err(ParseCommandError::BadIndex("two".to_string()))
        );
    }

    #[test]
    fn display_round_trips() {
        for cmd in [
            ControlCommand::Next,
            ControlCommand::Previous,
            ControlCommand::Select(7),
            ControlCommand::Reload,
        ] {
            assert_eq!(cmd.to_string().parse(), Ok(cmd));
        }
    }
}
