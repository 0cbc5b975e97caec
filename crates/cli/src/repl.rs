//! Line commands for the interactive session.

use session::Location;

pub const HELP: &str = "\
Type a movie title and press enter to search (empty line: default titles).
  :open N            show details of result N
  :close             close the details view
  :location NAME     set the location (or 'none' to clear)
  :help              show this help
  :quit              leave";

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Search(String),
    /// Zero-based index into the current grid
    Open(usize),
    Close,
    SetLocation(Option<Location>),
    Help,
    Quit,
    Invalid(String),
}

impl ReplCommand {
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        let Some(command) = trimmed.strip_prefix(':') else {
            // Anything that is not a command is a search, typed text kept as is
            return ReplCommand::Search(line.trim_end_matches(['\r', '\n']).to_string());
        };

        let (name, arg) = match command.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (command, ""),
        };

        match name {
            "open" | "o" => match arg.parse::<usize>() {
                Ok(n) if n >= 1 => ReplCommand::Open(n - 1),
                _ => ReplCommand::Invalid(format!("':open' needs a result number, got '{}'", arg)),
            },
            "close" | "c" => ReplCommand::Close,
            "location" | "l" => {
                if arg.is_empty() || arg.eq_ignore_ascii_case("none") {
                    ReplCommand::SetLocation(None)
                } else {
                    match arg.parse::<Location>() {
                        Ok(location) => ReplCommand::SetLocation(Some(location)),
                        Err(e) => ReplCommand::Invalid(e.to_string()),
                    }
                }
            }
            "help" | "h" | "?" => ReplCommand::Help,
            "quit" | "q" | "exit" => ReplCommand::Quit,
            other => ReplCommand::Invalid(format!("Unknown command ':{}'", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_search() {
        assert_eq!(ReplCommand::parse("Raja Rani"), ReplCommand::Search("Raja Rani".into()));
        assert_eq!(ReplCommand::parse(""), ReplCommand::Search(String::new()));
    }

    #[test]
    fn test_open_is_one_based() {
        assert_eq!(ReplCommand::parse(":open 1"), ReplCommand::Open(0));
        assert_eq!(ReplCommand::parse(":o 3"), ReplCommand::Open(2));
        assert!(matches!(ReplCommand::parse(":open 0"), ReplCommand::Invalid(_)));
        assert!(matches!(ReplCommand::parse(":open x"), ReplCommand::Invalid(_)));
    }

    #[test]
    fn test_location_commands() {
        assert_eq!(
            ReplCommand::parse(":location mumbai"),
            ReplCommand::SetLocation(Some(Location::Mumbai))
        );
        assert_eq!(ReplCommand::parse(":location none"), ReplCommand::SetLocation(None));
        assert!(matches!(
            ReplCommand::parse(":location Atlantis"),
            ReplCommand::Invalid(_)
        ));
    }

    #[test]
    fn test_other_commands() {
        assert_eq!(ReplCommand::parse(":close"), ReplCommand::Close);
        assert_eq!(ReplCommand::parse(":quit"), ReplCommand::Quit);
        assert_eq!(ReplCommand::parse(":help"), ReplCommand::Help);
        assert!(matches!(ReplCommand::parse(":dance"), ReplCommand::Invalid(_)));
    }
}
