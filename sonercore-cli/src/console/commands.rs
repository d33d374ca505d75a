use clap::{Parser, Subcommand};

/// Parser applied to each console input line.
#[derive(Parser, Debug)]
#[command(
    name = "",
    no_binary_name = true,
    disable_help_flag = true,
    disable_version_flag = true,
    disable_help_subcommand = true
)]
pub struct ConsoleReplCommand {
    #[command(subcommand)]
    pub command: ConsoleCommand,
}

/// Supported commands within the console.
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum ConsoleCommand {
    /// Analyze a repository (defaults to the current input URL).
    #[command(name = "analyze")]
    Analyze {
        /// Repository URL; replaces the current input when given.
        repo_url: Option<String>,
    },
    /// Return to the summary and print it.
    #[command(name = "summary")]
    Summary,
    /// Print the analyzed files as a table.
    #[command(name = "files")]
    Files,
    /// Open one function's details.
    #[command(name = "open")]
    Open {
        /// File number as listed in the summary (1-based).
        file: usize,
        /// Function number within that file (1-based).
        function: usize,
    },
    /// History back.
    #[command(name = "back")]
    Back,
    /// History forward.
    #[command(name = "forward")]
    Forward,
    /// Print the source link of the open function.
    #[command(name = "link")]
    Link,
    /// List console commands.
    #[command(name = "help")]
    Help,
    /// Leave the console.
    #[command(name = "exit", alias = "quit")]
    Exit,
}

pub const HELP_TEXT: &str = "\
Commands:
  analyze [url]       analyze the given (or current) repository
  summary             return to the summary
  files               list analyzed files as a table
  open <file> <fn>    open a function's details (numbers from the summary)
  back | forward      move through history
  link                print the source link of the open function
  help                show this list
  exit                leave the console";

/// Parse one console line into a command.
pub fn parse_line(line: &str) -> Result<ConsoleCommand, clap::Error> {
    ConsoleReplCommand::try_parse_from(line.split_whitespace()).map(|parsed| parsed.command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_analyze_with_and_without_url() {
        assert_eq!(
            parse_line("analyze https://github.com/o/r").unwrap(),
            ConsoleCommand::Analyze {
                repo_url: Some("https://github.com/o/r".to_string())
            }
        );
        assert_eq!(
            parse_line("analyze").unwrap(),
            ConsoleCommand::Analyze { repo_url: None }
        );
    }

    #[test]
    fn test_parse_open_positions() {
        assert_eq!(
            parse_line("open 2 3").unwrap(),
            ConsoleCommand::Open {
                file: 2,
                function: 3
            }
        );
        assert!(parse_line("open two 3").is_err());
        assert!(parse_line("open 1").is_err());
    }

    #[test]
    fn test_quit_alias() {
        assert_eq!(parse_line("quit").unwrap(), ConsoleCommand::Exit);
    }

    #[test]
    fn test_unknown_command() {
        assert!(parse_line("frobnicate").is_err());
    }
}
