//! Command line and run configuration

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};

const STDIN_PATH: &str = "-";

#[derive(Parser, Debug)]
#[command(name = "outline-check", version, about = "Check the heading outline of an HTML document")]
pub struct Cli {
    #[arg(default_value = STDIN_PATH, help = "HTML file to check, or - for stdin")]
    pub input: PathBuf,
    #[arg(long, value_enum, default_value_t = Format::Text, help = "Report format")]
    pub format: Format,
    #[arg(long, help = "Document URL recorded in the report (defaults to the input path)")]
    pub url: Option<String>,
    #[arg(short, long, action = ArgAction::Count, help = "More logging on stderr (-v, -vv, -vvv)")]
    pub verbose: u8,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    /// Indented outline with every violation listed
    Text,
    /// Overlay markup
    Html,
    /// Machine-readable outline
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Stdin,
    File(PathBuf),
}

/// Resolved run options
#[derive(Debug, Clone)]
pub struct Config {
    pub input: Input,
    pub format: Format,
    pub url: String,
    pub verbose: u8,
}

impl Config {
    /// Default log filter when `RUST_LOG` is unset
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        let input = if cli.input.as_os_str() == STDIN_PATH {
            Input::Stdin
        } else {
            Input::File(cli.input)
        };
        let url = cli.url.unwrap_or_else(|| match &input {
            Input::Stdin => "stdin".to_string(),
            Input::File(path) => path.display().to_string(),
        });

        Self {
            input,
            format: cli.format,
            url,
            verbose: cli.verbose,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(args: &[&str]) -> Config {
        Cli::parse_from(std::iter::once("outline-check").chain(args.iter().copied())).into()
    }

    #[test]
    fn test_defaults() {
        let config = config(&[]);
        assert_eq!(config.input, Input::Stdin);
        assert_eq!(config.format, Format::Text);
        assert_eq!(config.url, "stdin");
        assert_eq!(config.log_level(), "warn");
    }

    #[test]
    fn test_file_input_names_url() {
        let config = config(&["page.html", "--format", "json", "-vv"]);
        assert_eq!(config.input, Input::File(PathBuf::from("page.html")));
        assert_eq!(config.format, Format::Json);
        assert_eq!(config.url, "page.html");
        assert_eq!(config.log_level(), "debug");
    }

    #[test]
    fn test_explicit_url() {
        let config = config(&["--url", "https://example.com/", "-"]);
        assert_eq!(config.input, Input::Stdin);
        assert_eq!(config.url, "https://example.com/");
    }
}
