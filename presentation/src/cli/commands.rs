//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for assistant answers
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Answer, classification details and result rows
    Full,
    /// Only the answer text
    Answer,
    /// JSON document (same shape as the web assistant response)
    Json,
}

impl From<OutputFormat> for assistant_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => Self::Full,
            OutputFormat::Answer => Self::Answer,
            OutputFormat::Json => Self::Json,
        }
    }
}

/// CLI arguments for smarthealth-assistant
#[derive(Parser, Debug)]
#[command(name = "smarthealth-assistant")]
#[command(author, version, about = "Medical assistant - French questions answered from a SPARQL triple store")]
#[command(long_about = r#"
SmartHealth Assistant answers French questions about medical services,
prices, exams, patients, payments and statistics.

Each question is matched against a table of patterns, translated into a
SPARQL query, run against the Fuseki dataset and phrased back in French.

Configuration files are loaded from (in priority order):
1. FUSEKI_URL / FUSEKI_USER / FUSEKI_PASSWORD   Environment
2. --config <path>         Explicit config file
3. ./assistant.toml        Project-level config
4. ~/.config/smarthealth-assistant/config.toml   Global config

Example:
  smarthealth-assistant "Combien coûte une consultation en cardiologie ?"
  smarthealth-assistant --output json "Liste des patients"
  smarthealth-assistant --chat --show-sparql
"#)]
pub struct Cli {
    /// The question to ask (not required in chat mode)
    pub question: Option<String>,

    /// Start interactive chat mode
    #[arg(short, long)]
    pub chat: bool,

    /// List example questions and exit
    #[arg(long)]
    pub examples: bool,

    /// Describe what the assistant can answer and exit
    #[arg(long)]
    pub capabilities: bool,

    /// Check the SPARQL endpoint and exit
    #[arg(long)]
    pub status: bool,

    /// Output format (overrides the config file)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Fuseki dataset URL (overrides config and FUSEKI_URL)
    #[arg(short, long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Include the generated SPARQL query in the output
    #[arg(long)]
    pub show_sparql: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_question_with_flags() {
        let cli = Cli::parse_from([
            "smarthealth-assistant",
            "-vv",
            "--output",
            "json",
            "--endpoint",
            "http://fuseki:3030/smarthealth",
            "--show-sparql",
            "Liste des patients",
        ]);

        assert_eq!(cli.question.as_deref(), Some("Liste des patients"));
        assert_eq!(cli.output, Some(OutputFormat::Json));
        assert_eq!(cli.endpoint.as_deref(), Some("http://fuseki:3030/smarthealth"));
        assert!(cli.show_sparql);
        assert_eq!(cli.verbose, 2);
        assert!(!cli.chat);
    }

    #[test]
    fn test_output_defaults_to_config() {
        let cli = Cli::parse_from(["smarthealth-assistant", "--chat"]);
        assert!(cli.output.is_none());
        assert!(cli.question.is_none());
    }
}
