//! CLI command definitions and argument parsing.

use catalog_domain::TagMode;
use clap::{Parser, Subcommand};

/// Browse the use case catalog: filter by tag, search, and pick one.
#[derive(Debug, Parser)]
#[command(name = "usecases")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Catalog location (file path or http(s) URL)
    #[arg(short, long, global = true, env = "USECASES_DATA")]
    pub data: Option<String>,

    /// How several tags combine
    #[arg(short, long, value_enum, global = true)]
    pub mode: Option<ModeArg>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (IDs only)
    Quiet,
}

/// Tag mode options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ModeArg {
    /// Records with any of the tags
    Any,
    /// Records with all of the tags
    All,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List use cases matching tags and search
    List(ListArgs),

    /// List available tags
    Tags(TagsArgs),

    /// Show one use case in detail
    Show(ShowArgs),

    /// Enter interactive REPL mode
    Repl,
}

/// Arguments for the list command.
#[derive(Debug, Default, Parser)]
pub struct ListArgs {
    /// Filter by tag (repeatable)
    #[arg(short, long = "tag")]
    pub tags: Vec<String>,

    /// Free-text search over name, description and tags
    #[arg(short, long)]
    pub search: Option<String>,
}

/// Arguments for the tags command.
#[derive(Debug, Default, Parser)]
pub struct TagsArgs {
    /// Only show tags containing this text
    #[arg(short, long)]
    pub search: Option<String>,
}

/// Arguments for the show command.
#[derive(Debug, Parser)]
pub struct ShowArgs {
    /// Use case id
    pub id: String,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

impl From<ModeArg> for TagMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Any => TagMode::Any,
            ModeArg::All => TagMode::All,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_is_repl() {
        let cli = Cli::parse_from(["usecases"]);
        assert!(cli.command.is_none());
        assert!(!cli.no_color);
    }

    #[test]
    fn test_list_command() {
        let cli = Cli::parse_from([
            "usecases",
            "list",
            "--tag",
            "Education",
            "-t",
            "Course",
            "--search",
            "site",
            "--mode",
            "all",
        ]);
        assert_eq!(cli.mode, Some(ModeArg::All));
        match cli.command {
            Some(Command::List(args)) => {
                assert_eq!(args.tags, vec!["Education", "Course"]);
                assert_eq!(args.search.as_deref(), Some("site"));
            }
            _ => panic!("Expected List command"),
        }
    }

    #[test]
    fn test_show_command() {
        let cli = Cli::parse_from(["usecases", "--format", "json", "show", "course"]);
        assert!(matches!(cli.format, Some(CliFormat::Json)));
        match cli.command {
            Some(Command::Show(args)) => assert_eq!(args.id, "course"),
            _ => panic!("Expected Show command"),
        }
    }

    #[test]
    fn test_mode_conversion() {
        let mode: TagMode = ModeArg::All.into();
        assert_eq!(mode, TagMode::All);
    }
}
