//! CLI argument parsing using clap derive

use clap::{Parser, Subcommand, ValueEnum};

/// Developer Toolbox - browse and organize the tool catalogue
#[derive(Parser, Debug)]
#[command(name = "toolbox")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Treat the host color scheme as dark
    #[arg(long, global = true)]
    pub system_dark: bool,

    /// Output as JSON for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// List tools in display order (pinned first)
    List {
        /// Only tools carrying this tag
        #[arg(short, long)]
        tag: Option<String>,

        /// Only favorite tools
        #[arg(short, long)]
        favorites: bool,
    },

    /// Search tools by name, description or tag
    Search {
        /// Case-insensitive search text
        query: String,
    },

    /// Show everything known about one tool
    Show {
        /// Tool identifier, e.g. json or imageToAscii
        id: String,
    },

    /// Navigate to a path and report where it lands
    ///
    /// Examples:
    ///   toolbox open /                      # Home
    ///   toolbox open /tool/json             # A tool view
    Open {
        /// Navigation path
        path: String,
    },

    /// Pin or unpin a tool
    Pin {
        /// Tool identifier
        id: String,
    },

    /// Add or remove a tool from the favorites
    Favorite {
        /// Tool identifier
        id: String,
    },

    /// Move a tool to the position of another
    Reorder {
        /// Tool to move
        from: String,

        /// Tool whose position it takes
        to: String,
    },

    /// Record that a tool was used
    Use {
        /// Tool identifier
        id: String,
    },

    /// List recently used tools, most recent first
    Recent,

    /// Count tools per tag
    Tags,

    /// Show or change the theme
    Theme {
        /// New setting; omit to show the current theme
        #[arg(value_enum)]
        setting: Option<ThemeSetting>,
    },

    /// Print the JSON schema of tool manifests (info.json)
    Schema,

    /// Forget all tool preferences
    Reset,
}

/// Theme choices accepted on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeSetting {
    Light,
    Dark,
    /// Toggle following the system color scheme
    Auto,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list_with_tag() {
        let cli = Cli::try_parse_from(["toolbox", "list", "--tag", "json"]).unwrap();
        assert_eq!(
            cli.command,
            Commands::List {
                tag: Some("json".to_string()),
                favorites: false
            }
        );
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["toolbox", "theme", "auto", "--system-dark"]).unwrap();
        assert!(cli.system_dark);
        assert_eq!(
            cli.command,
            Commands::Theme {
                setting: Some(ThemeSetting::Auto)
            }
        );
    }

    #[test]
    fn test_reorder_requires_two_ids() {
        assert!(Cli::try_parse_from(["toolbox", "reorder", "a"]).is_err());
    }
}
