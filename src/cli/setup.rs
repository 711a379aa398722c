use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "teleprompt",
    bin_name = "teleprompt",
    version,
    about = "Manage a library of Elgato Prompter scripts"
)]
pub struct Cli {
    /// Directory holding the prompt JSON files
    /// (default: $ELGATO_PROMPTER_DIR, then the current directory)
    #[arg(long, global = true)]
    pub dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new prompt and register it in AppSettings.json
    Add {
        /// friendlyName for the prompt
        #[arg(long)]
        name: String,

        /// Add a chapter line (repeat for multiple)
        #[arg(long = "chapter", value_name = "TEXT")]
        chapters: Vec<String>,

        /// Read chapters from a text file, one per line
        #[arg(long, value_name = "FILE")]
        chapters_file: Option<PathBuf>,

        /// Read chapters from stdin, one per line
        #[arg(long)]
        from_stdin: bool,

        /// Index value; defaults to max existing index + 1
        #[arg(long)]
        index: Option<u32>,

        /// Use a specific GUID instead of generating one
        #[arg(long)]
        guid: Option<String>,

        /// Print the prompt without writing anything
        #[arg(long)]
        dry_run: bool,
    },

    /// Delete prompt(s) and their AppSettings.json entries
    Del {
        #[command(flatten)]
        target: DelTarget,

        /// Delete all matches when a name is ambiguous
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List prompts as a table
    Ls {
        /// Column to sort by
        #[arg(long, value_enum, default_value = "index")]
        sort: SortColumn,

        /// Reverse the sort order
        #[arg(long)]
        reverse: bool,

        /// Limit the number of rows
        #[arg(long)]
        limit: Option<usize>,

        /// Include a column with the chapter text
        #[arg(long)]
        show_chapters: bool,
    },

    /// Repair AppSettings.json to match the prompt files on disk
    Doctor,
}

/// Exactly one way to pick the prompt(s) to delete.
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct DelTarget {
    /// Delete by GUID
    #[arg(long)]
    pub guid: Option<String>,

    /// Delete by exact friendlyName (case-insensitive)
    #[arg(long)]
    pub name: Option<String>,

    /// Delete by exact filename in the directory
    #[arg(long)]
    pub file: Option<String>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum SortColumn {
    Index,
    Name,
    Guid,
    File,
}
