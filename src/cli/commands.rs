//! CLI commands and argument parsing

use crate::types::Direction;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// pagekit CLI
#[derive(Parser, Debug)]
#[command(name = "pagekit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// List configuration file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a normalized pagination request
    Request {
        /// Requested page size (omit to use the default)
        #[arg(long)]
        page_size: Option<usize>,

        /// Paging direction
        #[arg(long, value_enum)]
        direction: Option<DirectionArg>,

        /// Cursor of the first item on the current page
        #[arg(long)]
        start_cursor: Option<String>,

        /// Cursor of the last item on the current page
        #[arg(long)]
        end_cursor: Option<String>,

        #[arg(long, default_value = "20")]
        default_page_size: usize,

        #[arg(long)]
        min_page_size: Option<usize>,

        #[arg(long)]
        max_page_size: Option<usize>,
    },

    /// Decode a location query string
    Location {
        /// Query string (e.g. "?page=2&pageSize=20")
        search: String,

        /// Total number of items, used to clamp the page
        #[arg(long)]
        total: usize,

        #[arg(long, default_value = "20")]
        default_page_size: usize,
    },

    /// Print the page-button list for a pager
    Buttons {
        #[arg(long)]
        total_pages: usize,

        #[arg(long)]
        current: usize,
    },

    /// Page through a JSON array of items
    Browse {
        /// JSON file holding an array of items
        #[arg(long)]
        items: PathBuf,

        /// List name from the config file (default: first list)
        #[arg(long)]
        list: Option<String>,

        /// Initial location query string
        #[arg(long)]
        search: Option<String>,

        /// Change the page size after the initial load
        #[arg(long)]
        page_size: Option<usize>,

        /// Filter as key=value (repeatable)
        #[arg(long = "filter", value_name = "KEY=VALUE")]
        filters: Vec<String>,

        /// Jump to a page (1-based)
        #[arg(long)]
        page: Option<usize>,

        /// Go to the next page (repeatable)
        #[arg(long, action = ArgAction::Count)]
        next: u8,

        /// Go to the previous page (repeatable)
        #[arg(long, action = ArgAction::Count)]
        prev: u8,

        /// Load more items (repeatable, load-more lists only)
        #[arg(long, action = ArgAction::Count)]
        load_more: u8,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one document per line)
    Json,
    /// Human-readable output
    Pretty,
}

/// Paging direction argument
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum DirectionArg {
    Forward,
    Backward,
}

impl From<DirectionArg> for Direction {
    fn from(arg: DirectionArg) -> Self {
        match arg {
            DirectionArg::Forward => Direction::Forward,
            DirectionArg::Backward => Direction::Backward,
        }
    }
}
