use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::collections::SortKey;

/// Main CLI parser structure
#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Check, list and scaffold the content of a personal blog", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Site root holding the configuration file (defaults to ./)
    #[arg(short, long, value_name = "DIR", global = true)]
    pub source: Option<PathBuf>,

    /// Content directory, relative to the site root (defaults to src/content/blog)
    #[arg(long, value_name = "DIR", global = true)]
    pub content: Option<PathBuf>,

    /// Public asset directory, relative to the site root (defaults to public)
    #[arg(long, value_name = "DIR", global = true)]
    pub public: Option<PathBuf>,

    /// Configuration file, relative to the site root; repeat to layer several, later files win
    #[arg(short, long, value_name = "CONFIG_FILE", global = true)]
    pub config: Vec<PathBuf>,

    /// Show the full backtrace when an error occurs
    #[arg(short, long, default_value_t = false, global = true)]
    pub trace: bool,

    /// Enable verbose debugging
    #[arg(short = 'g', long, default_value_t = false, global = true)]
    pub debug: bool,

    /// Only log warnings and errors
    #[arg(short, long, default_value_t = false, global = true)]
    pub quiet: bool,
}

/// Listing order accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortArg {
    /// Newest first
    Date,
    Title,
    Path,
}

impl From<SortArg> for SortKey {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Date => SortKey::Date,
            SortArg::Title => SortKey::Title,
            SortArg::Path => SortKey::Path,
        }
    }
}

/// Subcommands for the CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Validate the site configuration and every article
    #[command(alias = "c")]
    Check {
        /// Print the report as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// List valid articles
    #[command(alias = "ls")]
    List {
        /// Sort order
        #[arg(long, value_enum, default_value_t = SortArg::Date)]
        sort: SortArg,

        /// Only articles carrying this tag
        #[arg(long, value_name = "TAG")]
        tag: Option<String>,

        /// Print JSON instead of text
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Show every tag with the articles carrying it
    Tags {
        /// Print JSON instead of text
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Show the metadata, statistics and body of one article
    Show {
        /// Article slug
        slug: String,
    },

    /// Create a new article
    #[command(alias = "n")]
    New {
        /// Article title; the file name is derived from it
        title: String,

        /// Author name
        #[arg(short, long)]
        author: String,

        /// Short description (defaults to the title)
        #[arg(long)]
        description: Option<String>,

        /// Cover image reference
        #[arg(short, long, default_value = "/images/placeholder.png")]
        image: String,

        /// Tag; repeat for several
        #[arg(long = "tag", value_name = "TAG", required = true)]
        tags: Vec<String>,

        /// Overwrite an existing file
        #[arg(long, default_value_t = false)]
        force: bool,
    },

    /// Print the site configuration, or one key of it (e.g. `logo.src`)
    Config {
        key: Option<String>,
    },
}
