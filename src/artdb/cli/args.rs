use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "artdb")]
#[command(about = "Catalogue of bibliographic article records", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Use this snapshot file instead of the configured one
    #[arg(short, long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all records
    #[command(alias = "ls")]
    List,

    /// Add a record
    #[command(alias = "a")]
    Add {
        #[command(flatten)]
        fields: AddFields,
    },

    /// Change fields of one record
    #[command(alias = "e")]
    Edit {
        /// Index or id prefix of the record
        index: String,

        #[command(flatten)]
        fields: EditFields,
    },

    /// Delete one or more records
    #[command(alias = "rm")]
    Delete {
        /// Indexes, ranges or id prefixes (e.g. 1 3-5 9f2c)
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<String>,
    },

    /// Show records in full
    #[command(alias = "v")]
    View {
        /// Indexes, ranges or id prefixes (e.g. 1 3-5 9f2c)
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<String>,
    },

    /// Search by author and/or title (case-insensitive substring)
    #[command(alias = "s")]
    Search {
        #[command(flatten)]
        terms: SearchTerms,
    },

    /// Export records to a text file
    Export {
        /// Indexes, ranges or id prefixes; all records if omitted
        indexes: Vec<String>,

        #[command(flatten)]
        terms: SearchTerms,

        /// Output file (default: articles-<timestamp>.txt)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (data-file, search-mode)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Show where data and configuration live
    Paths,
}

#[derive(Args, Debug)]
pub struct AddFields {
    #[arg(long)]
    pub author: String,

    #[arg(long)]
    pub title: String,

    #[arg(long, default_value = "")]
    pub keywords: String,

    #[arg(long, default_value = "")]
    pub summary: String,

    /// Publication date (default: today, YYYY-MM-DD)
    #[arg(long)]
    pub year: Option<String>,

    /// UDC classification code
    #[arg(long, default_value = "")]
    pub udc: String,
}

#[derive(Args, Debug)]
pub struct EditFields {
    #[arg(long)]
    pub author: Option<String>,

    #[arg(long)]
    pub title: Option<String>,

    #[arg(long)]
    pub keywords: Option<String>,

    #[arg(long)]
    pub summary: Option<String>,

    #[arg(long)]
    pub year: Option<String>,

    #[arg(long)]
    pub udc: Option<String>,
}

#[derive(Args, Debug)]
pub struct SearchTerms {
    #[arg(long, default_value = "")]
    pub author: String,

    #[arg(long, default_value = "")]
    pub title: String,
}

impl SearchTerms {
    pub fn is_empty(&self) -> bool {
        self.author.is_empty() && self.title.is_empty()
    }
}
