use clap::{ArgAction, Parser, Subcommand};
use eventdeck::model::CollectionKind;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "eventdeck", version)]
#[command(about = "Manage the persisted collections behind an event dashboard", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory holding the collection files (defaults to $EVENTDECK_DATA, then the OS data dir)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Print records as JSON instead of a table
    #[arg(long, global = true)]
    pub json: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every record of a collection
    #[command(alias = "ls")]
    List {
        #[arg(value_enum)]
        kind: CollectionKind,
    },

    /// Show one or more records in full
    #[command(alias = "show")]
    Get {
        #[arg(value_enum)]
        kind: CollectionKind,

        /// Record ids
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Add a record (fields as key=value pairs or one JSON object)
    #[command(alias = "new")]
    Add {
        #[arg(value_enum)]
        kind: CollectionKind,

        /// Fields, e.g. code=NEW10 discountPercent=10
        #[arg(required = true, num_args = 1..)]
        fields: Vec<String>,
    },

    /// Change fields of a record
    #[command(alias = "set")]
    Update {
        #[arg(value_enum)]
        kind: CollectionKind,

        /// Record id
        id: String,

        /// Fields to overwrite, e.g. usedCount=24
        #[arg(required = true, num_args = 1..)]
        fields: Vec<String>,
    },

    /// Delete one or more records
    #[command(alias = "rm")]
    Delete {
        #[arg(value_enum)]
        kind: CollectionKind,

        /// Record ids
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Replace a collection with its seed records
    Reset {
        #[arg(value_enum)]
        kind: CollectionKind,
    },

    /// Create the data directory and seed all collections
    Init,

    /// Print the storage location of collections (all when none given)
    Path {
        #[arg(value_enum)]
        kinds: Vec<CollectionKind>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (pretty-json, seed-demo-data)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
