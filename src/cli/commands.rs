use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "stickies")]
#[command(version, about = "Sticky notes on a local board")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Notes file (defaults to $STICKIES_FILE, then ./notes.json)
    #[arg(long, short = 'f', global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all notes with a short preview
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a single note in full
    Show {
        /// Note index as shown by `list`
        index: usize,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add a new note
    Add {
        /// Note title
        #[arg(default_value = "")]
        title: String,

        /// Note body
        #[arg(long, short = 'b', conflicts_with = "stdin")]
        body: Option<String>,

        /// Read the body from stdin
        #[arg(long)]
        stdin: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Edit an existing note
    Edit {
        /// Note index as shown by `list`
        index: usize,

        /// New title
        #[arg(long, short = 't')]
        title: Option<String>,

        /// New body
        #[arg(long, short = 'b', conflicts_with = "stdin")]
        body: Option<String>,

        /// Read the new body from stdin
        #[arg(long)]
        stdin: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete a note
    Delete {
        /// Note index as shown by `list`
        index: usize,

        /// Skip confirmation prompt
        #[arg(long)]
        force: bool,
    },

    /// Serve the notes board over HTTP
    Serve {
        /// Address to bind (defaults to $STICKIES_HOST, then 127.0.0.1)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind (defaults to $STICKIES_PORT, then 8501)
        #[arg(long, short = 'p')]
        port: Option<u16>,

        /// Page heading
        #[arg(long)]
        title: Option<String>,

        /// Number of grid columns
        #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
        columns: Option<u16>,

        /// Body characters shown in a collapsed note
        #[arg(long)]
        preview_chars: Option<usize>,
    },
}
