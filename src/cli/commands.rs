use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// `agui` - brand-aware UI composition service.
#[derive(Parser, Debug)]
#[command(name = "agui")]
#[command(version)]
#[command(about = "Compose brand-aligned UI components, library first.", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP gateway
    Serve {
        /// Host to bind (default: [gateway] host)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (default: [gateway] port)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Run one compose job in-process and print the finished job record
    Compose {
        /// What the UI should do, in plain words
        #[arg(short, long)]
        intent: String,

        /// Brand id to compose for
        #[arg(short, long)]
        brand: String,

        /// JSON file holding an array of library items to ingest first
        #[arg(long)]
        library: Option<PathBuf>,

        /// Library item ids to pin ahead of ranked reuse candidates
        #[arg(long = "seed")]
        seed_ids: Vec<String>,
    },
}
