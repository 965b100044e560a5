use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the pipeline for a single uploaded object
    Process {
        /// Bucket the video was uploaded to
        #[arg(short, long)]
        bucket: String,

        /// Object path within the bucket (uploads/<userId>/<fileName>)
        #[arg(short, long)]
        object: String,
    },

    /// Run the pipeline from a storage notification JSON payload
    Event {
        /// Path to the notification payload; reads stdin when omitted
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Write the default configuration file
    InitConfig {
        /// Destination path for the generated TOML
        #[arg(short, long, default_value = "config.toml")]
        path: PathBuf,
    },
}
