use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Script file to run
    pub script: PathBuf,
    /// JSON object with the initial variable bindings
    #[arg(long)]
    pub bindings: Option<PathBuf>,
    /// Write every executed instruction and its result to this JSON file
    #[arg(long)]
    pub transcript: Option<PathBuf>,
    /// Log every dispatched instruction
    #[arg(short, long)]
    pub verbose: bool,
}
