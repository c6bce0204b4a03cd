use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "qna")]
#[command(about = "Interactive question-answering CLI with on-the-fly translation")]
#[command(version)]
pub struct Args {
    /// Session language code (skips the interactive language selection)
    #[arg(short = 'l', long)]
    pub language: Option<String>,

    /// Question-answering project name
    #[arg(short = 'p', long)]
    pub project: Option<String>,

    /// Question-answering deployment name
    #[arg(short = 'd', long)]
    pub deployment: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Configure qna settings
    Configure {
        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
    /// List languages available for answer translation
    Languages,
}
