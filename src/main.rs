use anyhow::Result;
use clap::Parser;

use qna_cli::cli::commands::{configure, languages, session};
use qna_cli::cli::{Args, Command};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("qna_cli=warn".parse()?),
        )
        .init();

    let args = Args::parse();

    match args.command {
        Some(Command::Languages) => {
            languages::run_languages().await?;
        }
        Some(Command::Configure { show }) => {
            configure::run_configure(show)?;
        }
        None => {
            let options = session::SessionOptions {
                language: args.language,
                project: args.project,
                deployment: args.deployment,
            };
            session::run_session(options).await?;
        }
    }

    Ok(())
}
