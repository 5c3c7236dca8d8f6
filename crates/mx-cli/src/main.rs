//! metaxml — canonicalize schema-typed metadata XML files so diffs and
//! merges stay stable and minimal.

use anyhow::bail;
use clap::Parser;
use mx_core::SortOrder;
use mx_session::{compress_paths, CompressorSession, SessionConfig};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "metaxml",
    version,
    about = "Canonicalize schema-typed metadata XML files"
)]
struct Cli {
    /// Files to compress in place, or a single folder to process
    /// recursively.
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// Element sort order: alphabetAsc, alphabetDesc, simpleFirst or
    /// complexFirst.
    #[arg(long, default_value = "alphabetAsc")]
    sort_order: SortOrder,

    /// Print the canonical text of a single file to stdout instead of
    /// writing it back.
    #[arg(long)]
    print: bool,

    /// Emit the batch summary as JSON once processing finishes.
    #[arg(long)]
    json: bool,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn init_logging(level: &str) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()));
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    if cli.print {
        if cli.paths.len() != 1 {
            bail!("--print works on exactly one file");
        }
        let config =
            SessionConfig::from_path(&cli.paths[0]).with_sort_order(cli.sort_order);
        let mut session = CompressorSession::new(config);
        let content = session.compressed_content_async().await?;
        println!("{content}");
        return Ok(());
    }

    info!(paths = cli.paths.len(), sort_order = %cli.sort_order, "starting compression");
    let summary = compress_paths(&cli.paths, cli.sort_order, |status| {
        let state = if status.success { "compressed" } else { "FAILED" };
        eprintln!(
            "[{}/{}] {state} {}",
            status.files_processed,
            status.total_files,
            status.file.display()
        );
    })
    .await?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }
    if summary.failed > 0 {
        std::process::exit(1);
    }
    Ok(())
}
