use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use research_paper_fetcher::{ClientConfig, PaperRecord, PubMedClient, output};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "research-paper-fetcher",
    about = "Fetch research papers from PubMed",
    long_about = "Search PubMed and list papers with at least one company-affiliated author"
)]
struct Cli {
    /// Search query for PubMed
    #[arg(value_name = "QUERY")]
    query: String,

    /// Save results to CSV file
    #[arg(short, long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, visible_alias = "verbose")]
    debug: bool,

    /// Email for NCBI requests (recommended)
    #[arg(long, env = "NCBI_EMAIL")]
    email: Option<String>,

    /// Tool name for NCBI requests
    #[arg(long, env = "NCBI_TOOL", default_value = "research-paper-fetcher")]
    tool: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tokio::select! {
        result = run(&cli) => match result {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("Unexpected error: {e:#}");
                ExitCode::FAILURE
            }
        },
        _ = tokio::signal::ctrl_c() => {
            eprintln!("\nProcess interrupted by user.");
            ExitCode::from(130)
        }
    }
}

fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}

fn create_pubmed_client(email: Option<&str>, tool: &str) -> Result<PubMedClient> {
    let mut config = ClientConfig::new().with_tool(tool);

    if let Some(email) = email {
        config = config.with_email(email);
    }

    Ok(PubMedClient::with_config(config)?)
}

async fn run(cli: &Cli) -> Result<()> {
    debug!("Fetching papers for query: {}", cli.query);

    let client = create_pubmed_client(cli.email.as_deref(), &cli.tool)?;

    let paper_ids = client.search_paper_ids(&cli.query).await;
    if paper_ids.is_empty() {
        println!("No papers found.");
        return Ok(());
    }

    let papers = client.fetch_paper_details(paper_ids.as_slice()).await;

    match &cli.file {
        Some(path) => save_results(
            path,
            &papers,
            &mut std::io::stdout().lock(),
            &mut std::io::stderr().lock(),
        )?,
        None => output::print_records(std::io::stdout().lock(), &papers)?,
    }

    Ok(())
}

/// Write the CSV file and tell the user where it went
///
/// A failed write is reported on `err` and is not fatal.
fn save_results<O: Write, E: Write>(
    path: &Path,
    papers: &[PaperRecord],
    out: &mut O,
    err: &mut E,
) -> Result<()> {
    match output::save_to_csv(path, papers) {
        Ok(()) => {
            info!(path = %path.display(), "Results saved");
            writeln!(out, "Results saved to {}", path.display())?;
        }
        Err(e) => {
            error!(error = %e, "Error saving to file");
            writeln!(err, "Error saving to file: {}", e)?;
        }
    }
    Ok(())
}
