use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use spotify_export::export::{prepare_destination, stdin_confirm, write};
use spotify_export::{Config, ConsoleProgress, LibraryExporter, SpotifyClient};

#[derive(Parser)]
#[command(name = "spotify-export")]
#[command(about = "Export your saved Spotify tracks to a local file")]
#[command(version)]
struct Cli {
    /// Spotify OAuth bearer token (or set SPOTIFY_OAUTH_TOKEN env var)
    #[arg(long = "OAuth", env = "SPOTIFY_OAUTH_TOKEN", hide_env_values = true)]
    oauth: Option<String>,

    /// Base name of the export file
    #[arg(long = "fileName", default_value = "export")]
    file_name: String,

    /// Export file extension, json or xml (xml still contains JSON)
    #[arg(long = "fileExt", default_value = "json")]
    file_ext: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn setup_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    setup_tracing(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("\n{} {:#}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::new(cli.oauth, cli.file_name, &cli.file_ext)?;
    let destination = config.destination();

    prepare_destination(&destination, stdin_confirm)
        .context("Failed to prepare destination file")?;

    let client = SpotifyClient::new(&config.token);
    let exporter = LibraryExporter::new(client);

    let tracks = exporter
        .export_all(&mut ConsoleProgress)
        .await
        .context("Failed to export saved tracks")?;

    write(&destination, &tracks).context("Failed to write export file")?;

    println!(
        "\n{}",
        format!("Finish! Created file: {}", destination.display()).green()
    );

    Ok(())
}
