//! geosite2list: CLI for converting GeoSite catalogs into .list rule files.

use clap::Parser;
use geosite2list::{emit, fetch, Catalog};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "geosite2list")]
#[command(version = "0.1.0")]
#[command(about = "Convert a binary GeoSite catalog into per-group .list rule files", long_about = None)]
struct Cli {
    /// Path to a local catalog file (.dat or .dat.gz)
    #[arg(short, long, conflicts_with = "url")]
    file: Option<PathBuf>,

    /// URL to fetch the catalog from
    #[arg(short, long)]
    url: Option<String>,

    /// Output directory for the .list files
    #[arg(short, long, default_value = "out")]
    out: PathBuf,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let data = match (&cli.file, &cli.url) {
        (Some(path), None) => {
            if cli.verbose {
                println!("Reading catalog: {:?}", path);
            }
            fetch::from_file(path)?
        }
        (None, Some(url)) => {
            if cli.verbose {
                println!("Fetching catalog: {}", url);
            }
            fetch::from_url(url)?
        }
        _ => return Err("please provide either --file or --url".into()),
    };

    let catalog = Catalog::decode(&data)?;
    if cli.verbose {
        println!(
            "Decoded {} groups, {} rules ({} bytes)",
            catalog.groups.len(),
            catalog.rule_count(),
            data.len()
        );
    }

    emit::prepare_dir(&cli.out)?;
    let summary = emit::emit_catalog(&catalog, &cli.out);

    if summary.failed > 0 {
        log::warn!(
            "{} of {} groups could not be written",
            summary.failed,
            summary.written + summary.failed
        );
    }

    println!("Wrote {} list files to {:?}", summary.written, cli.out);
    Ok(())
}
