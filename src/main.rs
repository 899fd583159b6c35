use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use sample_grouper::{logging, run, Cli};
use std::time::Instant;

fn main() -> Result<()> {
    let start_time = Instant::now();
    let cli = Cli::parse();
    let report_path = cli.report.clone();
    let config = match cli.into_config(dirs::home_dir()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            eprintln!("{}", Cli::command().render_usage());
            std::process::exit(1);
        }
    };
    logging::init(config.debug());
    tracing::debug!(?config, "Configuration loaded");

    let report = run(&config).context("Something went wrong looking for matching files")?;

    println!("Found {} matching files to copy", report.matched);
    if report.hit_max() {
        println!("We reached the max amount of samples to copy: {}", report.max_files);
    }
    for batch in &report.batches {
        match &batch.error {
            Some(e) => println!("  group_{}: skipped ({})", batch.index, e),
            None if report.dry_run => println!(
                "  {} - {} files (dry run)",
                batch.directory.display(),
                batch.planned()
            ),
            None => println!(
                "  {} - {} of {} files copied",
                batch.directory.display(),
                batch.copied(),
                batch.files
            ),
        }
    }

    if let Some(path) = report_path {
        report.write_json(&path)?;
        println!("Report written to {}", path.display());
    }

    if report.failed() > 0 {
        println!("{} files could not be copied, see the log above", report.failed());
    }
    println!(
        "Your files are in {} [{:.2}s]",
        report.destination.display(),
        start_time.elapsed().as_secs_f64()
    );

    Ok(())
}
