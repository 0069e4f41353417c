mod config;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use config::Config;
use mercury_workspace::{run_watch, Builder};
use tracing_subscriber::EnvFilter;

/// Mercury Icons - compile SVG icon sets into React components
#[derive(Parser, Debug)]
#[command(name = "mercury-icons")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Rebuild icons whenever their source files change
    #[arg(short, long)]
    watch: bool,
}

async fn run(cli: Cli) -> Result<()> {
    let cwd = std::env::current_dir().context("Cannot get current directory")?;
    let config = Config::load(&cwd)?;
    let options = config.build_options(&cwd);

    println!("{}", "🔨 Building icons...".bright_blue().bold());
    println!("   Source: {}", options.src_dir.display());
    println!("   Output: {}", options.out_dir.display());
    println!();

    if cli.watch {
        println!("👀 {} Press Ctrl+C to stop.", "Watch mode.".green().bold());
        run_watch(options).await?;
        return Ok(());
    }

    let out_dir = options.out_dir.clone();
    let report = Builder::new(options).run_full_build().await?;

    println!();
    println!(
        "✨ {} {} icons, {} components → {}",
        "Done!".green().bold(),
        report.compiled(),
        report.components(),
        out_dir.display()
    );
    if report.skipped() > 0 {
        println!(
            "{}",
            format!(
                "⚠️  {} of {} icon directories had no usable variants",
                report.skipped(),
                report.discovered
            )
            .yellow()
        );
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let result = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")
        .and_then(|runtime| runtime.block_on(run(cli)));

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
