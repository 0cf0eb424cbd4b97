use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use spdlog::warn;

use post_index::config::open_config;
use post_index::index_builder::build_index_summary;
use post_index::logger::configure_logger;
use post_index::post_file::{create_post, today};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Title of the post
    #[arg(short, long)]
    title: String,

    /// Date prefix of the file name. Defaults to today, as YYYY-MM-DD
    #[arg(short, long)]
    date: Option<String>,

    /// Config path
    #[arg(short, long)]
    config_path: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = open_config(args.config_path.map(PathBuf::from))?;

    if let Err(err) = configure_logger(&config) {
        warn!("Error creating logger sinks. Using console instead. Desc={}", err);
    }

    let date = args.date.unwrap_or_else(today);
    let paths = &config.paths;
    let post_path = create_post(&paths.posts_dir, &date, &args.title)
        .context("Could not create the post")?;
    println!("Creating file {}", post_path.display());

    let summary = build_index_summary(&paths.posts_dir, &paths.output_file)
        .with_context(|| format!("Failed to index {}", paths.posts_dir.display()))?;
    println!("{}", summary);
    Ok(())
}
