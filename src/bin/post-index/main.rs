use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use spdlog::warn;

use post_index::config::open_config;
use post_index::index_builder::build_index_summary;
use post_index::logger::configure_logger;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Config path. If empty, post-index.toml in the current dir is used when present
    #[arg(short, long)]
    config_path: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = open_config(args.config_path.map(PathBuf::from))?;

    if let Err(err) = configure_logger(&config) {
        warn!("Error creating logger sinks. Using console instead. Desc={}", err);
    }

    let paths = &config.paths;
    let summary = build_index_summary(&paths.posts_dir, &paths.output_file)
        .with_context(|| format!("Failed to index {}", paths.posts_dir.display()))?;

    println!("{}", summary);
    Ok(())
}
