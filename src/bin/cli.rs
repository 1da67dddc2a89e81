// src/bin/cli.rs
use color_eyre::eyre::eyre;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    meet_scrape::cli::run().map_err(|e| eyre!(e.to_string()))
}
