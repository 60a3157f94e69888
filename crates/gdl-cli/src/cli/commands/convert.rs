//! `gdl convert <url>` – convert a single share link.

use anyhow::Result;
use gdl_core::link;

pub fn run_convert(url: &str) -> Result<()> {
    let direct = link::convert_single(url)?;
    tracing::info!("converted single link");
    println!("{direct}");
    Ok(())
}
