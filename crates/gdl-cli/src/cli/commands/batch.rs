//! `gdl batch [path]` – convert one link per line and report.

use anyhow::{Context, Result};
use gdl_core::batch::{self, BatchReport};
use gdl_core::config::{GdlConfig, OutputFormat};
use gdl_core::export;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Options for one batch run as given on the command line.
#[derive(Debug, Clone, Default)]
pub struct BatchArgs {
    pub path: Option<PathBuf>,
    /// `None` means the config's `default_format`.
    pub format: Option<OutputFormat>,
    pub save: bool,
    pub output: Option<PathBuf>,
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) if p != Path::new("-") => {
            std::fs::read_to_string(p).with_context(|| format!("read {}", p.display()))
        }
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("read links from stdin")?;
            Ok(buf)
        }
    }
}

/// The `--format` flag wins over the config.
fn effective_format(cfg: &GdlConfig, args: &BatchArgs) -> OutputFormat {
    args.format.unwrap_or(cfg.default_format)
}

/// Where the text report goes, if anywhere.
///
/// `--output` is taken as is. `--save` uses the dated file name inside the
/// config's `export_dir`, or the current directory when that is unset.
fn report_target(cfg: &GdlConfig, args: &BatchArgs) -> Result<Option<PathBuf>> {
    if let Some(output) = &args.output {
        return Ok(Some(output.clone()));
    }
    if !args.save {
        return Ok(None);
    }
    let dir = match &cfg.export_dir {
        Some(d) => d.clone(),
        None => std::env::current_dir()?,
    };
    let name = export::export_file_name(&cfg.export_prefix, export::today());
    Ok(Some(dir.join(name)))
}

pub(crate) fn render(report: &BatchReport, format: OutputFormat, show_summary: bool) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Text => {
            let mut out = report.render_text();
            if show_summary {
                out.push_str("\n\nConversion Results: ");
                out.push_str(&report.summary());
            }
            Ok(out)
        }
    }
}

pub fn run_batch(cfg: &GdlConfig, args: &BatchArgs) -> Result<()> {
    let raw = read_input(args.path.as_deref())?;
    let report = batch::process_batch(&raw)?;

    println!("{}", render(&report, effective_format(cfg, args), cfg.show_summary)?);

    if let Some(target) = report_target(cfg, args)? {
        export::write_report_to(&target, &report.render_text())?;
        eprintln!("Saved report to {}", target.display());
    }

    Ok(())
}
