//! CLI for GDL, the Google Drive direct-link converter.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use gdl_core::config::{self, OutputFormat};
use std::path::PathBuf;

use commands::{run_batch, run_completions, run_convert, run_man, BatchArgs};

/// Top-level CLI for GDL.
#[derive(Debug, Parser)]
#[command(name = "gdl")]
#[command(about = "GDL: turn Google Drive share links into direct-download links", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// Report format accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(f: FormatArg) -> Self {
        match f {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Convert one share link and print the direct-download link.
    Convert {
        /// Google Drive share link.
        url: String,
    },

    /// Convert many links, one per line, from a file or stdin.
    Batch {
        /// File with one link per line; stdin when omitted or "-".
        path: Option<PathBuf>,

        /// Report format (defaults to the config's default_format).
        #[arg(long, value_enum)]
        format: Option<FormatArg>,

        /// Also save the text report as <prefix>-<date>.txt in the export dir.
        #[arg(long)]
        save: bool,

        /// Save the text report to this file instead.
        #[arg(long, short, value_name = "FILE", conflicts_with = "save")]
        output: Option<PathBuf>,
    },

    /// Print a shell completion script.
    Completions {
        /// Target shell.
        shell: Shell,
    },

    /// Print the man page (roff).
    Man,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Convert { url } => run_convert(&url)?,
            CliCommand::Batch {
                path,
                format,
                save,
                output,
            } => {
                let cfg = config::load_or_default();
                tracing::debug!("loaded config: {:?}", cfg);
                let args = BatchArgs {
                    path,
                    format: format.map(Into::into),
                    save,
                    output,
                };
                run_batch(&cfg, &args)?;
            }
            CliCommand::Completions { shell } => run_completions(shell)?,
            CliCommand::Man => run_man()?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
