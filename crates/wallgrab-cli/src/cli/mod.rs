//! CLI for the wallgrab image downloader.

mod commands;

use anyhow::Result;
use clap::builder::RangedU64ValueParser;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wallgrab_core::config;

use commands::{run_extract, run_grab, run_save};

/// Top-level CLI for wallgrab.
#[derive(Debug, Parser)]
#[command(name = "wallgrab")]
#[command(about = "wallgrab: download every image on a zhihu or bilibili page", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Scrape a page and download its images.
    Grab {
        /// Page URL on zhihu.com or bilibili.com. The https:// prefix is optional.
        page_url: String,
        /// Directory to save images into (created if missing). Defaults to the current directory.
        #[arg(long, short, value_name = "DIR")]
        out: Option<String>,
        /// Number of download workers. Ignored for 10 images or fewer.
        #[arg(long, short, value_name = "N", value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
        workers: Option<usize>,
    },

    /// Download the given image URLs.
    Save {
        /// Image URLs.
        urls: Vec<String>,
        /// Read additional URLs from a file, one per line (`#` starts a comment).
        #[arg(long, value_name = "FILE")]
        from_file: Option<PathBuf>,
        /// Directory to save images into (created if missing). Defaults to the current directory.
        #[arg(long, short, value_name = "DIR")]
        out: Option<String>,
        /// Number of download workers. Ignored for 10 images or fewer.
        #[arg(long, short, value_name = "N", value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
        workers: Option<usize>,
    },

    /// Print the image URLs found on a page without downloading them.
    Extract {
        /// Page URL on zhihu.com or bilibili.com.
        page_url: String,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Grab {
                page_url,
                out,
                workers,
            } => run_grab(&cfg, &page_url, out.as_deref(), workers)?,
            CliCommand::Save {
                urls,
                from_file,
                out,
                workers,
            } => run_save(&cfg, urls, from_file.as_deref(), out.as_deref(), workers)?,
            CliCommand::Extract { page_url } => run_extract(&cfg, &page_url)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
