use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use directories::ProjectDirs;

pub fn parse_args() -> Args {
    Args::parse()
}

#[derive(Debug, Parser)]
#[command(version, about = "Exports the Gyft Ninja landing page as a static site", long_about = None)]
pub struct Args {
    #[arg(
        short,
        long,
        help = "Directory to write the site into. It is created if it does not exist. \
        If not specified, the site is written to a 'site' folder in your 'data_local_dir' as \
        specified by the 'directories' crate: https://crates.io/crates/directories."
    )]
    pub output: Option<PathBuf>,

    #[arg(
        short,
        long,
        default_value = "false",
        help = "Whether to overwrite files left over from a previous export."
    )]
    pub force: bool,
}

impl Args {
    /// Returns the directory the site should be exported to.
    pub fn output_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.output {
            return Ok(dir.clone());
        }

        let dirs = ProjectDirs::from("", "", env!("CARGO_PKG_NAME"))
            .context("Cannot determine a default output directory, please specify '--output'")?;
        Ok(dirs.data_local_dir().join("site"))
    }
}
