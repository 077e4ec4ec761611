//! CLI definitions.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::{config::DEFAULT_SRC, emit::Emitter, fetch::Fetcher, generate, source::Source};

#[derive(Parser, Debug)]
#[command(name = "anton-gen", version)]
#[command(about = "Regenerate the embedded Anton font package from its upstream TTF file")]
pub struct Cli {
    /// Remote URL or local path of the TTF file for Anton fonts
    #[arg(long, default_value = DEFAULT_SRC)]
    pub src: Source,
    /// Directory in which the package directory is created
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let fetcher = Fetcher::new();
        let emitter = Emitter::new(&self.out_dir);
        generate(&self.src, &fetcher, &emitter)
            .with_context(|| format!("could not generate Anton package from {}", self.src))?;
        Ok(())
    }
}
