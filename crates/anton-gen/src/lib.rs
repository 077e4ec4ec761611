//! Fetch the Anton TrueType font and regenerate its embedding package.
//!
//! The pipeline has two stages. A [`Fetcher`] resolves a [`Source`] to a
//! local file, downloading it into a [`ScratchDir`] when the source is a
//! URL. An [`Emitter`] then writes `<pkg_name>/data.rs` and a copy of the
//! TTF file, where `pkg_name` is derived from the TTF filename.

pub mod cli;
pub mod config;
pub mod emit;
pub mod error;
pub mod fetch;
pub mod naming;
pub mod scratch;
pub mod source;

use log::info;

pub use emit::{Emitter, Package};
pub use error::{Error, Result};
pub use fetch::{Fetched, Fetcher};
pub use naming::{PackageNames, font_name, pkg_name};
pub use scratch::ScratchDir;
pub use source::Source;

/// Fetch `src` and emit its package.
///
/// Any scratch directory used for the download is removed before this returns.
pub fn generate(src: &Source, fetcher: &Fetcher, emitter: &Emitter) -> Result<Package> {
    let fetched = fetcher.fetch(src)?;
    let ttf_name = fetched.file_name()?;
    info!("generating fonts package for {ttf_name:?}...");

    let ttf = fetched.read()?;
    let package = emitter.emit(ttf_name, &ttf)?;
    info!("wrote {} ({} bytes)", package.dir.display(), ttf.len());
    Ok(package)
}
