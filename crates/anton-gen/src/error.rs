//! Error types for package generation.

use std::{io, path::PathBuf, result};

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur while fetching a font or emitting its package.
#[derive(Error, Debug)]
pub enum Error {
    #[error("could not GET {url:?}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP {status} for {url:?}")]
    Status { url: String, status: StatusCode },

    #[error("could not create scratch dir in {}", root.display())]
    Scratch {
        root: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not create ttf file {}", path.display())]
    CreateDownload {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not save ttf file {}", path.display())]
    SaveDownload {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not copy ttf file {}", path.display())]
    CopyDownload {
        path: PathBuf,
        #[source]
        source: reqwest::Error,
    },

    #[error("could not read ttf file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("ttf path {} has no usable file name", path.display())]
    FileName { path: PathBuf },

    #[error("ttf file name {0:?} does not end with \".ttf\"")]
    MissingSuffix(String),

    #[error("ttf file name {0:?} has an empty font name")]
    EmptyName(String),

    #[error("package name {pkg_name:?} derived from {ttf_name:?} is not a valid module name")]
    InvalidPackageName {
        pkg_name: String,
        ttf_name: String,
        #[source]
        source: syn::Error,
    },

    #[error("could not create package dir {}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not format source {}", path.display())]
    Format {
        path: PathBuf,
        #[source]
        source: syn::Error,
    },

    #[error("could not write package source file {}", path.display())]
    WriteStub {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not write package TTF file {}", path.display())]
    WriteTtf {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = result::Result<T, Error>;
