//! Resolve a [`Source`] to a readable local TTF file.

use std::{
    env::temp_dir,
    fs::{File, read},
    path::{Path, PathBuf},
};

use log::{debug, info};
use reqwest::blocking::Client;

use crate::{
    config::{DOWNLOAD_NAME, SCRATCH_PREFIX},
    error::{Error, Result},
    scratch::ScratchDir,
    source::Source,
};

/// Downloads remote sources into a scratch directory; passes local ones through.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
    scratch_root: PathBuf,
    download_name: String,
}

impl Default for Fetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Fetcher {
    pub fn new() -> Self {
        Self::with_client(Client::new())
    }

    pub fn with_client(client: Client) -> Self {
        Self { client, scratch_root: temp_dir(), download_name: DOWNLOAD_NAME.to_owned() }
    }

    /// Directory under which the per-run scratch directory is created.
    pub fn with_scratch_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.scratch_root = root.into();
        self
    }

    /// Filename given to downloaded payloads.
    pub fn with_download_name(mut self, name: impl Into<String>) -> Self {
        self.download_name = name.into();
        self
    }

    pub fn fetch(&self, src: &Source) -> Result<Fetched> {
        match src {
            Source::Local(path) => {
                debug!("using local ttf file {}", path.display());
                Ok(Fetched { path: path.clone(), scratch: None })
            }
            Source::Remote(url) => self.download(url),
        }
    }

    fn download(&self, url: &str) -> Result<Fetched> {
        let scratch = ScratchDir::new(&self.scratch_root, SCRATCH_PREFIX)?;
        let path = scratch.path().join(&self.download_name);
        info!("fetching {url:?}...");

        let mut response = self
            .client
            .get(url)
            .send()
            .map_err(|source| Error::Fetch { url: url.to_owned(), source })?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status { url: url.to_owned(), status });
        }

        let mut file = File::create(&path)
            .map_err(|source| Error::CreateDownload { path: path.clone(), source })?;
        let size = response
            .copy_to(&mut file)
            .map_err(|source| Error::CopyDownload { path: path.clone(), source })?;
        file.sync_all().map_err(|source| Error::SaveDownload { path: path.clone(), source })?;
        drop(file);

        debug!("downloaded {size} bytes to {}", path.display());
        Ok(Fetched { path, scratch: Some(scratch) })
    }
}

/// A local TTF file, plus the scratch directory backing it when it was downloaded.
///
/// The scratch directory is removed when this value is dropped.
#[derive(Debug)]
pub struct Fetched {
    path: PathBuf,
    scratch: Option<ScratchDir>,
}

impl Fetched {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Scratch directory holding the download, `None` for local sources.
    pub fn scratch_dir(&self) -> Option<&Path> {
        self.scratch.as_ref().map(ScratchDir::path)
    }

    /// Base name of the file, used to derive package names.
    pub fn file_name(&self) -> Result<&str> {
        self.path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| Error::FileName { path: self.path.clone() })
    }

    /// Buffer the whole payload in memory.
    pub fn read(&self) -> Result<Vec<u8>> {
        read(&self.path).map_err(|source| Error::Read { path: self.path.clone(), source })
    }
}
