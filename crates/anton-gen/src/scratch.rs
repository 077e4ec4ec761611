//! Scoped temporary directories.

use std::{
    fs::{create_dir, remove_dir_all},
    io::ErrorKind,
    path::{Path, PathBuf},
    process,
    sync::atomic::{AtomicUsize, Ordering},
    time::{SystemTime, UNIX_EPOCH},
};

use log::debug;

use crate::error::{Error, Result};

static COUNTER: AtomicUsize = AtomicUsize::new(0);

/// A freshly created directory that is removed, with its contents, on drop.
#[derive(Debug)]
pub struct ScratchDir {
    path: PathBuf,
}

impl ScratchDir {
    /// Create a uniquely named directory `<root>/<prefix><pid>-<nanos>-<n>`.
    pub fn new(root: &Path, prefix: &str) -> Result<Self> {
        let ts = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| d.as_nanos());
        loop {
            let n = COUNTER.fetch_add(1, Ordering::Relaxed);
            let path = root.join(format!("{prefix}{}-{ts}-{n}", process::id()));
            match create_dir(&path) {
                Ok(()) => {
                    debug!("created scratch dir {}", path.display());
                    return Ok(Self { path });
                }
                Err(e) if e.kind() == ErrorKind::AlreadyExists => continue,
                Err(source) => {
                    return Err(Error::Scratch { root: root.to_path_buf(), source });
                }
            }
        }
    }

    /// Create a scratch directory under the system temporary directory.
    pub fn in_temp_dir(prefix: &str) -> Result<Self> {
        Self::new(&std::env::temp_dir(), prefix)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        match remove_dir_all(&self.path) {
            Ok(()) => debug!("removed scratch dir {}", self.path.display()),
            Err(e) => debug!("could not remove scratch dir {}: {e}", self.path.display()),
        }
    }
}
