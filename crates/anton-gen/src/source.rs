//! Source descriptors: where the TTF file comes from.

use std::{convert::Infallible, fmt, path::PathBuf, str::FromStr};

/// A TTF location given on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// A file on the local filesystem, used in place.
    Local(PathBuf),
    /// An `http://` or `https://` URL, downloaded before use.
    Remote(String),
}

impl Source {
    pub fn parse(src: &str) -> Self {
        if src.starts_with("http://") || src.starts_with("https://") {
            Self::Remote(src.to_owned())
        } else {
            Self::Local(PathBuf::from(src))
        }
    }
}

impl FromStr for Source {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local(path) => write!(f, "{}", path.display()),
            Self::Remote(url) => f.write_str(url),
        }
    }
}
