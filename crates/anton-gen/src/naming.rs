//! Display and package names derived from a TTF filename.

use crate::{
    config::TTF_SUFFIX,
    error::{Error, Result},
};

/// Names derived from a single TTF filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageNames {
    /// Human readable font name, e.g. "Anton Regular".
    pub font_name: String,
    /// Lowercase, hyphen-free module and directory name, e.g. "antonregular".
    pub pkg_name: String,
}

impl PackageNames {
    pub fn from_ttf_name(ttf_name: &str) -> Result<Self> {
        Ok(Self { font_name: font_name(ttf_name)?, pkg_name: pkg_name(ttf_name)? })
    }
}

fn stem(ttf_name: &str) -> Result<&str> {
    let stem = ttf_name
        .strip_suffix(TTF_SUFFIX)
        .ok_or_else(|| Error::MissingSuffix(ttf_name.to_owned()))?;
    if stem.chars().all(|c| c == '-') {
        return Err(Error::EmptyName(ttf_name.to_owned()));
    }
    Ok(stem)
}

/// Map "Anton-Regular.ttf" to "Anton Regular".
pub fn font_name(ttf_name: &str) -> Result<String> {
    Ok(stem(ttf_name)?.replace('-', " "))
}

/// Map "Anton-Regular.ttf" to "antonregular".
pub fn pkg_name(ttf_name: &str) -> Result<String> {
    Ok(stem(ttf_name)?.replace('-', "").to_lowercase())
}
