//! Configuration constants for Anton package generation.

/// Upstream release asset for Anton Regular, pinned to a commit for reproducible output.
pub const DEFAULT_SRC: &str =
    "https://github.com/googlefonts/AntonFont/raw/80d0112/fonts/Anton-Regular.ttf";

/// Filename of the download target inside the scratch directory.
pub const DOWNLOAD_NAME: &str = "Anton-Regular.ttf";

/// Font family named in the generated module docs.
pub const FAMILY: &str = "Anton";

/// Suffix every input filename must carry.
pub const TTF_SUFFIX: &str = ".ttf";

/// Name of the generated source stub inside the package directory.
pub const STUB_NAME: &str = "data.rs";

/// Symbol the generated stub binds the payload to.
pub const SYMBOL: &str = "TTF";

/// Prefix for the scratch directory that holds downloads.
pub const SCRATCH_PREFIX: &str = "anton-gen-";

/// Prefix of every diagnostic line printed by the binary.
pub const LOG_PREFIX: &str = "anton-gen";
