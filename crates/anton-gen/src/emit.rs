//! Package emission: the `data.rs` stub and the raw TTF copy.

use std::{
    fs::{create_dir, write},
    io::ErrorKind,
    path::{Path, PathBuf},
};

use log::debug;

use crate::{
    config::{FAMILY, STUB_NAME, SYMBOL},
    error::{Error, Result},
    naming::PackageNames,
};

/// Paths of an emitted package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Package {
    pub dir: PathBuf,
    pub stub: PathBuf,
    pub ttf: PathBuf,
}

/// Writes font packages under `out_dir`.
#[derive(Debug, Clone)]
pub struct Emitter {
    out_dir: PathBuf,
    family: String,
}

impl Emitter {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self { out_dir: out_dir.into(), family: FAMILY.to_owned() }
    }

    /// Family named in the generated module docs.
    pub fn with_family(mut self, family: impl Into<String>) -> Self {
        self.family = family.into();
        self
    }

    /// Render the stub for `ttf_name` without touching the filesystem.
    pub fn render(&self, ttf_name: &str) -> Result<String> {
        let names = module_names(ttf_name)?;
        Ok(self.render_names(&names, ttf_name))
    }

    fn render_names(&self, names: &PackageNames, ttf_name: &str) -> String {
        let PackageNames { font_name, pkg_name } = names;
        let family = &self.family;
        format!(
            "// generated by anton-gen; DO NOT EDIT\n\n\
             //! Module `{pkg_name}` provides the {font_name:?} TrueType font\n\
             //! from the {family} font family.\n\n\
             /// {SYMBOL} is the data for the {font_name:?} TrueType font.\n\
             pub static {SYMBOL}: &[u8] = include_bytes!({ttf_name:?});\n"
        )
    }

    /// Check that `stub` parses as a Rust source file.
    pub fn validate(&self, stub: &str, path: &Path) -> Result<()> {
        syn::parse_file(stub)
            .map(drop)
            .map_err(|source| Error::Format { path: path.to_path_buf(), source })
    }

    /// Write `<out_dir>/<pkg_name>/data.rs` and `<out_dir>/<pkg_name>/<ttf_name>`.
    pub fn emit(&self, ttf_name: &str, ttf: &[u8]) -> Result<Package> {
        let names = module_names(ttf_name)?;
        let dir = self.out_dir.join(&names.pkg_name);
        match create_dir(&dir) {
            Ok(()) => debug!("created package dir {}", dir.display()),
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {}
            Err(source) => return Err(Error::CreateDir { path: dir, source }),
        }

        let stub_path = dir.join(STUB_NAME);
        let stub = self.render_names(&names, ttf_name);
        self.validate(&stub, &stub_path)?;
        write(&stub_path, stub)
            .map_err(|source| Error::WriteStub { path: stub_path.clone(), source })?;

        let ttf_path = dir.join(ttf_name);
        write(&ttf_path, ttf)
            .map_err(|source| Error::WriteTtf { path: ttf_path.clone(), source })?;

        Ok(Package { dir, stub: stub_path, ttf: ttf_path })
    }
}

/// Derive names for `ttf_name`, requiring `pkg_name` to be usable in `pub mod <pkg_name>;`.
fn module_names(ttf_name: &str) -> Result<PackageNames> {
    let names = PackageNames::from_ttf_name(ttf_name)?;
    if let Err(source) = syn::parse_str::<syn::Ident>(&names.pkg_name) {
        return Err(Error::InvalidPackageName {
            pkg_name: names.pkg_name,
            ttf_name: ttf_name.to_owned(),
            source,
        });
    }
    Ok(names)
}

#[cfg(test)]
mod tests {
    use std::fs::read;

    use super::*;
    use crate::scratch::ScratchDir;

    const EXPECTED_STUB: &str = r#"// generated by anton-gen; DO NOT EDIT

//! Module `antonregular` provides the "Anton Regular" TrueType font
//! from the Anton font family.

/// TTF is the data for the "Anton Regular" TrueType font.
pub static TTF: &[u8] = include_bytes!("Anton-Regular.ttf");
"#;

    fn scratch() -> ScratchDir {
        ScratchDir::in_temp_dir("anton-gen-test-").unwrap()
    }

    #[test]
    fn test_render() {
        let stub = Emitter::new(".").render("Anton-Regular.ttf").unwrap();
        assert_eq!(stub, EXPECTED_STUB);
    }

    #[test]
    fn test_render_custom_family() {
        let stub = Emitter::new(".").with_family("Go").render("Go-Mono.ttf").unwrap();
        assert!(stub.contains("//! from the Go font family."));
        assert!(stub.contains("include_bytes!(\"Go-Mono.ttf\")"));
    }

    #[test]
    fn test_render_underscored_name() {
        let stub = Emitter::new(".").render("Anton_SC-Regular.ttf").unwrap();
        assert!(stub.contains("//! Module `anton_scregular` provides the \"Anton_SC Regular\""));
        assert!(stub.contains(r#"include_bytes!("Anton_SC-Regular.ttf")"#));
        assert!(Emitter::new(".").validate(&stub, Path::new(STUB_NAME)).is_ok());
    }

    #[test]
    fn test_validate_rejects_malformed_source() {
        let err = Emitter::new(".")
            .validate("pub static TTF: &[u8] = ;", Path::new(STUB_NAME))
            .unwrap_err();
        assert!(matches!(err, Error::Format { .. }));
    }

    #[test]
    fn test_emit() {
        let out = scratch();
        let pkg = Emitter::new(out.path()).emit("Anton-Regular.ttf", b"\0\x01\0\0fake").unwrap();

        assert_eq!(pkg.dir, out.path().join("antonregular"));
        assert_eq!(read(&pkg.stub).unwrap(), EXPECTED_STUB.as_bytes());
        assert_eq!(read(&pkg.ttf).unwrap(), b"\0\x01\0\0fake");
    }

    #[test]
    fn test_emit_is_idempotent() {
        let out = scratch();
        let emitter = Emitter::new(out.path());

        let first = emitter.emit("Anton-Regular.ttf", b"payload").unwrap();
        let stub = read(&first.stub).unwrap();
        let ttf = read(&first.ttf).unwrap();

        let second = emitter.emit("Anton-Regular.ttf", b"payload").unwrap();
        assert_eq!(first, second);
        assert_eq!(read(&second.stub).unwrap(), stub);
        assert_eq!(read(&second.ttf).unwrap(), ttf);
    }

    #[test]
    fn test_emit_overwrites_existing_files() {
        let out = scratch();
        let emitter = Emitter::new(out.path());

        emitter.emit("Anton-Regular.ttf", b"a much longer old payload").unwrap();
        let pkg = emitter.emit("Anton-Regular.ttf", b"new").unwrap();
        assert_eq!(read(&pkg.ttf).unwrap(), b"new");
    }

    #[test]
    fn test_emit_rejects_bad_name_before_writing() {
        let out = scratch();
        let err = Emitter::new(out.path()).emit("Anton-Regular.otf", b"x").unwrap_err();
        assert!(matches!(err, Error::MissingSuffix(_)));
        assert_eq!(std::fs::read_dir(out.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_emit_rejects_invalid_module_name_before_writing() {
        let out = scratch();
        let emitter = Emitter::new(out.path());
        for ttf_name in ["3D-Font.ttf", "Noto-Sans.Mono.ttf", "Some Font.ttf", "Type.ttf"] {
            match emitter.emit(ttf_name, b"x") {
                Err(Error::InvalidPackageName { ttf_name: name, .. }) => assert_eq!(name, ttf_name),
                other => panic!("expected invalid package name for {ttf_name}, got {other:?}"),
            }
        }
        assert_eq!(std::fs::read_dir(out.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_render_rejects_invalid_module_name() {
        let err = Emitter::new(".").render("3D-Font.ttf").unwrap_err();
        assert!(err.to_string().contains("\"3dfont\""));
    }

    #[test]
    fn test_emit_missing_out_dir() {
        let out = scratch();
        let emitter = Emitter::new(out.path().join("missing"));
        let err = emitter.emit("Anton-Regular.ttf", b"x").unwrap_err();
        assert!(matches!(err, Error::CreateDir { .. }));
    }
}
