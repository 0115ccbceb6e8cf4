//! Current working directory tracking.
//!
//! Each session carries its own working directory as plain state. Nothing
//! here touches the process-wide directory.

use std::env;
use std::fs;
use std::io;
use std::path::Path;

#[derive(Clone, Default, Debug)]
pub struct CurrentDir {
    pub path: String,
}

impl CurrentDir {
    /// Capture the current working directory from the process.
    pub fn capture() -> Option<Self> {
        let path = env::current_dir().ok()?.to_string_lossy().to_string();
        Some(Self { path })
    }

    /// Update the current working directory.
    pub fn update(&mut self, new_path: String) {
        self.path = new_path;
    }

    /// Resolve a `cd` argument against this directory.
    ///
    /// Relative targets are joined onto `self.path`; absolute ones replace it.
    /// The result is canonical and must name an existing directory the
    /// process may search, as `cd` itself would require.
    pub fn resolve(&self, target: &str) -> io::Result<String> {
        resolve_dir(Path::new(&self.path), target)
    }
}

fn resolve_dir(base: &Path, target: &str) -> io::Result<String> {
    let resolved = base.join(target).canonicalize()?;
    if !resolved.is_dir() {
        return Err(io::Error::new(io::ErrorKind::NotADirectory, "Not a directory"));
    }
    // stat through the directory needs search permission on it
    fs::metadata(resolved.join("."))?;
    Ok(resolved.to_string_lossy().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_relative_and_absolute() {
        let root = tempfile::tempdir().unwrap();
        std::fs::create_dir(root.path().join("sub")).unwrap();
        let base = root.path().canonicalize().unwrap();

        let cwd = CurrentDir { path: base.to_string_lossy().to_string() };
        let sub = cwd.resolve("sub").unwrap();
        assert_eq!(sub, base.join("sub").to_string_lossy());

        let back = CurrentDir { path: sub }.resolve("..").unwrap();
        assert_eq!(back, base.to_string_lossy());

        let absolute = cwd.resolve(&base.join("sub").to_string_lossy()).unwrap();
        assert!(absolute.ends_with("sub"));
    }

    #[test]
    fn test_resolve_rejects_missing_and_files() {
        let root = tempfile::tempdir().unwrap();
        std::fs::write(root.path().join("file.txt"), "x").unwrap();
        let cwd = CurrentDir { path: root.path().to_string_lossy().to_string() };

        let missing = cwd.resolve("nope").unwrap_err();
        assert_eq!(missing.kind(), io::ErrorKind::NotFound);

        let file = cwd.resolve("file.txt").unwrap_err();
        assert_eq!(file.kind(), io::ErrorKind::NotADirectory);
    }

    #[cfg(unix)]
    #[test]
    fn test_resolve_rejects_unsearchable_directory() {
        use std::os::unix::fs::PermissionsExt;

        let root = tempfile::tempdir().unwrap();
        let locked = root.path().join("locked");
        std::fs::create_dir(&locked).unwrap();
        std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o000)).unwrap();
        let searchable = std::fs::metadata(locked.join(".")).is_ok();

        let cwd = CurrentDir { path: root.path().to_string_lossy().to_string() };
        let outcome = cwd.resolve("locked");
        std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o755)).unwrap();

        // root ignores permission bits
        if searchable {
            return;
        }
        assert_eq!(outcome.unwrap_err().kind(), io::ErrorKind::PermissionDenied);
    }

    #[test]
    fn test_capture_matches_process_dir() {
        let captured = CurrentDir::capture().unwrap();
        let expected = env::current_dir().unwrap();
        assert_eq!(captured.path, expected.to_string_lossy());
    }
}
