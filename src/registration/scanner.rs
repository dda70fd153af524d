use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

use crate::constants::DEFINITION_FILE_NAME;
use crate::error::RegistrationError;

/// Finds service definition files below a root directory.
#[derive(Debug, Clone)]
pub struct DefinitionScanner {
    file_name: String,
}

impl Default for DefinitionScanner {
    fn default() -> Self {
        Self::new(DEFINITION_FILE_NAME)
    }
}

impl DefinitionScanner {
    pub fn new(file_name: impl Into<String>) -> Self {
        Self { file_name: file_name.into() }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Recursively collects every file named exactly like `file_name`.
    ///
    /// Paths come back in directory traversal order, which depends on the
    /// filesystem and is not stable across machines. A root that is missing,
    /// not a directory, or cannot be listed is `NotFound`. Finding nothing is
    /// not an error.
    pub fn scan(&self, root: &Path) -> Result<Vec<PathBuf>, RegistrationError> {
        if !root.is_dir() {
            return Err(RegistrationError::NotFound(root.to_path_buf()));
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(root) {
            let entry = match entry {
                Ok(entry) => entry,
                // The root exists but cannot be listed.
                Err(err) if err.depth() == 0 => {
                    debug!(root = %root.display(), error = %err, "Service root is not accessible");
                    return Err(RegistrationError::NotFound(root.to_path_buf()));
                }
                Err(err) => return Err(err.into()),
            };
            if entry.file_type().is_file() && entry.file_name() == self.file_name.as_str() {
                debug!(path = %entry.path().display(), "Found service definition file");
                files.push(entry.into_path());
            }
        }

        debug!(root = %root.display(), count = files.len(), "Finished scanning for service definitions");
        Ok(files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_scan_finds_nested_files() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();
        fs::write(temp_dir.path().join("services.yml"), "services: {}").unwrap();
        fs::write(nested.join("services.yml"), "services: {}").unwrap();
        fs::write(nested.join("services.yaml"), "services: {}").unwrap();
        fs::write(nested.join("other.yml"), "services: {}").unwrap();

        let mut found = DefinitionScanner::default().scan(temp_dir.path()).unwrap();
        found.sort();

        let mut expected = vec![temp_dir.path().join("services.yml"), nested.join("services.yml")];
        expected.sort();
        assert_eq!(found, expected);
    }

    #[test]
    fn test_scan_empty_tree_is_ok() {
        let temp_dir = TempDir::new().unwrap();
        let found = DefinitionScanner::default().scan(temp_dir.path()).unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn test_scan_missing_root_is_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nope");

        let err = DefinitionScanner::default().scan(&missing).unwrap_err();
        assert!(matches!(err, RegistrationError::NotFound(path) if path == missing));
    }

    #[test]
    fn test_scan_root_that_is_a_file_is_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("services.yml");
        fs::write(&file, "services: {}").unwrap();

        let err = DefinitionScanner::default().scan(&file).unwrap_err();
        assert!(matches!(err, RegistrationError::NotFound(_)));
    }

    #[cfg(unix)]
    #[test]
    fn test_scan_unreadable_root_is_not_found() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let locked = temp_dir.path().join("locked");
        fs::create_dir(&locked).unwrap();
        fs::write(locked.join("services.yml"), "services: {}").unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // Permission bits are not enforced for root.
        if fs::read_dir(&locked).is_ok() {
            fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
            return;
        }

        let result = DefinitionScanner::default().scan(&locked);
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        assert!(matches!(result, Err(RegistrationError::NotFound(path)) if path == locked));
    }

    #[test]
    fn test_scan_uses_configured_file_name() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("services.yml"), "").unwrap();
        fs::write(temp_dir.path().join("bindings.yml"), "").unwrap();

        let scanner = DefinitionScanner::new("bindings.yml");
        assert_eq!(scanner.file_name(), "bindings.yml");
        let found = scanner.scan(temp_dir.path()).unwrap();
        assert_eq!(found, vec![temp_dir.path().join("bindings.yml")]);
    }
}
