//! [`TestFiles`] fixture for template/source scenarios.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// File name used for the template by [`TestFiles::with_inputs`].
pub const TEMPLATE_NAME: &str = "template.txt";
/// File name used for the source by [`TestFiles::with_inputs`].
pub const SOURCE_NAME: &str = "source.txt";

/// A temporary directory with helpers for writing inputs and checking paths.
///
/// # Example
///
/// ```rust,no_run
/// use tmpl_test_utils::TestFiles;
///
/// let files = TestFiles::with_inputs("Hello\n#greeting\n", "#greeting\nWorld\n");
/// assert!(files.template().exists());
/// assert!(files.source().exists());
/// ```
pub struct TestFiles {
    temp_dir: TempDir,
}

impl Default for TestFiles {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFiles {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Create a directory holding `template.txt` and `source.txt`.
    pub fn with_inputs(template: impl AsRef<[u8]>, source: impl AsRef<[u8]>) -> Self {
        let files = Self::new();
        files.write(TEMPLATE_NAME, template);
        files.write(SOURCE_NAME, source);
        files
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Absolute path of `name` inside the directory, whether or not it exists.
    pub fn path(&self, name: &str) -> PathBuf {
        self.root().join(name)
    }

    pub fn template(&self) -> PathBuf {
        self.path(TEMPLATE_NAME)
    }

    pub fn source(&self) -> PathBuf {
        self.path(SOURCE_NAME)
    }

    /// Write `content` to `name`, creating parent directories.
    pub fn write(&self, name: &str, content: impl AsRef<[u8]>) -> PathBuf {
        let path = self.path(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    /// Assert that `name` does **not** exist.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path exists.
    pub fn assert_file_not_exists(&self, name: &str) {
        let full_path = self.path(name);
        assert!(
            !full_path.exists(),
            "Expected file NOT to exist: {}",
            full_path.display()
        );
    }
}
