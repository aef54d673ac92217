//! Test helpers for writing snapshot fixtures to a temporary directory.

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

pub(super) const INGREDIENTS_JSON: &str = r#"{
    "Bistro": ["chicken", "lettuce", "tomato"],
    "Grill": ["beef", "cheese", "bread"],
    "Empty Kitchen": []
}"#;

pub(super) const CATALOGUE_JSON: &str = r#"[
    "Chicken Salad",
    "Beef Burger",
    "Tomato Soup",
    "Cheese Sandwich"
]"#;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents)
        .unwrap_or_else(|err| panic!("write {path}: {err}"));
}

/// Temporary data directory holding the default snapshot filenames.
pub(super) struct DataDir {
    _tmp: TempDir,
    root: Utf8PathBuf,
}

impl DataDir {
    pub(super) fn new() -> Self {
        let tmp = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
        Self { _tmp: tmp, root }
    }

    pub(super) fn with_default_snapshots() -> Self {
        let dir = Self::new();
        write_utf8(&dir.ingredients(), INGREDIENTS_JSON.as_bytes());
        write_utf8(&dir.catalogue(), CATALOGUE_JSON.as_bytes());
        dir
    }

    pub(super) fn root(&self) -> &Utf8Path {
        &self.root
    }

    pub(super) fn ingredients(&self) -> Utf8PathBuf {
        self.root.join(crate::INGREDIENTS_FILE)
    }

    pub(super) fn catalogue(&self) -> Utf8PathBuf {
        self.root.join(crate::CATALOGUE_FILE)
    }
}
