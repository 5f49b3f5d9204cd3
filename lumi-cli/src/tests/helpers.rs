//! Test helpers for composing CLI fixtures on disk.

use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use tempfile::TempDir;

/// Writes `contents` to `path`, panicking on failure.
pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    fs::write(path, contents).expect("write fixture file");
}

/// Creates a temporary directory addressable through UTF-8 paths.
pub(super) fn utf8_workspace() -> (TempDir, Utf8PathBuf) {
    let tmp = TempDir::new().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
    (tmp, root)
}

/// JSON array holding a cosy cafe and an unreviewed shopping mall.
pub(super) fn places_payload() -> String {
    r#"[
  {
    "id": "cafe-1",
    "name": "Dansang",
    "category": "cafe",
    "tags": ["cozy cafe"],
    "rating": 4.0,
    "reviews": [
      { "author": "visitor", "text": "분위기 좋은 cozy 카페", "rating": 5.0 }
    ]
  },
  {
    "id": "mall-1",
    "name": "Grand Mall",
    "category": "shopping_mall",
    "rating": 3.0
  }
]"#
    .to_owned()
}

/// Taste snapshot for a traveller who favours cosy, modern places.
pub(super) fn snapshot_payload() -> String {
    r#"{
  "user": "Yuna",
  "style_keywords": ["cozy", "modern"],
  "reviews": [
    { "place": "Dansang", "rating": 5.0, "text": "아늑하고 cozy 분위기", "date": "2026-01-10" }
  ]
}"#
    .to_owned()
}
