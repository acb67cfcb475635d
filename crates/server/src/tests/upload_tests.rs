// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::uploads::{UploadStore, stored_file_name};

#[test]
fn test_stored_name_keeps_lowercased_extension() {
    assert_eq!(
        stored_file_name(Some("Photo.JPG"), 1_700_000_000_000, 42),
        "1700000000000-42.jpg"
    );
}

#[test]
fn test_stored_name_strips_unsafe_extension_characters() {
    assert_eq!(
        stored_file_name(Some("notes.p-d_f"), 5, 7),
        "5-7.pdf"
    );
    assert_eq!(stored_file_name(Some("../../etc/passwd.$$"), 5, 7), "5-7");
}

#[test]
fn test_stored_name_without_extension() {
    assert_eq!(stored_file_name(Some("README"), 5, 7), "5-7");
    assert_eq!(stored_file_name(None, 5, 7), "5-7");
    assert_eq!(stored_file_name(Some(""), 5, 7), "5-7");
}

#[tokio::test]
async fn test_store_writes_file_and_returns_public_path() {
    let dir = tempfile::tempdir().unwrap();
    let store = UploadStore::new(dir.path().join("nested/uploads"));
    store.ensure_dir().await.unwrap();

    let path: String = store.store(Some("diagram.SVG"), b"<svg/>").await.unwrap();

    let name = path.strip_prefix("/uploads/").unwrap();
    assert!(name.ends_with(".svg"));
    assert_eq!(
        std::fs::read(store.dir().join(name)).unwrap(),
        b"<svg/>"
    );
}
