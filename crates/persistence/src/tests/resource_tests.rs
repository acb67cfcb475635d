// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::{create_test_persistence, create_test_resource};

#[test]
fn test_create_and_get_resource() {
    let mut persistence = create_test_persistence();
    let mut draft = create_test_resource("Past papers 2025", "pdf");
    draft.file_url = Some(String::from("/uploads/1700000000000-3.pdf"));

    let id = persistence.create_resource(&draft).unwrap();
    let resource = persistence.get_resource(id).unwrap().unwrap();

    assert_eq!(resource.title, "Past papers 2025");
    assert_eq!(resource.resource_type, "pdf");
    assert_eq!(resource.description.as_deref(), Some("Practice material"));
    assert_eq!(
        resource.file_url.as_deref(),
        Some("/uploads/1700000000000-3.pdf")
    );
}

#[test]
fn test_list_resources_filters_and_orders() {
    let mut persistence = create_test_persistence();
    persistence
        .create_resource(&create_test_resource("Syllabus", "pdf"))
        .unwrap();
    persistence
        .create_resource(&create_test_resource("Lecture", "video"))
        .unwrap();
    persistence
        .create_resource(&create_test_resource("Formula sheet", "pdf"))
        .unwrap();

    let all: Vec<String> = persistence
        .list_resources(None)
        .unwrap()
        .into_iter()
        .map(|r| r.title)
        .collect();
    assert_eq!(all, vec!["Formula sheet", "Lecture", "Syllabus"]);

    let pdfs: Vec<String> = persistence
        .list_resources(Some("pdf"))
        .unwrap()
        .into_iter()
        .map(|r| r.title)
        .collect();
    assert_eq!(pdfs, vec!["Formula sheet", "Syllabus"]);
}

#[test]
fn test_delete_resource() {
    let mut persistence = create_test_persistence();
    let id = persistence
        .create_resource(&create_test_resource("Old", "pdf"))
        .unwrap();

    assert_eq!(persistence.delete_resource(id).unwrap(), 1);
    assert!(persistence.get_resource(id).unwrap().is_none());
}
