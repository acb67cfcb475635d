// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::{create_test_contact_submission, create_test_persistence};

#[test]
fn test_new_submission_is_unread() {
    let mut persistence = create_test_persistence();
    let id = persistence
        .create_contact_submission(&create_test_contact_submission("Ada"))
        .unwrap();

    let submission = persistence.get_contact_submission(id).unwrap().unwrap();
    assert_eq!(submission.name, "Ada");
    assert_eq!(submission.email, "ada@example.com");
    assert_eq!(submission.read, 0);
    assert!(!submission.is_read());
}

#[test]
fn test_mark_read_is_idempotent() {
    let mut persistence = create_test_persistence();
    let id = persistence
        .create_contact_submission(&create_test_contact_submission("Grace"))
        .unwrap();

    assert_eq!(persistence.mark_contact_submission_read(id).unwrap(), 1);
    assert_eq!(persistence.mark_contact_submission_read(id).unwrap(), 1);

    let submission = persistence.get_contact_submission(id).unwrap().unwrap();
    assert_eq!(submission.read, 1);
}

#[test]
fn test_mark_read_unknown_id_affects_nothing() {
    let mut persistence = create_test_persistence();
    assert_eq!(persistence.mark_contact_submission_read(77).unwrap(), 0);
}

#[test]
fn test_list_submissions_newest_first() {
    let mut persistence = create_test_persistence();
    for name in ["Ada", "Grace", "Alan"] {
        persistence
            .create_contact_submission(&create_test_contact_submission(name))
            .unwrap();
    }

    let names: Vec<String> = persistence
        .list_contact_submissions()
        .unwrap()
        .into_iter()
        .map(|s| s.name)
        .collect();

    assert_eq!(names, vec!["Alan", "Grace", "Ada"]);
}

#[test]
fn test_delete_submission() {
    let mut persistence = create_test_persistence();
    let id = persistence
        .create_contact_submission(&create_test_contact_submission("Ada"))
        .unwrap();

    assert_eq!(persistence.delete_contact_submission(id).unwrap(), 1);
    assert!(persistence.list_contact_submissions().unwrap().is_empty());
}
