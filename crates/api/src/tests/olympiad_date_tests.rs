// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use olympiad_cms_persistence::Persistence;
use time::macros::date;

use crate::tests::helpers::create_test_admin;
use crate::{
    ApiError, CreateOlympiadDateRequest, create_olympiad_date, delete_olympiad_date,
    get_olympiad_date, list_all_olympiad_dates, list_upcoming_olympiad_dates,
};

fn date_request(title: &str, date: &str) -> CreateOlympiadDateRequest {
    CreateOlympiadDateRequest {
        title: Some(title.to_string()),
        date: Some(date.to_string()),
        ..CreateOlympiadDateRequest::default()
    }
}

#[test]
fn test_upcoming_excludes_past_dates() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let admin = create_test_admin();
    for (title, day) in [
        ("Past", "2026-01-10"),
        ("Today", "2026-03-01"),
        ("Later", "2026-05-20"),
    ] {
        create_olympiad_date(&mut persistence, &admin, date_request(title, day)).unwrap();
    }

    let upcoming = list_upcoming_olympiad_dates(&mut persistence, date!(2026 - 03 - 01)).unwrap();
    let titles: Vec<&str> = upcoming.iter().map(|d| d.title.as_str()).collect();
    assert_eq!(titles, vec!["Today", "Later"]);

    let all = list_all_olympiad_dates(&mut persistence, &admin).unwrap();
    let titles: Vec<&str> = all.iter().map(|d| d.title.as_str()).collect();
    assert_eq!(titles, vec!["Later", "Today", "Past"]);
}

#[test]
fn test_create_olympiad_date_validates_deadline() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let admin = create_test_admin();

    let mut request = date_request("Final", "2026-10-10");
    request.registration_deadline = Some(String::from("soon"));

    match create_olympiad_date(&mut persistence, &admin, request).unwrap_err() {
        ApiError::InvalidInput { field, .. } => assert_eq!(field, "registration_deadline"),
        other => panic!("Expected InvalidInput, got {other:?}"),
    }
}

#[test]
fn test_create_olympiad_date_with_blank_deadline() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let admin = create_test_admin();

    let mut request = date_request("Final", "2026-10-10");
    request.registration_deadline = Some(String::new());
    request.description = Some(String::from("National stage"));

    let created = create_olympiad_date(&mut persistence, &admin, request).unwrap();
    let stored = get_olympiad_date(&mut persistence, created.id).unwrap();

    assert!(stored.registration_deadline.is_none());
    assert_eq!(stored.description.as_deref(), Some("National stage"));
}

#[test]
fn test_create_olympiad_date_requires_date() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let admin = create_test_admin();

    let request = CreateOlympiadDateRequest {
        title: Some(String::from("Undated")),
        ..CreateOlympiadDateRequest::default()
    };

    match create_olympiad_date(&mut persistence, &admin, request).unwrap_err() {
        ApiError::InvalidInput { field, .. } => assert_eq!(field, "date"),
        other => panic!("Expected InvalidInput, got {other:?}"),
    }
}

#[test]
fn test_delete_olympiad_date() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let admin = create_test_admin();
    let created =
        create_olympiad_date(&mut persistence, &admin, date_request("Gone", "2026-02-02")).unwrap();

    assert!(delete_olympiad_date(&mut persistence, &admin, created.id).unwrap().success);
    assert!(matches!(
        get_olympiad_date(&mut persistence, created.id),
        Err(ApiError::ResourceNotFound { .. })
    ));
}
