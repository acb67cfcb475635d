// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for blog post, event and resource handlers.

use olympiad_cms_persistence::Persistence;

use crate::tests::helpers::create_test_admin;
use crate::{
    ApiError, CreateBlogPostRequest, CreateEventRequest, CreateResourceRequest, create_blog_post,
    create_event, create_resource, delete_blog_post, delete_event, delete_resource, get_blog_post,
    get_event, get_resource, list_blog_posts, list_events, list_resources,
};

fn blog_request(title: &str, category: &str) -> CreateBlogPostRequest {
    CreateBlogPostRequest {
        title: Some(title.to_string()),
        content: Some(String::from("Full article text")),
        category: Some(category.to_string()),
        author: None,
        image_url: None,
    }
}

fn event_request(title: &str, event_date: &str, event_type: &str) -> CreateEventRequest {
    CreateEventRequest {
        title: Some(title.to_string()),
        event_date: Some(event_date.to_string()),
        event_type: Some(event_type.to_string()),
        ..CreateEventRequest::default()
    }
}

fn resource_request(title: &str, resource_type: &str) -> CreateResourceRequest {
    CreateResourceRequest {
        title: Some(title.to_string()),
        resource_type: Some(resource_type.to_string()),
        ..CreateResourceRequest::default()
    }
}

#[test]
fn test_create_blog_post_returns_id_and_is_fetchable() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let admin = create_test_admin();

    let mut request = blog_request("Team selected", "news");
    request.author = Some(String::from("Coach"));
    request.image_url = Some(String::from("/uploads/1-2.jpg"));
    let created = create_blog_post(&mut persistence, &admin, request).unwrap();
    assert!(created.success);

    let post = get_blog_post(&mut persistence, created.id).unwrap();
    assert_eq!(post.title, "Team selected");
    assert_eq!(post.author.as_deref(), Some("Coach"));
    assert_eq!(post.image_url.as_deref(), Some("/uploads/1-2.jpg"));
}

#[test]
fn test_create_blog_post_missing_field_is_invalid_input() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let admin = create_test_admin();

    let mut request = blog_request("No category", "news");
    request.category = Some(String::from("   "));
    let result = create_blog_post(&mut persistence, &admin, request);

    match result.unwrap_err() {
        ApiError::InvalidInput { field, .. } => assert_eq!(field, "category"),
        other => panic!("Expected InvalidInput, got {other:?}"),
    }
    assert!(list_blog_posts(&mut persistence, None).unwrap().is_empty());
}

#[test]
fn test_blank_optional_fields_are_stored_as_absent() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let admin = create_test_admin();

    let mut request = blog_request("Blank author", "news");
    request.author = Some(String::new());
    let created = create_blog_post(&mut persistence, &admin, request).unwrap();

    let post = get_blog_post(&mut persistence, created.id).unwrap();
    assert!(post.author.is_none());
}

#[test]
fn test_list_blog_posts_all_means_unfiltered() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let admin = create_test_admin();
    create_blog_post(&mut persistence, &admin, blog_request("A", "news")).unwrap();
    create_blog_post(&mut persistence, &admin, blog_request("B", "tips")).unwrap();

    assert_eq!(list_blog_posts(&mut persistence, None).unwrap().len(), 2);
    assert_eq!(
        list_blog_posts(&mut persistence, Some("all")).unwrap().len(),
        2
    );
    assert_eq!(list_blog_posts(&mut persistence, Some("")).unwrap().len(), 2);

    let tips = list_blog_posts(&mut persistence, Some("tips")).unwrap();
    assert_eq!(tips.len(), 1);
    assert_eq!(tips[0].title, "B");
}

#[test]
fn test_get_unknown_blog_post_is_not_found() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    let result = get_blog_post(&mut persistence, 404);

    assert!(matches!(
        result,
        Err(ApiError::ResourceNotFound { ref resource_type, .. }) if resource_type == "Blog post"
    ));
}

#[test]
fn test_delete_is_success_shaped_even_for_unknown_ids() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let admin = create_test_admin();

    assert!(delete_blog_post(&mut persistence, &admin, 12).unwrap().success);
    assert!(delete_event(&mut persistence, &admin, 12).unwrap().success);
    assert!(delete_resource(&mut persistence, &admin, 12).unwrap().success);
}

#[test]
fn test_delete_blog_post_removes_it() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let admin = create_test_admin();
    let created = create_blog_post(&mut persistence, &admin, blog_request("Old", "news")).unwrap();

    delete_blog_post(&mut persistence, &admin, created.id).unwrap();

    assert!(get_blog_post(&mut persistence, created.id).is_err());
}

#[test]
fn test_create_event_requires_date_and_type() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let admin = create_test_admin();

    let mut missing_type = event_request("Camp", "2026-07-01", "workshop");
    missing_type.event_type = None;
    match create_event(&mut persistence, &admin, missing_type).unwrap_err() {
        ApiError::InvalidInput { field, .. } => assert_eq!(field, "event_type"),
        other => panic!("Expected InvalidInput, got {other:?}"),
    }

    let bad_date = event_request("Camp", "07/01/2026", "workshop");
    match create_event(&mut persistence, &admin, bad_date).unwrap_err() {
        ApiError::InvalidInput { field, .. } => assert_eq!(field, "event_date"),
        other => panic!("Expected InvalidInput, got {other:?}"),
    }
}

#[test]
fn test_event_date_is_stored_canonically() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let admin = create_test_admin();

    let created = create_event(
        &mut persistence,
        &admin,
        event_request("Final", " 2026-09-05 ", "competition"),
    )
    .unwrap();

    assert_eq!(
        get_event(&mut persistence, created.id).unwrap().event_date,
        "2026-09-05"
    );
}

#[test]
fn test_list_events_filters_by_type() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let admin = create_test_admin();
    create_event(
        &mut persistence,
        &admin,
        event_request("Camp", "2026-07-01", "workshop"),
    )
    .unwrap();
    create_event(
        &mut persistence,
        &admin,
        event_request("Final", "2026-09-01", "competition"),
    )
    .unwrap();

    let all = list_events(&mut persistence, Some("ALL")).unwrap();
    assert_eq!(all[0].title, "Final");
    assert_eq!(all[1].title, "Camp");

    let workshops = list_events(&mut persistence, Some("workshop")).unwrap();
    assert_eq!(workshops.len(), 1);
}

#[test]
fn test_resource_round_trip_through_handlers() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let admin = create_test_admin();

    let mut request = resource_request("Past papers", "pdf");
    request.file_url = Some(String::from("/uploads/9-9.pdf"));
    let created = create_resource(&mut persistence, &admin, request).unwrap();

    let resource = get_resource(&mut persistence, created.id).unwrap();
    assert_eq!(resource.file_url.as_deref(), Some("/uploads/9-9.pdf"));
    assert!(resource.description.is_none());

    assert_eq!(list_resources(&mut persistence, Some("pdf")).unwrap().len(), 1);
    assert!(list_resources(&mut persistence, Some("video")).unwrap().is_empty());

    let missing_type = resource_request("Untyped", "");
    assert!(matches!(
        create_resource(&mut persistence, &admin, missing_type),
        Err(ApiError::InvalidInput { .. })
    ));
}
