// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::{create_test_blog_post, create_test_persistence};

#[test]
fn test_create_and_get_blog_post() {
    let mut persistence = create_test_persistence();
    let mut draft = create_test_blog_post("Results announced", "news");
    draft.image_url = Some(String::from("/uploads/1700000000000-7.png"));

    let id = persistence.create_blog_post(&draft).unwrap();
    let post = persistence.get_blog_post(id).unwrap().unwrap();

    assert_eq!(post.id, id);
    assert_eq!(post.title, "Results announced");
    assert_eq!(post.content, "Body of Results announced");
    assert_eq!(post.category, "news");
    assert_eq!(post.author.as_deref(), Some("Olympiad Committee"));
    assert_eq!(post.image_url.as_deref(), Some("/uploads/1700000000000-7.png"));
}

#[test]
fn test_optional_fields_stored_as_null() {
    let mut persistence = create_test_persistence();
    let mut draft = create_test_blog_post("Bare", "tips");
    draft.author = None;

    let id = persistence.create_blog_post(&draft).unwrap();
    let post = persistence.get_blog_post(id).unwrap().unwrap();

    assert!(post.author.is_none());
    assert!(post.image_url.is_none());
}

#[test]
fn test_ids_are_distinct() {
    let mut persistence = create_test_persistence();
    let first = persistence
        .create_blog_post(&create_test_blog_post("One", "news"))
        .unwrap();
    let second = persistence
        .create_blog_post(&create_test_blog_post("Two", "news"))
        .unwrap();

    assert_ne!(first, second);
}

#[test]
fn test_list_blog_posts_newest_first() {
    let mut persistence = create_test_persistence();
    for title in ["First", "Second", "Third"] {
        persistence
            .create_blog_post(&create_test_blog_post(title, "news"))
            .unwrap();
    }

    let titles: Vec<String> = persistence
        .list_blog_posts(None)
        .unwrap()
        .into_iter()
        .map(|p| p.title)
        .collect();

    assert_eq!(titles, vec!["Third", "Second", "First"]);
}

#[test]
fn test_list_blog_posts_filters_by_category() {
    let mut persistence = create_test_persistence();
    persistence
        .create_blog_post(&create_test_blog_post("Winners", "news"))
        .unwrap();
    persistence
        .create_blog_post(&create_test_blog_post("Study plan", "tips"))
        .unwrap();
    persistence
        .create_blog_post(&create_test_blog_post("Venue", "news"))
        .unwrap();

    let news = persistence.list_blog_posts(Some("news")).unwrap();
    assert_eq!(news.len(), 2);
    assert!(news.iter().all(|p| p.category == "news"));

    let tips = persistence.list_blog_posts(Some("tips")).unwrap();
    assert_eq!(tips.len(), 1);
    assert_eq!(tips[0].title, "Study plan");

    assert!(persistence.list_blog_posts(Some("missing")).unwrap().is_empty());
}

#[test]
fn test_get_unknown_blog_post_returns_none() {
    let mut persistence = create_test_persistence();
    assert!(persistence.get_blog_post(42).unwrap().is_none());
}

#[test]
fn test_delete_blog_post() {
    let mut persistence = create_test_persistence();
    let id = persistence
        .create_blog_post(&create_test_blog_post("Short lived", "news"))
        .unwrap();

    assert_eq!(persistence.delete_blog_post(id).unwrap(), 1);
    assert!(persistence.get_blog_post(id).unwrap().is_none());
    assert_eq!(persistence.delete_blog_post(id).unwrap(), 0);
}
