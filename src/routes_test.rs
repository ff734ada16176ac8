use super::*;

use std::collections::HashSet;
use std::ptr;

// =============================================================
// Table shape
// =============================================================

#[test]
fn table_has_exactly_four_entries() {
    assert_eq!(ROUTES.len(), 4);
}

#[test]
fn paths_are_pairwise_distinct() {
    let unique: HashSet<&str> = ROUTES.iter().map(|entry| entry.path).collect();
    assert_eq!(unique.len(), ROUTES.len());
}

#[test]
fn paths_are_rooted() {
    for entry in &ROUTES {
        assert!(entry.path.starts_with('/'), "{} is not rooted", entry.path);
    }
}

// =============================================================
// Lookup
// =============================================================

#[test]
fn home_path_resolves_to_home_view() {
    assert!(ptr::fn_addr_eq(view_for(HOME).unwrap(), home as ViewFn));
}

#[test]
fn new_post_path_resolves_to_composer_view() {
    assert!(ptr::fn_addr_eq(view_for(NEW_POST).unwrap(), new_post as ViewFn));
}

#[test]
fn login_path_resolves_to_login_view() {
    assert!(ptr::fn_addr_eq(view_for(LOGIN).unwrap(), login as ViewFn));
}

#[test]
fn sign_up_path_resolves_to_sign_up_view() {
    assert!(ptr::fn_addr_eq(view_for(SIGN_UP).unwrap(), sign_up as ViewFn));
}

#[test]
fn unknown_path_has_no_view() {
    assert!(view_for("/profile").is_none());
    assert!(view_for("").is_none());
}

#[test]
fn lookup_is_exact_match_only() {
    assert!(view_for("/login/").is_none());
    assert!(view_for("login").is_none());
    assert!(view_for("/Login").is_none());
    assert!(view_for("/new-post/draft").is_none());
}

// =============================================================
// Segments
// =============================================================

#[test]
fn segment_strips_the_leading_slash() {
    assert_eq!(segment(NEW_POST), "new-post");
    assert_eq!(segment(LOGIN), "login");
    assert_eq!(segment(SIGN_UP), "sign-up");
}

#[test]
fn root_path_maps_to_the_empty_segment() {
    assert_eq!(segment(HOME), "");
}
