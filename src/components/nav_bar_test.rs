use super::*;

// =============================================================
// Active link class
// =============================================================

#[test]
fn exact_match_gets_active_modifier() {
    assert_eq!(
        link_class("/login", routes::LOGIN),
        "nav-bar__link nav-bar__link--active"
    );
}

#[test]
fn other_paths_get_plain_class() {
    assert_eq!(link_class("/login", routes::HOME), "nav-bar__link");
    assert_eq!(link_class("/", routes::LOGIN), "nav-bar__link");
}

#[test]
fn match_is_exact_not_prefix() {
    assert_eq!(link_class("/new-post/draft", routes::NEW_POST), "nav-bar__link");
    assert_eq!(link_class("/login/", routes::LOGIN), "nav-bar__link");
}
