//! Integration tests for route-change tracking and the template helpers

use lingo_router::*;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;

fn sample_registry(default_lang: &str) -> RouteRegistry {
    let mut registry = RouteRegistry::new(LanguageSettings::new(default_lang));
    registry
        .when(
            [("tr", "/a/:id"), ("en", "/b/:id")],
            meta(json!({ "name": "x" })),
        )
        .when(
            [("tr", "/hakkimizda"), ("en", "/about")],
            meta(json!({ "name": "about" })),
        );
    registry
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

// ============================================================================
// is_active
// ============================================================================

#[rstest]
#[case("x", true)]
#[case("y", false)]
#[case("x,y", true)]
#[case("y,x", true)]
#[case("x_tr", true)]
#[case("y, x", false)]
#[case("", false)]
fn test_is_active_with_language(#[case] route_names: &str, #[case] expected: bool) {
    let current = CurrentRoute::new("x_tr").with_lang("tr");
    assert_eq!(is_active(route_names, Some(&current)), expected);
}

#[test]
fn test_is_active_without_language_matches_bare_name_only() {
    let current = CurrentRoute::new("x");

    assert!(is_active("x", Some(&current)));
    assert!(!is_active("x_tr", Some(&CurrentRoute::new("x"))));
    assert!(!is_active("x", Some(&CurrentRoute::new("x_tr"))));
}

#[test]
fn test_is_active_without_current_route() {
    assert!(!is_active("x", None));
}

#[test]
fn test_is_active_ignores_other_languages() {
    let current = CurrentRoute::new("x_en").with_lang("tr");
    assert!(!is_active("x", Some(&current)));
}

// ============================================================================
// Navigator
// ============================================================================

#[test]
fn test_navigator_starts_in_default_language() {
    let registry = sample_registry("tr");
    let navigator = Navigator::new(registry.resolver());

    assert_eq!(navigator.current_lang(), "tr");
    assert!(navigator.current_route().is_none());
    assert!(!navigator.is_active("x", None));
}

#[test]
fn test_route_change_sets_current_language() {
    init_tracing();
    let registry = sample_registry("tr");
    let mut navigator = Navigator::new(registry.resolver());

    navigator.route_change_start(None, &meta(json!({ "routeName": "x_en", "lang": "en" })));

    assert_eq!(navigator.current_lang(), "en");
    assert_eq!(
        navigator.current_route(),
        Some(&CurrentRoute::new("x_en").with_lang("en"))
    );
}

#[test]
fn test_route_change_without_language_uses_live_default() {
    let registry = sample_registry("tr");
    let mut navigator = Navigator::new(registry.resolver());

    navigator.route_change_start(None, &meta(json!({ "routeName": "x_en", "lang": "en" })));
    registry.set_default_lang("de");

    let previous = meta(json!({ "routeName": "x_en", "lang": "en" }));
    navigator.route_change_start(Some(&previous), &meta(json!({ "redirectTo": "/" })));

    assert_eq!(navigator.current_lang(), "de");
    assert!(navigator.current_route().is_none());
}

#[test]
fn test_url_uses_current_language() {
    let registry = sample_registry("tr");
    let mut navigator = Navigator::new(registry.resolver());

    assert_eq!(navigator.url("about", None).as_deref(), Some("/hakkimizda"));

    navigator.route_change_start(None, &meta(json!({ "routeName": "about_en", "lang": "en" })));
    assert_eq!(navigator.url("about", None).as_deref(), Some("/about"));
    assert_eq!(
        navigator.url("x", Some(&meta(json!({ "id": 9 })))).as_deref(),
        Some("/b/9")
    );
}

#[test]
fn test_url_with_qualified_name_pins_language() {
    let mut registry = sample_registry("tr");
    registry.alias("legacy", "x_en");
    let navigator = Navigator::new(registry.resolver());

    assert_eq!(navigator.current_lang(), "tr");
    assert_eq!(navigator.url("x_en", None).as_deref(), Some("/b/:id"));
    assert_eq!(
        navigator.url("x_en", Some(&meta(json!({ "id": 5 })))).as_deref(),
        Some("/b/5")
    );
    assert_eq!(
        navigator.url("legacy", Some(&meta(json!({ "id": 5 })))).as_deref(),
        Some("/b/5")
    );
    assert_eq!(
        navigator.url(RouteKey::qualified("about", "en"), None).as_deref(),
        Some("/about")
    );
}

#[test]
fn test_url_caller_language_wins() {
    let registry = sample_registry("tr");
    let mut navigator = Navigator::new(registry.resolver());
    navigator.route_change_start(None, &meta(json!({ "routeName": "about_en", "lang": "en" })));

    let args = meta(json!({ "lang": "tr", "id": 3 }));
    assert_eq!(navigator.url("x", Some(&args)).as_deref(), Some("/a/3"));
    assert_eq!(navigator.url("missing", Some(&args)), None);
}

#[test]
fn test_navigator_is_active_uses_tracked_route() {
    let registry = sample_registry("tr");
    let mut navigator = Navigator::new(registry.resolver());

    let dispatched = registry
        .get(&RouteKey::qualified("about", "tr"))
        .unwrap();
    navigator.route_change_start(None, &dispatched.metadata);

    assert!(navigator.is_active("about", None));
    assert!(navigator.is_active("x,about", None));
    assert!(!navigator.is_active("x", None));

    let explicit = CurrentRoute::new("x_tr").with_lang("tr");
    assert!(navigator.is_active("x", Some(&explicit)));
}

#[test]
fn test_dispatched_definition_converts_to_current_route() {
    let registry = sample_registry("tr");
    let bare = registry.get(&RouteKey::bare("x")).unwrap();

    assert_eq!(bare.to_current(), Some(CurrentRoute::new("x").with_lang("tr")));
}
