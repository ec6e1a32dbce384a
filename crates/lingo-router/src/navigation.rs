// File: src/navigation.rs
// Purpose: Route-change tracking and the template helpers `url` / `is_active`

use serde_json::Value;
use std::collections::HashSet;

use crate::definition::{CurrentRoute, Metadata, RouteArgs, LANG_FIELD};
use crate::{RouteKey, RouteResolver};

/// Follows the host dispatcher's route changes and serves template helpers
///
/// The host forwards every "route change started" notification to
/// [`route_change_start`](Self::route_change_start). The navigator remembers
/// the language of the incoming route (or the default language when the
/// route has none) and uses it for [`url`](Self::url).
///
/// # Examples
///
/// ```
/// use lingo_router::{meta, LanguageSettings, Navigator, RouteRegistry};
/// use serde_json::json;
///
/// let mut registry = RouteRegistry::new(LanguageSettings::new("en"));
/// registry.when(
///     [("tr", "/hakkimizda"), ("en", "/about")],
///     meta(json!({ "name": "about" })),
/// );
///
/// let mut navigator = Navigator::new(registry.resolver());
/// navigator.route_change_start(None, &meta(json!({ "routeName": "about_tr", "lang": "tr" })));
///
/// assert_eq!(navigator.url("about", None), Some("/hakkimizda".to_string()));
/// assert!(navigator.is_active("about", None));
/// ```
#[derive(Debug, Clone)]
pub struct Navigator<'a> {
    resolver: RouteResolver<'a>,
    current_lang: String,
    current: Option<CurrentRoute>,
}

impl<'a> Navigator<'a> {
    pub fn new(resolver: RouteResolver<'a>) -> Self {
        let current_lang = resolver.default_lang();
        Self {
            resolver,
            current_lang,
            current: None,
        }
    }

    pub fn resolver(&self) -> &RouteResolver<'a> {
        &self.resolver
    }

    /// Language of the route being dispatched
    pub fn current_lang(&self) -> &str {
        &self.current_lang
    }

    pub fn current_route(&self) -> Option<&CurrentRoute> {
        self.current.as_ref()
    }

    /// Handles a "route change started" notification
    ///
    /// `next` is the metadata the dispatcher matched. Its `lang` becomes the
    /// current language, falling back to the default language at the time of
    /// the call.
    pub fn route_change_start(&mut self, previous: Option<&Metadata>, next: &Metadata) {
        self.current_lang = next
            .get(LANG_FIELD)
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| self.resolver.default_lang());
        self.current = CurrentRoute::from_metadata(next);

        tracing::debug!(
            from = ?previous.and_then(CurrentRoute::from_metadata).map(|route| route.route_name),
            to = ?self.current.as_ref().map(|route| &route.route_name),
            lang = %self.current_lang,
            "route change started"
        );
    }

    /// URL for `route_name` in the current language
    ///
    /// Caller arguments win over the current language, so `{"lang": "de"}`
    /// yields the German URL regardless of the active route. A qualified name
    /// such as `"about_en"` pins the language of the link.
    pub fn url(&self, route_name: impl Into<RouteKey>, args: Option<&RouteArgs>) -> Option<String> {
        let mut merged = RouteArgs::new();
        merged.insert(LANG_FIELD.to_string(), Value::from(self.current_lang.as_str()));
        if let Some(args) = args {
            merged.extend(args.clone());
        }

        self.resolver.route_path(route_name, Some(&merged))
    }

    /// [`is_active`] against `current`, or the last dispatched route when omitted
    pub fn is_active(&self, route_names: &str, current: Option<&CurrentRoute>) -> bool {
        is_active(route_names, current.or(self.current.as_ref()))
    }
}

/// Whether the current route is one of the comma-separated `route_names`
///
/// Each candidate matches the current route by its bare name, or by its
/// language-qualified name when the current route carries a language.
/// Candidates are not trimmed. Without a current route nothing is active.
///
/// # Examples
///
/// ```
/// use lingo_router::{is_active, CurrentRoute};
///
/// let current = CurrentRoute::new("inbox_tr").with_lang("tr");
///
/// assert!(is_active("inbox", Some(&current)));
/// assert!(is_active("outbox,inbox", Some(&current)));
/// assert!(!is_active("outbox", Some(&current)));
/// assert!(!is_active("inbox", None));
/// ```
pub fn is_active(route_names: &str, current: Option<&CurrentRoute>) -> bool {
    let Some(current) = current else {
        return false;
    };

    let candidates: HashSet<String> = route_names
        .split(',')
        .flat_map(|name| {
            let qualified = match &current.lang {
                Some(lang) => format!("{}_{}", name, lang),
                None => name.to_string(),
            };
            [name.to_string(), qualified]
        })
        .collect();

    candidates.contains(&current.route_name)
}
