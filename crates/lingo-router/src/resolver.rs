// File: src/resolver.rs
// Purpose: Name → URL resolution against a built route table

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

use crate::definition::{value_to_string, RouteArgs, RouteDefinition, LANG_FIELD};
use crate::{LanguageSettings, Metadata, RouteKey, RouteRegistry};

/// One language-switch link: the resolved URL and the language it belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alternate {
    pub route: Option<String>,
    pub lang: String,
}

/// Answers lookup and URL queries for a [`RouteRegistry`]
///
/// The resolver borrows the table and shares the registry's language handle,
/// so [`set_default_lang`](Self::set_default_lang) is visible to the registry
/// and to every other resolver built from it.
///
/// # Examples
///
/// ```
/// use lingo_router::{meta, LanguageSettings, RouteRegistry};
/// use serde_json::json;
///
/// let mut registry = RouteRegistry::new(LanguageSettings::new("tr"));
/// registry.when(
///     [("tr", "/urun/:id"), ("en", "/product/:id")],
///     meta(json!({ "name": "product" })),
/// );
///
/// let resolver = registry.resolver();
/// let args = meta(json!({ "lang": "en", "id": 42 }));
///
/// assert_eq!(resolver.route_path("product", Some(&args)), Some("/product/42".to_string()));
/// assert_eq!(resolver.route_path("product", None), Some("/urun/:id".to_string()));
/// assert_eq!(resolver.route_path("missing", None), None);
/// ```
#[derive(Debug, Clone)]
pub struct RouteResolver<'a> {
    registry: &'a RouteRegistry,
    language: LanguageSettings,
}

impl<'a> RouteResolver<'a> {
    pub fn new(registry: &'a RouteRegistry) -> Self {
        Self {
            registry,
            language: registry.language().clone(),
        }
    }

    pub fn registry(&self) -> &'a RouteRegistry {
        self.registry
    }

    pub fn default_lang(&self) -> String {
        self.language.default_lang()
    }

    /// Switches the default language at runtime; no validation is applied
    pub fn set_default_lang(&self, lang: impl Into<String>) {
        self.language.set_default_lang(lang);
    }

    /// Looks up a definition, preferring the entry for `args["lang"]`
    ///
    /// For a bare key with a string `lang` argument, the language-qualified
    /// entry is tried first; the bare entry is the fallback. Never fails,
    /// a miss is simply `None`.
    pub fn get_route(
        &self,
        key: impl Into<RouteKey>,
        args: Option<&RouteArgs>,
    ) -> Option<Arc<RouteDefinition>> {
        let key = key.into();

        let localized = match (key.is_bare(), requested_lang(args)) {
            (true, Some(lang)) => self.registry.get(&key.with_lang(lang)),
            _ => None,
        };

        localized.or_else(|| self.registry.get(&key))
    }

    /// Whether `key` resolves to a defined entry
    pub fn route_defined(&self, key: impl Into<RouteKey>) -> bool {
        self.get_route(key, None).is_some()
    }

    /// Substitutes `:name` placeholders, see [`replace_url_params`]
    pub fn replace_url_params(&self, url: &str, params: &RouteArgs) -> String {
        replace_url_params(url, params)
    }

    /// Resolves a route to a concrete URL
    ///
    /// Placeholders are only substituted when `args` is given; without args
    /// the raw pattern comes back. `None` when nothing is registered under the
    /// key or the entry has no pattern.
    pub fn route_path(&self, key: impl Into<RouteKey>, args: Option<&RouteArgs>) -> Option<String> {
        let definition = self.get_route(key, args)?;
        let pattern = definition.url_pattern.as_deref()?;

        Some(match args {
            Some(args) => replace_url_params(pattern, args),
            None => pattern.to_string(),
        })
    }

    /// Language-switch links for a route whose only argument is the language
    pub fn get_alternates_from_static_routes<S: AsRef<str>>(
        &self,
        key: impl Into<RouteKey>,
        languages: &[S],
    ) -> Vec<Alternate> {
        let key = key.into();

        languages
            .iter()
            .map(|lang| {
                let lang = lang.as_ref();
                let mut args = RouteArgs::new();
                args.insert(LANG_FIELD.to_string(), Value::from(lang));

                Alternate {
                    route: self.route_path(&key, Some(&args)),
                    lang: lang.to_string(),
                }
            })
            .collect()
    }

    /// Language-switch links where each language carries its own arguments
    ///
    /// Each parameter set must contain its `lang`; a set without one yields an
    /// alternate with an empty language.
    pub fn get_alternates_from_dynamic_routes(
        &self,
        key: impl Into<RouteKey>,
        param_sets: &[RouteArgs],
    ) -> Vec<Alternate> {
        let key = key.into();

        param_sets
            .iter()
            .map(|args| Alternate {
                route: self.route_path(&key, Some(args)),
                lang: args.get(LANG_FIELD).map(value_to_string).unwrap_or_default(),
            })
            .collect()
    }

    /// Catch-all metadata of the underlying table
    pub fn fallback(&self) -> Option<&'a Metadata> {
        self.registry.fallback()
    }
}

/// Replaces the first literal `:<key>` in `url` for every entry of `params`
///
/// Replacement follows the iteration order of `params` and matches plain
/// substrings: a `:id` parameter also hits the front of `:id2`.
///
/// # Examples
///
/// ```
/// use lingo_router::{meta, replace_url_params};
/// use serde_json::json;
///
/// let params = meta(json!({ "year": 2024, "slug": "hello" }));
/// assert_eq!(replace_url_params("/posts/:year/:slug", &params), "/posts/2024/hello");
/// ```
pub fn replace_url_params(url: &str, params: &RouteArgs) -> String {
    params.iter().fold(url.to_string(), |acc, (name, value)| {
        acc.replacen(&format!(":{}", name), &value_to_string(value), 1)
    })
}

fn requested_lang(args: Option<&RouteArgs>) -> Option<&str> {
    args?.get(LANG_FIELD)?.as_str()
}
