// File: src/definition.rs
// Purpose: Route definitions, their metadata and the URL specs they are built from

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};

/// Ordered string → any mapping carried with every route
///
/// The same shape is used for caller parameters, dispatcher metadata and URL
/// arguments, so values flow between them unchanged.
pub type Metadata = serde_json::Map<String, Value>;

/// Arguments for URL resolution (`lang` plus placeholder values)
pub type RouteArgs = Metadata;

/// Metadata field holding the fully qualified route name
pub const ROUTE_NAME_FIELD: &str = "routeName";
/// Metadata field holding the language of a definition
pub const LANG_FIELD: &str = "lang";
/// Caller parameter naming the logical route
pub const NAME_FIELD: &str = "name";

/// A URL pattern and the metadata registered with it
///
/// Definitions are shared through `Arc` once registered; an alias points at
/// the very same definition as its target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteDefinition {
    /// Pattern like `/users/:id`; `None` when a localized registration lacked
    /// the default language
    pub url_pattern: Option<String>,
    /// Caller parameters plus the reserved `lang` / `routeName` fields
    pub metadata: Metadata,
}

impl RouteDefinition {
    pub fn new(url_pattern: Option<String>, metadata: Metadata) -> Self {
        Self {
            url_pattern,
            metadata,
        }
    }

    /// The `routeName` this definition was registered under
    pub fn route_name(&self) -> Option<&str> {
        self.metadata.get(ROUTE_NAME_FIELD).and_then(Value::as_str)
    }

    pub fn lang(&self) -> Option<&str> {
        self.metadata.get(LANG_FIELD).and_then(Value::as_str)
    }

    pub fn get_meta(&self, key: &str) -> Option<&Value> {
        self.metadata.get(key)
    }

    pub fn has_meta(&self, key: &str) -> bool {
        self.metadata.contains_key(key)
    }

    /// Route context as a dispatcher would report it after matching this definition
    pub fn to_current(&self) -> Option<CurrentRoute> {
        CurrentRoute::from_metadata(&self.metadata)
    }
}

/// URL input accepted by registration: one pattern, or one pattern per language
///
/// # Examples
///
/// ```
/// use lingo_router::UrlSpec;
///
/// let single = UrlSpec::from("/about");
/// let localized = UrlSpec::from([("tr", "/hakkimizda"), ("en", "/about")]);
///
/// assert!(matches!(single, UrlSpec::Single(_)));
/// assert_eq!(localized.pattern_for("tr"), Some("/hakkimizda"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlSpec {
    Single(String),
    /// (lang, pattern) pairs in registration order
    Localized(Vec<(String, String)>),
}

impl UrlSpec {
    /// Pattern registered for `lang` in a localized spec
    pub fn pattern_for(&self, lang: &str) -> Option<&str> {
        match self {
            UrlSpec::Single(_) => None,
            UrlSpec::Localized(pairs) => pairs
                .iter()
                .find(|(l, _)| l == lang)
                .map(|(_, pattern)| pattern.as_str()),
        }
    }
}

impl From<&str> for UrlSpec {
    fn from(url: &str) -> Self {
        UrlSpec::Single(url.to_string())
    }
}

impl From<String> for UrlSpec {
    fn from(url: String) -> Self {
        UrlSpec::Single(url)
    }
}

impl<L, P> From<Vec<(L, P)>> for UrlSpec
where
    L: Into<String>,
    P: Into<String>,
{
    fn from(pairs: Vec<(L, P)>) -> Self {
        UrlSpec::Localized(
            pairs
                .into_iter()
                .map(|(lang, pattern)| (lang.into(), pattern.into()))
                .collect(),
        )
    }
}

impl<L, P, const N: usize> From<[(L, P); N]> for UrlSpec
where
    L: Into<String>,
    P: Into<String>,
{
    fn from(pairs: [(L, P); N]) -> Self {
        UrlSpec::from(Vec::from(pairs))
    }
}

impl From<BTreeMap<String, String>> for UrlSpec {
    fn from(map: BTreeMap<String, String>) -> Self {
        UrlSpec::Localized(map.into_iter().collect())
    }
}

impl From<HashMap<String, String>> for UrlSpec {
    fn from(map: HashMap<String, String>) -> Self {
        UrlSpec::Localized(map.into_iter().collect())
    }
}

/// Name and language of the currently dispatched route
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentRoute {
    pub route_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
}

impl CurrentRoute {
    pub fn new(route_name: impl Into<String>) -> Self {
        Self {
            route_name: route_name.into(),
            lang: None,
        }
    }

    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }

    /// Reads `routeName` and `lang` out of dispatched metadata
    ///
    /// Returns `None` when the metadata carries no string `routeName`.
    pub fn from_metadata(metadata: &Metadata) -> Option<Self> {
        let route_name = metadata.get(ROUTE_NAME_FIELD)?.as_str()?;
        Some(Self {
            route_name: route_name.to_string(),
            lang: metadata
                .get(LANG_FIELD)
                .and_then(Value::as_str)
                .map(str::to_string),
        })
    }
}

/// Converts a JSON value into metadata (non-objects yield an empty map)
///
/// # Examples
///
/// ```
/// use lingo_router::meta;
/// use serde_json::json;
///
/// let params = meta(json!({ "name": "inbox", "controller": "InboxCtrl" }));
/// assert_eq!(params["name"], "inbox");
/// assert!(meta(json!("not an object")).is_empty());
/// ```
pub fn meta(value: Value) -> Metadata {
    match value {
        Value::Object(map) => map,
        _ => Metadata::new(),
    }
}

/// String form of a metadata value as it is spliced into a URL
///
/// Strings are used verbatim; everything else uses its JSON text.
pub(crate) fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_value_to_string() {
        assert_eq!(value_to_string(&json!("abc")), "abc");
        assert_eq!(value_to_string(&json!(5)), "5");
        assert_eq!(value_to_string(&json!(true)), "true");
        assert_eq!(value_to_string(&Value::Null), "null");
    }

    #[test]
    fn test_current_route_from_metadata() {
        let metadata = json!({ "routeName": "inbox_tr", "lang": "tr", "controller": "InboxCtrl" });
        let current = CurrentRoute::from_metadata(metadata.as_object().unwrap()).unwrap();
        assert_eq!(current, CurrentRoute::new("inbox_tr").with_lang("tr"));
    }

    #[test]
    fn test_current_route_requires_route_name() {
        let metadata = json!({ "lang": "tr" });
        assert!(CurrentRoute::from_metadata(metadata.as_object().unwrap()).is_none());
    }

    #[test]
    fn test_pattern_for_single_spec() {
        assert_eq!(UrlSpec::from("/a").pattern_for("en"), None);
    }
}
