// File: src/registry.rs
// Purpose: Route table construction (registration, aliasing, fallback, install)

use serde_json::Value;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::definition::{
    value_to_string, Metadata, RouteDefinition, UrlSpec, LANG_FIELD, NAME_FIELD, ROUTE_NAME_FIELD,
};
use crate::{LanguageSettings, RegistryError, RouteKey, RouteResolver};

/// Host-side route dispatcher that performs the actual URL matching
///
/// The registry never matches URLs itself; `install` hands every pattern and
/// its metadata to the dispatcher unchanged.
pub trait Dispatcher {
    /// Registers a URL pattern with the metadata reported when it matches
    fn when(&mut self, url_pattern: &str, metadata: &Metadata);

    /// Registers the catch-all used when no pattern matches
    fn otherwise(&mut self, metadata: &Metadata);
}

/// Slot in the route table; `None` marks an alias whose target did not exist
type Slot = Option<Arc<RouteDefinition>>;

/// Table of localized route definitions keyed by [`RouteKey`]
///
/// Every localized registration produces one language-qualified entry per
/// language plus a bare entry pointing at the default-language pattern.
///
/// # Examples
///
/// ```
/// use lingo_router::{meta, LanguageSettings, RouteKey, RouteRegistry};
/// use serde_json::json;
///
/// let mut registry = RouteRegistry::new(LanguageSettings::new("tr"));
/// registry
///     .when(
///         [("tr", "/bana-ozel/mesajlarim/:id"), ("en", "/my-account/messages/:id")],
///         meta(json!({ "name": "my_messages", "controller": "MessagesCtrl" })),
///     )
///     .alias("inbox", "my_messages");
///
/// assert_eq!(registry.len(), 6);
/// let bare = registry.get(&RouteKey::bare("my_messages")).unwrap();
/// assert_eq!(bare.url_pattern.as_deref(), Some("/bana-ozel/mesajlarim/:id"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RouteRegistry {
    lookup: HashMap<RouteKey, Slot>,
    otherwise: Option<Metadata>,
    language: LanguageSettings,
}

impl RouteRegistry {
    /// Creates an empty registry bound to a default-language handle
    pub fn new(language: LanguageSettings) -> Self {
        Self {
            lookup: HashMap::new(),
            otherwise: None,
            language,
        }
    }

    pub fn language(&self) -> &LanguageSettings {
        &self.language
    }

    pub fn default_lang(&self) -> String {
        self.language.default_lang()
    }

    /// Changes the default language used by subsequent registrations and lookups
    pub fn set_default_lang(&self, lang: impl Into<String>) {
        self.language.set_default_lang(lang);
    }

    // ========================================================================
    // Registration
    // ========================================================================

    /// Registers a route under one URL or one URL per language
    ///
    /// `params["name"]` is the logical route name; without it the single URL
    /// itself becomes the name. Caller parameters are copied into each entry's
    /// metadata, except `lang` and `routeName`, which are always set by the
    /// registry.
    ///
    /// A localized spec that lacks the current default language still gets a
    /// bare entry, but with no URL pattern. Use [`try_when`](Self::try_when)
    /// to reject such input.
    pub fn when(&mut self, url: impl Into<UrlSpec>, params: Metadata) -> &mut Self {
        let url = url.into();
        let name = logical_name(&url, &params);
        let default_lang = self.default_lang();

        for (key, definition) in build_entries(&name, &url, &params, &default_lang) {
            self.insert(key, definition);
        }

        self
    }

    /// Strict variant of [`when`](Self::when)
    ///
    /// Fails on an empty language map, a language map without the default
    /// language, and on keys that are already registered. Nothing is inserted
    /// when an error is returned.
    pub fn try_when(
        &mut self,
        url: impl Into<UrlSpec>,
        params: Metadata,
    ) -> Result<&mut Self, RegistryError> {
        let url = url.into();
        let name = logical_name(&url, &params);
        let default_lang = self.default_lang();

        if let UrlSpec::Localized(pairs) = &url {
            if pairs.is_empty() {
                return Err(RegistryError::EmptyUrlSpec(name));
            }
            if url.pattern_for(&default_lang).is_none() {
                return Err(RegistryError::MissingDefaultLanguage {
                    name,
                    lang: default_lang,
                });
            }
        }

        let entries = build_entries(&name, &url, &params, &default_lang);
        let mut seen = HashSet::new();
        if let Some((key, _)) = entries
            .iter()
            .find(|(key, _)| self.lookup.contains_key(key) || !seen.insert(key))
        {
            return Err(RegistryError::DuplicateKey(key.clone()));
        }

        for (key, definition) in entries {
            self.insert(key, definition);
        }

        Ok(self)
    }

    /// Makes `alias` resolve to the same definition as `target`
    ///
    /// Resolution is eager: a target that is not registered yet leaves an
    /// undefined entry behind. When `target` is a bare key, the localized
    /// entries that exist for it are aliased under the new name as well.
    pub fn alias(&mut self, alias: impl Into<RouteKey>, target: impl Into<RouteKey>) -> &mut Self {
        let alias = alias.into();
        let target = target.into();
        let slot = self.get(&target);

        if slot.is_none() {
            tracing::warn!(alias = %alias, target = %target, "alias target is not registered");
        }

        if alias.is_bare() && target.is_bare() {
            let localized: Vec<(RouteKey, Slot)> = self
                .lookup
                .iter()
                .filter(|(key, _)| key.name() == target.name())
                .filter_map(|(key, slot)| key.lang().map(|lang| (alias.with_lang(lang), slot.clone())))
                .collect();
            self.lookup.extend(localized);
        }

        tracing::debug!(alias = %alias, target = %target, "registered alias");
        self.lookup.insert(alias, slot);
        self
    }

    /// Strict variant of [`alias`](Self::alias): the target must already exist
    pub fn try_alias(
        &mut self,
        alias: impl Into<RouteKey>,
        target: impl Into<RouteKey>,
    ) -> Result<&mut Self, RegistryError> {
        let alias = alias.into();
        let target = target.into();

        if self.get(&target).is_none() {
            return Err(RegistryError::UnknownAliasTarget { alias, target });
        }

        Ok(self.alias(alias, target))
    }

    /// Sets the catch-all metadata, replacing any previous value
    pub fn otherwise(&mut self, params: Metadata) -> &mut Self {
        self.otherwise = Some(params);
        self
    }

    fn insert(&mut self, key: RouteKey, definition: RouteDefinition) {
        match &definition.url_pattern {
            Some(pattern) => tracing::debug!(route = %key, url = %pattern, "registered route"),
            None => tracing::warn!(route = %key, "registered route without a URL pattern"),
        }
        self.lookup.insert(key, Some(Arc::new(definition)));
    }

    // ========================================================================
    // Dispatcher Integration
    // ========================================================================

    /// Hands every entry and the fallback to the host dispatcher
    ///
    /// Entries are installed in key order. A definition shared by several
    /// keys (an alias and its target) is installed once. Undefined entries and
    /// entries without a pattern cannot be expressed to a dispatcher and are
    /// skipped.
    pub fn install<D: Dispatcher + ?Sized>(&self, dispatcher: &mut D) -> &Self {
        let mut installed = 0usize;
        let mut seen: HashSet<*const RouteDefinition> = HashSet::new();

        for key in self.sorted_keys() {
            match self.lookup.get(key).cloned().flatten() {
                Some(definition) if !seen.insert(Arc::as_ptr(&definition)) => {
                    tracing::debug!(route = %key, "skipping alias of an installed route");
                }
                Some(definition) => match &definition.url_pattern {
                    Some(pattern) => {
                        dispatcher.when(pattern, &definition.metadata);
                        installed += 1;
                    }
                    None => tracing::warn!(route = %key, "skipping route without a URL pattern"),
                },
                None => tracing::warn!(route = %key, "skipping undefined route entry"),
            }
        }

        if let Some(fallback) = &self.otherwise {
            dispatcher.otherwise(fallback);
        }

        tracing::info!(
            routes = installed,
            fallback = self.otherwise.is_some(),
            "installed route table"
        );
        self
    }

    /// Validates the table, then installs it
    pub fn install_checked<D: Dispatcher + ?Sized>(
        &self,
        dispatcher: &mut D,
    ) -> Result<&Self, RegistryError> {
        self.validate()?;
        Ok(self.install(dispatcher))
    }

    /// Reports the first broken entry, in key order
    pub fn validate(&self) -> Result<(), RegistryError> {
        self.sorted_keys()
            .into_iter()
            .try_for_each(|key| match self.lookup.get(key) {
                Some(Some(definition)) if definition.url_pattern.is_none() => {
                    Err(RegistryError::MissingPattern(key.clone()))
                }
                Some(None) => Err(RegistryError::UndefinedEntry(key.clone())),
                _ => Ok(()),
            })
    }

    // ========================================================================
    // Lookup
    // ========================================================================

    /// Definition stored under `key`, if the entry exists and is defined
    ///
    /// A bare key spelled like a qualified one (`"x_en"`) that has no entry of
    /// its own resolves to the matching language-qualified entry.
    pub fn get(&self, key: &RouteKey) -> Option<Arc<RouteDefinition>> {
        self.slot(key).cloned().flatten()
    }

    /// Whether an entry exists under `key`, defined or not
    pub fn contains_key(&self, key: &RouteKey) -> bool {
        self.slot(key).is_some()
    }

    fn slot(&self, key: &RouteKey) -> Option<&Slot> {
        if let Some(slot) = self.lookup.get(key) {
            return Some(slot);
        }
        if !key.is_bare() {
            return None;
        }

        // "<name>_<lang>": try every split, rightmost first
        let name = key.name();
        name.rmatch_indices('_').find_map(|(index, _)| {
            let qualified = RouteKey::qualified(&name[..index], &name[index + 1..]);
            self.lookup.get(&qualified)
        })
    }

    pub fn keys(&self) -> impl Iterator<Item = &RouteKey> {
        self.lookup.keys()
    }

    pub fn len(&self) -> usize {
        self.lookup.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lookup.is_empty()
    }

    pub fn fallback(&self) -> Option<&Metadata> {
        self.otherwise.as_ref()
    }

    /// Resolver answering name → URL queries against this table
    pub fn resolver(&self) -> RouteResolver<'_> {
        RouteResolver::new(self)
    }

    fn sorted_keys(&self) -> Vec<&RouteKey> {
        let mut keys: Vec<&RouteKey> = self.lookup.keys().collect();
        keys.sort();
        keys
    }
}

/// Logical route name: `params["name"]`, else the single URL itself
fn logical_name(url: &UrlSpec, params: &Metadata) -> String {
    match params.get(NAME_FIELD) {
        Some(Value::String(name)) if !name.is_empty() => name.clone(),
        Some(value @ Value::Number(_)) => value_to_string(value),
        _ => match url {
            UrlSpec::Single(url) => url.clone(),
            UrlSpec::Localized(_) => {
                tracing::warn!("localized route registered without a name");
                String::new()
            }
        },
    }
}

/// Entries produced by one registration, bare entry last
fn build_entries(
    name: &str,
    url: &UrlSpec,
    params: &Metadata,
    default_lang: &str,
) -> Vec<(RouteKey, RouteDefinition)> {
    match url {
        UrlSpec::Single(pattern) => vec![(
            RouteKey::bare(name),
            RouteDefinition::new(
                Some(pattern.clone()),
                with_reserved(params, default_lang, name),
            ),
        )],
        UrlSpec::Localized(pairs) => {
            let mut entries: Vec<(RouteKey, RouteDefinition)> = pairs
                .iter()
                .map(|(lang, pattern)| {
                    let key = RouteKey::qualified(name, lang.as_str());
                    let metadata = with_reserved(params, lang, &key.to_string());
                    (key, RouteDefinition::new(Some(pattern.clone()), metadata))
                })
                .collect();

            entries.push((
                RouteKey::bare(name),
                RouteDefinition::new(
                    url.pattern_for(default_lang).map(str::to_string),
                    with_reserved(params, default_lang, name),
                ),
            ));
            entries
        }
    }
}

/// Caller params with `lang` and `routeName` forced to the given values
fn with_reserved(params: &Metadata, lang: &str, route_name: &str) -> Metadata {
    let mut metadata = params.clone();
    metadata.insert(LANG_FIELD.to_string(), Value::from(lang));
    metadata.insert(ROUTE_NAME_FIELD.to_string(), Value::from(route_name));
    metadata
}
