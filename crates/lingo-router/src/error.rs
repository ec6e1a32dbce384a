use crate::RouteKey;

/// Configuration mistakes reported by the strict registration API
///
/// The lenient API (`when`, `alias`, `install`) accepts the same input without
/// complaint and degrades to missing entries instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("route '{name}' has no URL for default language '{lang}'")]
    MissingDefaultLanguage { name: String, lang: String },

    #[error("route '{0}' was registered with an empty language map")]
    EmptyUrlSpec(String),

    #[error("route key '{0}' is already registered")]
    DuplicateKey(RouteKey),

    #[error("cannot alias '{alias}': target '{target}' is not registered")]
    UnknownAliasTarget { alias: RouteKey, target: RouteKey },

    #[error("route key '{0}' points to an undefined entry")]
    UndefinedEntry(RouteKey),

    #[error("route key '{0}' has no URL pattern")]
    MissingPattern(RouteKey),
}
