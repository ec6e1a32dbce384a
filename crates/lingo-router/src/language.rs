use std::sync::{Arc, PoisonError, RwLock};

/// Language used when none is configured
pub const DEFAULT_LANG: &str = "en";

/// Shared handle to the configured default language
///
/// A registry, its resolvers and navigators all hold clones of one handle, so a
/// language switch made through any of them is seen by the others on their next
/// read. Registries built from separate handles never affect each other.
///
/// # Examples
///
/// ```
/// use lingo_router::LanguageSettings;
///
/// let settings = LanguageSettings::new("tr");
/// let shared = settings.clone();
///
/// shared.set_default_lang("en");
/// assert_eq!(settings.default_lang(), "en");
/// ```
#[derive(Debug, Clone)]
pub struct LanguageSettings {
    default_lang: Arc<RwLock<String>>,
}

impl LanguageSettings {
    pub fn new(default_lang: impl Into<String>) -> Self {
        Self {
            default_lang: Arc::new(RwLock::new(default_lang.into())),
        }
    }

    /// Current default language (latest value written through any clone)
    pub fn default_lang(&self) -> String {
        self.default_lang
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replaces the default language; values are not validated
    pub fn set_default_lang(&self, lang: impl Into<String>) {
        let lang = lang.into();
        tracing::debug!(lang = %lang, "default language changed");
        *self
            .default_lang
            .write()
            .unwrap_or_else(PoisonError::into_inner) = lang;
    }

    /// Whether two handles share the same underlying setting
    pub fn shares_with(&self, other: &LanguageSettings) -> bool {
        Arc::ptr_eq(&self.default_lang, &other.default_lang)
    }
}

impl Default for LanguageSettings {
    fn default() -> Self {
        Self::new(DEFAULT_LANG)
    }
}
