/// Tagged route key: a logical route name, optionally qualified by a language
///
/// Keys serialize deterministically as `"<name>"` (bare) or `"<name>_<lang>"`
/// (language-qualified). The registry stores the tagged form, so a route whose
/// name happens to be `"home_tr"` never collides with route `"home"` in `"tr"`.
///
/// # Examples
///
/// ```
/// use lingo_router::RouteKey;
///
/// let bare = RouteKey::bare("home");
/// let qualified = RouteKey::qualified("home", "tr");
///
/// assert_eq!(bare.to_string(), "home");
/// assert_eq!(qualified.to_string(), "home_tr");
/// assert_ne!(qualified, RouteKey::bare("home_tr"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RouteKey {
    name: String,
    lang: Option<String>,
}

impl RouteKey {
    /// Key for the default-language entry of a route
    pub fn bare(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lang: None,
        }
    }

    /// Key for one localized entry of a route
    pub fn qualified(name: impl Into<String>, lang: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lang: Some(lang.into()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn lang(&self) -> Option<&str> {
        self.lang.as_deref()
    }

    pub fn is_bare(&self) -> bool {
        self.lang.is_none()
    }

    /// Same route name, qualified by `lang`
    pub fn with_lang(&self, lang: impl Into<String>) -> Self {
        Self::qualified(self.name.clone(), lang)
    }
}

impl std::fmt::Display for RouteKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.lang {
            Some(lang) => write!(f, "{}_{}", self.name, lang),
            None => f.write_str(&self.name),
        }
    }
}

impl From<&str> for RouteKey {
    fn from(name: &str) -> Self {
        Self::bare(name)
    }
}

impl From<String> for RouteKey {
    fn from(name: String) -> Self {
        Self::bare(name)
    }
}

impl From<&RouteKey> for RouteKey {
    fn from(key: &RouteKey) -> Self {
        key.clone()
    }
}
