// File: src/config.rs
// Purpose: Route table configuration parsing from TOML

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::language::DEFAULT_LANG;
use crate::{Alternate, LanguageSettings, Metadata, RouteRegistry, RouteResolver, UrlSpec};

/// Route table configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RouterConfig {
    #[serde(default)]
    pub i18n: I18nConfig,

    #[serde(default)]
    pub routes: Vec<RouteConfig>,

    #[serde(default)]
    pub aliases: Vec<AliasConfig>,

    /// Catch-all metadata handed to the dispatcher
    #[serde(default)]
    pub otherwise: Option<Metadata>,
}

/// Language settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct I18nConfig {
    #[serde(default = "default_lang")]
    pub default_lang: String,

    /// Languages offered as alternates (language-switch links)
    #[serde(default)]
    pub languages: Vec<String>,

    /// Reject broken registrations instead of storing them
    #[serde(default = "default_false")]
    pub strict: bool,
}

/// One `[[routes]]` entry; every key besides `url` becomes route metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteConfig {
    pub url: UrlConfig,

    #[serde(flatten)]
    pub params: Metadata,
}

/// `url = "/about"` or `url = { tr = "/hakkimizda", en = "/about" }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UrlConfig {
    Single(String),
    Localized(BTreeMap<String, String>),
}

/// One `[[aliases]]` entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasConfig {
    pub from: String,
    pub to: String,
}

fn default_lang() -> String {
    DEFAULT_LANG.to_string()
}

fn default_false() -> bool {
    false
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            default_lang: default_lang(),
            languages: Vec::new(),
            strict: false,
        }
    }
}

impl From<UrlConfig> for UrlSpec {
    fn from(url: UrlConfig) -> Self {
        match url {
            UrlConfig::Single(url) => UrlSpec::Single(url),
            UrlConfig::Localized(map) => UrlSpec::from(map),
        }
    }
}

impl RouterConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // Missing file means an empty table with default settings
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read router config: {:?}", path))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse router config: {:?}", path))
    }

    /// Parse configuration from TOML text (empty text yields defaults)
    pub fn from_toml_str(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: RouterConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// Builds a registry from the configured routes, aliases and fallback
    ///
    /// In strict mode the first broken registration aborts the build.
    pub fn build_registry(&self) -> Result<RouteRegistry> {
        let mut registry = RouteRegistry::new(LanguageSettings::new(&self.i18n.default_lang));

        for (index, route) in self.routes.iter().enumerate() {
            let url = UrlSpec::from(route.url.clone());
            if self.i18n.strict {
                registry
                    .try_when(url, route.params.clone())
                    .with_context(|| format!("Invalid route #{}", index + 1))?;
            } else {
                registry.when(url, route.params.clone());
            }
        }

        for alias in &self.aliases {
            if self.i18n.strict {
                registry
                    .try_alias(alias.from.as_str(), alias.to.as_str())
                    .with_context(|| format!("Invalid alias '{}'", alias.from))?;
            } else {
                registry.alias(alias.from.as_str(), alias.to.as_str());
            }
        }

        if let Some(otherwise) = &self.otherwise {
            registry.otherwise(otherwise.clone());
        }

        if self.i18n.strict {
            registry.validate()?;
        }

        tracing::info!(
            routes = self.routes.len(),
            aliases = self.aliases.len(),
            default_lang = %self.i18n.default_lang,
            "built route table from config"
        );
        Ok(registry)
    }

    /// Language-switch links for `key` across the configured languages
    pub fn alternates(&self, resolver: &RouteResolver<'_>, key: &str) -> Vec<Alternate> {
        resolver.get_alternates_from_static_routes(key, &self.i18n.languages)
    }
}
