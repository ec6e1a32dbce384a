//! # Lingo Router
//!
//! Language-aware reverse routing layered on top of a host dispatcher:
//! - One logical route, one URL pattern per language (`/urun/:id`, `/product/:id`)
//! - Name → URL resolution for any language, with fallback to the default language
//! - Aliases sharing the exact same definition as their target
//! - Language-switch links (alternates) for static and dynamic routes
//! - Active-route checks for navigation menus
//!
//! The dispatcher that matches incoming URLs stays with the host application.
//! [`RouteRegistry::install`] hands it every pattern through the
//! [`Dispatcher`] trait; this crate never parses request paths.
//!
//! ## Failure Model
//!
//! Lookups never fail loudly. Unknown names, unknown languages and broken
//! registrations come back as `None`, which suits template helpers. The
//! `try_*` registration methods and [`RouteRegistry::validate`] report the
//! same mistakes as [`RegistryError`] for start-up checks.
//!
//! ## Example
//!
//! ```
//! use lingo_router::{meta, LanguageSettings, RouteRegistry};
//! use serde_json::json;
//!
//! let mut registry = RouteRegistry::new(LanguageSettings::new("tr"));
//! registry.when(
//!     [("tr", "/bana-ozel/mesajlarim/detay/:id"), ("en", "/my-account/messages/detail/:id")],
//!     meta(json!({ "name": "my_messages", "controller": "MessageDetailCtrl" })),
//! );
//!
//! let resolver = registry.resolver();
//! let args = meta(json!({ "lang": "en", "id": 7 }));
//!
//! assert_eq!(
//!     resolver.route_path("my_messages", Some(&args)),
//!     Some("/my-account/messages/detail/7".to_string())
//! );
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

pub mod config;
mod definition;
mod error;
mod key;
mod language;
mod navigation;
mod registry;
mod resolver;

pub use config::RouterConfig;
pub use definition::{
    meta, CurrentRoute, Metadata, RouteArgs, RouteDefinition, UrlSpec, LANG_FIELD, NAME_FIELD,
    ROUTE_NAME_FIELD,
};
pub use error::RegistryError;
pub use key::RouteKey;
pub use language::{LanguageSettings, DEFAULT_LANG};
pub use navigation::{is_active, Navigator};
pub use registry::{Dispatcher, RouteRegistry};
pub use resolver::{replace_url_params, Alternate, RouteResolver};
