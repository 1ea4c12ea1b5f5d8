//! The immutable route table.
//!
//! A [`RouteTable`] is an ordered list of [`RouteEntry`] records built once at
//! application start. Lookups are exact: the navigation target is normalised
//! and compared with each entry's path. When nothing matches, the empty-path
//! fallback entry (if any) is used.
//!
//! ```text
//! "customers" ──► Deferred(CustomersModule)
//! "orders"    ──► Deferred(OrdersModule)
//! ""          ──► Component(PlaceholderPage)   ◄── also serves unknown paths
//! ```
//!
//! # Examples
//!
//! ```ignore
//! let table = RouteTable::builder()
//!     .route(RouteEntry::lazy("orders", "OrdersModule", orders::load))
//!     .route(RouteEntry::component("", PlaceholderPage::new))
//!     .build()?;
//!
//! assert!(matches!(table.resolve("/orders")?, Resolution::Deferred { .. }));
//! ```

use crate::error::{ConfigError, NavigationError};
use crate::matching::{first_pattern_segment, normalize_path};
use crate::route::{ComponentFactory, DeferredLoader, RouteEntry, RouteLoader};
use crate::{debug_log, trace_log};
use std::collections::HashSet;
use std::sync::Arc;

// ============================================================================
// Resolution
// ============================================================================

/// Handler selected for a navigation target.
#[derive(Debug, Clone)]
pub enum Resolution<'a> {
    /// The unit can be rendered right away.
    Eager {
        entry: &'a Arc<RouteEntry>,
        factory: &'a ComponentFactory,
    },
    /// The unit's module must be loaded first.
    Deferred {
        entry: &'a Arc<RouteEntry>,
        loader: &'a DeferredLoader,
    },
}

impl<'a> Resolution<'a> {
    /// The entry that was matched (or the fallback).
    pub fn entry(&self) -> &'a Arc<RouteEntry> {
        match self {
            Resolution::Eager { entry, .. } | Resolution::Deferred { entry, .. } => entry,
        }
    }

    pub fn is_deferred(&self) -> bool {
        matches!(self, Resolution::Deferred { .. })
    }

    /// The deferred loader, if this resolution requires one.
    pub fn loader(&self) -> Option<&'a DeferredLoader> {
        match self {
            Resolution::Deferred { loader, .. } => Some(loader),
            Resolution::Eager { .. } => None,
        }
    }
}

// ============================================================================
// RouteTable
// ============================================================================

/// Ordered, immutable list of route entries.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    entries: Vec<Arc<RouteEntry>>,
    fallback: Option<usize>,
}

impl RouteTable {
    /// Start building a table.
    pub fn builder() -> RouteTableBuilder {
        RouteTableBuilder::new()
    }

    /// Resolve a navigation target to its handler.
    ///
    /// Exact match on the normalised path first, then the fallback entry.
    pub fn resolve(&self, path: &str) -> Result<Resolution<'_>, NavigationError> {
        let target = normalize_path(path);

        let entry = match self.entries.iter().find(|e| e.path == target) {
            Some(entry) => entry,
            None => {
                let Some(index) = self.fallback else {
                    debug_log!("No route for '{}' and no fallback", target);
                    return Err(NavigationError::RouteNotFound { path: target });
                };
                trace_log!("No exact route for '{}', using fallback", target);
                &self.entries[index]
            }
        };

        Ok(match &entry.loader {
            RouteLoader::Component(factory) => Resolution::Eager { entry, factory },
            RouteLoader::Deferred(loader) => Resolution::Deferred { entry, loader },
        })
    }

    /// Whether `path` matches a registered entry exactly (without fallback).
    pub fn contains(&self, path: &str) -> bool {
        let target = normalize_path(path);
        self.entries.iter().any(|e| e.path == target)
    }

    /// Find an entry by route name.
    pub fn entry_by_name(&self, name: &str) -> Option<&Arc<RouteEntry>> {
        self.entries
            .iter()
            .find(|e| e.name.as_deref() == Some(name))
    }

    /// The empty-path entry, if registered.
    pub fn fallback(&self) -> Option<&Arc<RouteEntry>> {
        self.fallback.map(|i| &self.entries[i])
    }

    /// All entries in registration order.
    pub fn entries(&self) -> &[Arc<RouteEntry>] {
        &self.entries
    }

    /// Registered paths in registration order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.path.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ============================================================================
// RouteTableBuilder
// ============================================================================

/// Collects entries and validates them into a [`RouteTable`].
#[derive(Debug, Default)]
pub struct RouteTableBuilder {
    entries: Vec<RouteEntry>,
}

impl RouteTableBuilder {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append an entry.
    pub fn route(mut self, entry: RouteEntry) -> Self {
        self.entries.push(entry);
        self
    }

    /// Append several entries.
    pub fn routes(mut self, entries: impl IntoIterator<Item = RouteEntry>) -> Self {
        self.entries.extend(entries);
        self
    }

    /// Validate and freeze the table.
    ///
    /// Fails on a second empty-path entry, a repeated path or name, or a
    /// path containing a `:param` or `*` segment.
    pub fn build(self) -> Result<RouteTable, ConfigError> {
        let mut paths = HashSet::new();
        let mut names = HashSet::new();
        let mut fallback = None;

        for (index, entry) in self.entries.iter().enumerate() {
            if let Some(segment) = first_pattern_segment(&entry.path) {
                return Err(ConfigError::UnsupportedPattern {
                    path: entry.path.clone(),
                    segment,
                });
            }

            if entry.is_fallback() {
                if fallback.is_some() {
                    return Err(ConfigError::DuplicateFallback);
                }
                fallback = Some(index);
            } else if !paths.insert(entry.path.as_str()) {
                return Err(ConfigError::DuplicatePath {
                    path: entry.path.clone(),
                });
            }

            if let Some(name) = &entry.name {
                if !names.insert(name.as_str()) {
                    return Err(ConfigError::DuplicateName { name: name.clone() });
                }
            }
        }

        debug_log!(
            "Route table built: {} entries, fallback: {}",
            self.entries.len(),
            fallback.is_some()
        );

        Ok(RouteTable {
            entries: self.entries.into_iter().map(Arc::new).collect(),
            fallback,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::module::FeatureModule;
    use gpui::{div, Context, IntoElement, Render, Window};

    struct Home;

    impl Render for Home {
        fn render(&mut self, _window: &mut Window, _cx: &mut Context<'_, Self>) -> impl IntoElement {
            div()
        }
    }

    fn lazy(path: &str) -> RouteEntry {
        RouteEntry::lazy(path, "Page", || async { Ok(FeatureModule::new("m")) })
    }

    #[test]
    fn test_exact_match_beats_fallback() {
        let table = RouteTable::builder()
            .route(lazy("reports"))
            .route(RouteEntry::component("", || Home))
            .build()
            .unwrap();

        let resolution = table.resolve("/reports").unwrap();
        assert!(resolution.is_deferred());
        assert_eq!(resolution.entry().path, "reports");
    }

    #[test]
    fn test_unknown_path_uses_fallback() {
        let table = RouteTable::builder()
            .route(lazy("reports"))
            .route(RouteEntry::component("", || Home))
            .build()
            .unwrap();

        let resolution = table.resolve("nowhere").unwrap();
        assert!(!resolution.is_deferred());
        assert!(resolution.entry().is_fallback());
        assert!(!table.contains("nowhere"));
    }

    #[test]
    fn test_unknown_path_without_fallback() {
        let table = RouteTable::builder().route(lazy("reports")).build().unwrap();
        let err = table.resolve("nowhere").unwrap_err();
        assert_eq!(
            err,
            NavigationError::RouteNotFound {
                path: "nowhere".to_string()
            }
        );
    }

    #[test]
    fn test_prefix_is_not_a_match() {
        let table = RouteTable::builder().route(lazy("reports")).build().unwrap();
        assert!(table.resolve("reports/2024").is_err());
    }

    #[test]
    fn test_duplicate_fallback_rejected() {
        let err = RouteTable::builder()
            .route(RouteEntry::component("", || Home))
            .route(RouteEntry::component("/", || Home))
            .build()
            .unwrap_err();
        assert_eq!(err, ConfigError::DuplicateFallback);
    }

    #[test]
    fn test_duplicate_path_rejected() {
        let err = RouteTable::builder()
            .route(lazy("reports"))
            .route(lazy("/reports/"))
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::DuplicatePath {
                path: "reports".to_string()
            }
        );
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let err = RouteTable::builder()
            .route(lazy("a").name("page"))
            .route(lazy("b").name("page"))
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::DuplicateName {
                name: "page".to_string()
            }
        );
    }

    #[test]
    fn test_param_path_rejected() {
        let err = RouteTable::builder()
            .route(lazy("reports/:id"))
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedPattern { .. }));
    }

    #[test]
    fn test_entry_by_name_and_order() {
        let table = RouteTable::builder()
            .route(lazy("a").name("first"))
            .route(lazy("b"))
            .build()
            .unwrap();
        assert_eq!(table.entry_by_name("first").unwrap().path, "a");
        assert!(table.entry_by_name("second").is_none());
        assert_eq!(table.paths().collect::<Vec<_>>(), vec!["a", "b"]);
        assert!(table.fallback().is_none());
        assert_eq!(table.len(), 2);
    }
}
