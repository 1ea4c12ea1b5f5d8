//! Route entries and their loaders.
//!
//! A [`RouteEntry`] binds one normalised path to a [`RouteLoader`]:
//!
//! - [`RouteLoader::Component`]: the unit is linked into the binary and
//!   rendered as soon as the path is navigated to.
//! - [`RouteLoader::Deferred`]: the unit lives in a [`FeatureModule`] that is
//!   produced on demand by an async factory. After the module arrives, the
//!   loader's *export* name selects which unit to render.
//!
//! # Examples
//!
//! ```ignore
//! use gpui_lazy_router::{FeatureModule, RouteEntry};
//!
//! let home = RouteEntry::component("", HomePage::new);
//! let reports = RouteEntry::lazy("reports", "ReportsModule", || async {
//!     Ok(FeatureModule::new("reports").export("ReportsModule", ReportsPage::new))
//! });
//! ```

use crate::error::LoadError;
use crate::matching::normalize_path;
use crate::module::FeatureModule;
use futures::future::BoxFuture;
use futures::FutureExt;
use gpui::{AnyView, App, AppContext, Render};
use std::fmt;
use std::future::Future;
use std::sync::Arc;

// ============================================================================
// ComponentFactory
// ============================================================================

/// Shared constructor for a renderable unit.
///
/// Each call to [`build`](Self::build) creates a fresh entity. Cloning the
/// factory shares the underlying constructor.
#[derive(Clone)]
pub struct ComponentFactory {
    type_name: &'static str,
    build: Arc<dyn Fn(&mut App) -> AnyView + Send + Sync>,
}

impl ComponentFactory {
    /// Wrap a zero-argument constructor for a [`Render`] type.
    pub fn new<T, F>(ctor: F) -> Self
    where
        T: Render,
        F: Fn() -> T + Send + Sync + 'static,
    {
        Self {
            type_name: std::any::type_name::<T>(),
            build: Arc::new(move |cx: &mut App| AnyView::from(cx.new(|_| ctor()))),
        }
    }

    /// Instantiate the unit as a new view entity.
    pub fn build(&self, cx: &mut App) -> AnyView {
        (self.build)(cx)
    }

    /// Rust type name of the unit this factory builds.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl fmt::Debug for ComponentFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ComponentFactory")
            .field(&self.type_name)
            .finish()
    }
}

// ============================================================================
// DeferredLoader
// ============================================================================

/// Future returned by a deferred loader.
pub type LoadFuture = BoxFuture<'static, Result<FeatureModule, LoadError>>;

/// Async factory for a feature module plus the export to render from it.
///
/// Clones share the same factory, so two clones compare equal under
/// [`same_as`](Self::same_as).
#[derive(Clone)]
pub struct DeferredLoader {
    fetch: Arc<dyn Fn() -> LoadFuture + Send + Sync>,
    export: String,
}

impl DeferredLoader {
    /// Create a loader from an async factory and the name of the unit to
    /// select from the module it returns.
    pub fn new<F, Fut>(export: impl Into<String>, fetch: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<FeatureModule, LoadError>> + Send + 'static,
    {
        Self {
            fetch: Arc::new(move || fetch().boxed()),
            export: export.into(),
        }
    }

    /// Start fetching the module. Every call invokes the factory again;
    /// the router caches results so this runs once per path.
    pub fn load(&self) -> LoadFuture {
        (self.fetch)()
    }

    /// Name of the unit selected from the loaded module.
    pub fn export(&self) -> &str {
        &self.export
    }

    /// Whether both loaders share the same factory and export.
    pub fn same_as(&self, other: &DeferredLoader) -> bool {
        Arc::ptr_eq(&self.fetch, &other.fetch) && self.export == other.export
    }
}

impl fmt::Debug for DeferredLoader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeferredLoader")
            .field("export", &self.export)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// RouteLoader / RouteEntry
// ============================================================================

/// How a route produces its unit.
#[derive(Clone, Debug)]
pub enum RouteLoader {
    /// Eagerly bound unit
    Component(ComponentFactory),
    /// Unit inside a feature module fetched on first navigation
    Deferred(DeferredLoader),
}

/// One binding in the route table.
#[derive(Clone, Debug)]
pub struct RouteEntry {
    /// Normalised path; empty for the fallback route
    pub path: String,
    /// Optional route name
    pub name: Option<String>,
    /// How the unit is produced
    pub loader: RouteLoader,
}

impl RouteEntry {
    /// Create an entry with an explicit loader.
    pub fn new(path: impl AsRef<str>, loader: RouteLoader) -> Self {
        Self {
            path: normalize_path(path.as_ref()),
            name: None,
            loader,
        }
    }

    /// Eagerly bind a component to `path`.
    pub fn component<T, F>(path: impl AsRef<str>, ctor: F) -> Self
    where
        T: Render,
        F: Fn() -> T + Send + Sync + 'static,
    {
        Self::new(path, RouteLoader::Component(ComponentFactory::new(ctor)))
    }

    /// Bind `path` to a feature module fetched on first navigation, rendering
    /// the unit the module exposes as `export`.
    pub fn lazy<F, Fut>(path: impl AsRef<str>, export: impl Into<String>, fetch: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<FeatureModule, LoadError>> + Send + 'static,
    {
        Self::new(path, RouteLoader::Deferred(DeferredLoader::new(export, fetch)))
    }

    /// Set the route name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Whether this is the empty-path fallback route.
    pub fn is_fallback(&self) -> bool {
        self.path.is_empty()
    }

    /// Whether navigating here requires a deferred load.
    pub fn is_deferred(&self) -> bool {
        matches!(self.loader, RouteLoader::Deferred(_))
    }

    /// Export selected from the loaded module, for deferred entries.
    pub fn export(&self) -> Option<&str> {
        match &self.loader {
            RouteLoader::Deferred(loader) => Some(loader.export()),
            RouteLoader::Component(_) => None,
        }
    }

    /// Key identifying the rendered unit for view caching.
    pub(crate) fn view_key(&self) -> String {
        match &self.loader {
            RouteLoader::Component(factory) => format!("{}#{}", self.path, factory.type_name()),
            RouteLoader::Deferred(loader) => format!("{}#{}", self.path, loader.export()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gpui::{div, Context, IntoElement, Window};

    struct Blank;

    impl Render for Blank {
        fn render(&mut self, _window: &mut Window, _cx: &mut Context<'_, Self>) -> impl IntoElement {
            div()
        }
    }

    #[test]
    fn test_component_entry() {
        let entry = RouteEntry::component("/", || Blank);
        assert!(entry.is_fallback());
        assert!(!entry.is_deferred());
        match &entry.loader {
            RouteLoader::Component(factory) => assert!(factory.type_name().ends_with("Blank")),
            RouteLoader::Deferred(_) => panic!("expected component loader"),
        }
    }

    #[test]
    fn test_lazy_entry_normalises_path() {
        let entry = RouteEntry::lazy("/reports/", "ReportsModule", || async {
            Ok(FeatureModule::new("reports"))
        })
        .name("reports");
        assert_eq!(entry.path, "reports");
        assert_eq!(entry.name.as_deref(), Some("reports"));
        assert!(entry.is_deferred());
        assert_eq!(entry.view_key(), "reports#ReportsModule");
    }

    #[test]
    fn test_loader_clones_are_same() {
        let loader = DeferredLoader::new("A", || async { Ok(FeatureModule::new("a")) });
        let other = DeferredLoader::new("A", || async { Ok(FeatureModule::new("a")) });
        assert!(loader.same_as(&loader.clone()));
        assert!(!loader.same_as(&other));
    }

    #[test]
    fn test_loader_runs_factory() {
        let loader = DeferredLoader::new("A", || async {
            Ok(FeatureModule::new("a").export("A", || Blank))
        });
        let module = pollster::block_on(loader.load()).unwrap();
        assert_eq!(module.name(), "a");
        assert!(module.unit(loader.export()).is_some());
    }

    #[test]
    fn test_loader_surfaces_failure() {
        let loader = DeferredLoader::new("A", || async { Err(LoadError::new("offline")) });
        let err = pollster::block_on(loader.load()).unwrap_err();
        assert_eq!(err.message(), "offline");
    }
}
