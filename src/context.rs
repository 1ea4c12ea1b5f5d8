//! Router context integration for GPUI.
//!
//! This module hosts the route table inside a GPUI application:
//!
//! - [`GlobalRouter`]: the routing object stored as a GPUI `Global`. It owns
//!   the immutable [`RouteTable`], the navigation history, the module cache
//!   and the views created for rendered units. Deferred loads are spawned on
//!   the app's foreground executor and report back into the global.
//!
//! - [`Navigator`]: static helpers (`Navigator::push`, `Navigator::pop`, …)
//!   that read/write the `GlobalRouter` through `cx`.
//!
//! # Deferred navigation
//!
//! ```text
//! push("customers")
//!   ├─ cached module? ──► Ready (select export)
//!   └─ otherwise     ──► Loading ── spawn loader ──► finish_load
//!                                                    ├─ Ok  → cache, Ready
//!                                                    └─ Err → Failed
//! ```
//!
//! A load that completes after the user navigated elsewhere still fills the
//! cache, but does not change what is on screen.
//!
//! # Initialization
//!
//! ```ignore
//! use gpui_lazy_router::{init_router, RouteEntry, RouteTable};
//!
//! let table = RouteTable::builder()
//!     .route(RouteEntry::component("", HomePage::new))
//!     .build()?;
//! init_router(cx, table);
//! ```

#[cfg(feature = "cache")]
use crate::cache::{CacheStats, ModuleCache};
use crate::error::{ErrorHandlers, LoadError, NavigationError, NavigationResult};
use crate::module::FeatureModule;
use crate::route::{DeferredLoader, RouteEntry};
use crate::state::{ActiveRoute, RouteChangeEvent, RouterState};
use crate::table::{Resolution, RouteTable};
use crate::{debug_log, error_log, info_log, trace_log, warn_log};
use gpui::{AnyView, App, BorrowAppContext, Global};
use std::borrow::BorrowMut;
use std::collections::HashMap;
use std::sync::Arc;

// ============================================================================
// GlobalRouter
// ============================================================================

/// Global router state accessible from any component.
#[derive(Clone)]
pub struct GlobalRouter {
    table: Arc<RouteTable>,
    state: RouterState,
    #[cfg(feature = "cache")]
    modules: ModuleCache,
    /// Views created for rendered units, keyed by route path and unit.
    /// Kept across navigations so a unit is instantiated once per route.
    view_cache: HashMap<String, AnyView>,
    error_handlers: ErrorHandlers,
}

impl GlobalRouter {
    /// Create a router over `table`, positioned at the empty path.
    ///
    /// Nothing is activated until the router is installed with
    /// [`install_router`] (or [`init_router`]).
    pub fn new(table: RouteTable) -> Self {
        Self {
            table: Arc::new(table),
            state: RouterState::new(),
            #[cfg(feature = "cache")]
            modules: ModuleCache::new(),
            view_cache: HashMap::new(),
            error_handlers: ErrorHandlers::new(),
        }
    }

    /// Use a module cache with a custom capacity.
    #[cfg(feature = "cache")]
    pub fn with_module_cache(mut self, cache: ModuleCache) -> Self {
        self.modules = cache;
        self
    }

    /// Render navigation failures with custom handlers.
    pub fn with_error_handlers(mut self, handlers: ErrorHandlers) -> Self {
        self.error_handlers = handlers;
        self
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    /// Navigate to a path.
    pub fn push(&mut self, path: &str, cx: &App) -> NavigationResult {
        let event = self.state.push(path);
        self.activate(event, cx)
    }

    /// Replace the current path.
    pub fn replace(&mut self, path: &str, cx: &App) -> NavigationResult {
        let event = self.state.replace(path);
        self.activate(event, cx)
    }

    /// Go back in history.
    pub fn back(&mut self, cx: &App) -> Option<NavigationResult> {
        let event = self.state.back()?;
        Some(self.activate(event, cx))
    }

    /// Go forward in history.
    pub fn forward(&mut self, cx: &App) -> Option<NavigationResult> {
        let event = self.state.forward()?;
        Some(self.activate(event, cx))
    }

    /// Re-activate the current path without touching history.
    pub fn reload(&mut self, cx: &App) -> NavigationResult {
        let path = self.state.current_path().to_string();
        let event = self.state.replace(&path);
        self.activate(event, cx)
    }

    /// Resolve the new current path and update the active route.
    fn activate(&mut self, event: RouteChangeEvent, cx: &App) -> NavigationResult {
        let nav_id = self.state.start_navigation();
        info_log!(
            "Navigation {:?} #{}: '{}' → '{}'",
            event.direction,
            nav_id,
            event.from.as_deref().unwrap_or(""),
            event.to
        );

        let table = Arc::clone(&self.table);
        let resolution = match table.resolve(&event.to) {
            Ok(resolution) => resolution,
            Err(err) => {
                warn_log!("{}", err);
                self.state.set_active(ActiveRoute::NotFound {
                    path: event.to.clone(),
                });
                return NavigationResult::NotFound { path: event.to };
            }
        };

        let entry = Arc::clone(resolution.entry());
        if entry.path != event.to {
            debug_log!("'{}' served by fallback route", event.to);
        }

        match resolution {
            Resolution::Eager { factory, .. } => {
                self.state.set_active(ActiveRoute::Ready {
                    entry,
                    unit: factory.clone(),
                });
                NavigationResult::Success { path: event.to }
            }
            Resolution::Deferred { loader, .. } => {
                self.start_deferred(entry, loader.clone(), nav_id, cx)
            }
        }
    }

    /// Serve a deferred entry from the cache, or start its load.
    fn start_deferred(
        &mut self,
        entry: Arc<RouteEntry>,
        loader: DeferredLoader,
        nav_id: usize,
        cx: &App,
    ) -> NavigationResult {
        #[cfg(feature = "cache")]
        if let Some(module) = self.modules.get(&entry.path) {
            return self.select_export(entry, &module);
        }

        let path = entry.path.clone();
        self.state.set_active(ActiveRoute::Loading { entry });

        #[cfg(feature = "cache")]
        if !self.modules.begin_load(&path) {
            debug_log!("Load of '{}' already in flight", path);
            return NavigationResult::Loading { path };
        }

        debug_log!(
            "Deferred load of '{}' (export '{}') started",
            path,
            loader.export()
        );

        let load = loader.load();
        let async_cx = cx.to_async();
        let target = path.clone();
        cx.foreground_executor()
            .spawn(async move {
                let result = load.await;
                let _ = async_cx.update(|cx| {
                    cx.update_global::<GlobalRouter, _>(|router, _cx| {
                        router.finish_load(&target, nav_id, result);
                    });
                    cx.refresh_windows();
                });
            })
            .detach();

        NavigationResult::Loading { path }
    }

    /// Record the outcome of a deferred load.
    ///
    /// The module is cached regardless of where the user is now. The active
    /// route only changes if it is still waiting for this path.
    pub fn finish_load(
        &mut self,
        path: &str,
        nav_id: usize,
        result: Result<FeatureModule, LoadError>,
    ) -> Option<NavigationResult> {
        if !self.state.is_navigation_current(nav_id) {
            debug_log!(
                "Load of '{}' from navigation #{} completed after being superseded",
                path,
                nav_id
            );
        }

        let waiting = match self.state.active() {
            ActiveRoute::Loading { entry } if entry.path == path => Some(Arc::clone(entry)),
            _ => None,
        };

        match result {
            Ok(module) => {
                info_log!("Loaded module '{}' for '{}'", module.name(), path);
                #[cfg(feature = "cache")]
                let module = self.modules.insert(path, module);
                #[cfg(feature = "cache")]
                self.drop_uncached_views();
                #[cfg(not(feature = "cache"))]
                let module = Arc::new(module);

                waiting.map(|entry| self.select_export(entry, &module))
            }
            Err(err) => {
                error_log!("Deferred load of '{}' failed: {}", path, err);
                #[cfg(feature = "cache")]
                self.modules.fail_load(path);

                waiting.map(|entry| {
                    let error = NavigationError::load_failed(path, &err);
                    self.state.set_active(ActiveRoute::Failed {
                        entry,
                        error: error.clone(),
                    });
                    NavigationResult::Error(error)
                })
            }
        }
    }

    /// Pick the entry's export out of a loaded module.
    fn select_export(&mut self, entry: Arc<RouteEntry>, module: &FeatureModule) -> NavigationResult {
        let export = entry.export().unwrap_or_default();
        match module.unit(export) {
            Some(unit) => {
                trace_log!("Selected '{}' from module '{}'", export, module.name());
                let path = entry.path.clone();
                self.state.set_active(ActiveRoute::Ready {
                    entry,
                    unit: unit.clone(),
                });
                NavigationResult::Success { path }
            }
            None => {
                let error = NavigationError::ExportMissing {
                    module: module.name().to_string(),
                    export: export.to_string(),
                };
                warn_log!("{}", error);
                self.state.set_active(ActiveRoute::Failed {
                    entry,
                    error: error.clone(),
                });
                NavigationResult::Error(error)
            }
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Get current path
    pub fn current_path(&self) -> &str {
        self.state.current_path()
    }

    /// What the router view should render now.
    pub fn active(&self) -> &ActiveRoute {
        self.state.active()
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    pub fn state(&self) -> &RouterState {
        &self.state
    }

    pub fn can_go_back(&self) -> bool {
        self.state.can_go_back()
    }

    pub fn can_go_forward(&self) -> bool {
        self.state.can_go_forward()
    }

    pub fn error_handlers(&self) -> &ErrorHandlers {
        &self.error_handlers
    }

    #[cfg(feature = "cache")]
    pub fn module_cache(&self) -> &ModuleCache {
        &self.modules
    }

    #[cfg(feature = "cache")]
    pub fn cache_stats(&self) -> &CacheStats {
        self.modules.stats()
    }

    /// Drop every cached module, along with the views built from them.
    #[cfg(feature = "cache")]
    pub fn clear_modules(&mut self) {
        self.modules.clear();
        self.drop_uncached_views();
    }

    /// Forget views of deferred routes whose module is no longer cached.
    #[cfg(feature = "cache")]
    fn drop_uncached_views(&mut self) {
        for entry in self.table.entries() {
            let evicted = entry.is_deferred() && !self.modules.contains(&entry.path);
            if evicted && self.view_cache.remove(&entry.view_key()).is_some() {
                debug_log!("Dropped view for '{}': module left the cache", entry.path);
            }
        }
    }

    /// Look up the view created for a unit key.
    pub fn cached_view(&self, key: &str) -> Option<&AnyView> {
        self.view_cache.get(key)
    }

    /// Remember the view created for a unit key.
    pub fn cache_view(&mut self, key: String, view: AnyView) {
        trace_log!("Caching view '{}'", key);
        self.view_cache.insert(key, view);
    }
}

impl Global for GlobalRouter {}

// ============================================================================
// init_router
// ============================================================================

/// Install a router over `table` and activate the initial (empty) path.
pub fn init_router(cx: &mut App, table: RouteTable) -> NavigationResult {
    install_router(cx, GlobalRouter::new(table))
}

/// Install a configured router and activate its current path.
pub fn install_router(cx: &mut App, router: GlobalRouter) -> NavigationResult {
    info_log!("Installing router with {} routes", router.table().len());
    cx.set_global(router);
    cx.update_global::<GlobalRouter, _>(|router, cx| router.reload(cx))
}

// ============================================================================
// Navigator
// ============================================================================

/// Static navigation helpers over the global router.
///
/// ```ignore
/// Navigator::push(cx, "customers");
/// Navigator::pop(cx);
/// ```
pub struct Navigator;

impl Navigator {
    /// Navigate to a path and refresh windows
    pub fn push(
        cx: &mut (impl BorrowAppContext + BorrowMut<App>),
        path: impl Into<String>,
    ) -> NavigationResult {
        let path = path.into();
        let result = cx.update_global::<GlobalRouter, _>(|router, cx| {
            let app: &App = cx.borrow_mut();
            router.push(&path, app)
        });
        cx.borrow_mut().refresh_windows();
        result
    }

    /// Replace the current path and refresh windows
    pub fn replace(
        cx: &mut (impl BorrowAppContext + BorrowMut<App>),
        path: impl Into<String>,
    ) -> NavigationResult {
        let path = path.into();
        let result = cx.update_global::<GlobalRouter, _>(|router, cx| {
            let app: &App = cx.borrow_mut();
            router.replace(&path, app)
        });
        cx.borrow_mut().refresh_windows();
        result
    }

    /// Go back, if possible
    pub fn pop(cx: &mut (impl BorrowAppContext + BorrowMut<App>)) -> Option<NavigationResult> {
        let result = cx.update_global::<GlobalRouter, _>(|router, cx| {
            let app: &App = cx.borrow_mut();
            router.back(app)
        });
        cx.borrow_mut().refresh_windows();
        result
    }

    /// Go forward, if possible
    pub fn forward(cx: &mut (impl BorrowAppContext + BorrowMut<App>)) -> Option<NavigationResult> {
        let result = cx.update_global::<GlobalRouter, _>(|router, cx| {
            let app: &App = cx.borrow_mut();
            router.forward(app)
        });
        cx.borrow_mut().refresh_windows();
        result
    }

    /// Get current path
    pub fn current_path(cx: &App) -> String {
        cx.global::<GlobalRouter>().current_path().to_string()
    }

    /// Snapshot of the active route
    pub fn active_route(cx: &App) -> ActiveRoute {
        cx.global::<GlobalRouter>().active().clone()
    }

    pub fn can_pop(cx: &App) -> bool {
        cx.global::<GlobalRouter>().can_go_back()
    }

    pub fn can_go_forward(cx: &App) -> bool {
        cx.global::<GlobalRouter>().can_go_forward()
    }
}

// ============================================================================
// Tests
// ============================================================================
