//! Lazy-loaded route modules for [GPUI](https://gpui.rs).
//!
//! A [`RouteTable`] maps navigation paths to renderable units. Some units are
//! bound eagerly; others live in [`FeatureModule`]s that are fetched by an
//! async [`DeferredLoader`] the first time their path is navigated to, then
//! cached and reused.
//!
//! ```ignore
//! use gpui_lazy_router::{init_router, RouteEntry, RouteTable, RouterView};
//!
//! let table = RouteTable::builder()
//!     .route(RouteEntry::lazy("customers", "CustomersModule", customers::load))
//!     .route(RouteEntry::lazy("orders", "OrdersModule", orders::load))
//!     .route(RouteEntry::component("", PlaceholderPage::new))
//!     .build()?;
//!
//! init_router(cx, table);
//! // render `cx.new(|_| RouterView::new())` somewhere in the window
//! ```
//!
//! # Features
//!
//! - `cache` (default): load each feature module once and reuse it.
//! - `log` (default) / `tracing`: logging backend for the router's
//!   diagnostics (see [`logging`]).

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod app;
#[cfg(feature = "cache")]
pub mod cache;
pub mod context;
pub mod error;
pub mod logging;
pub mod matching;
pub mod module;
pub mod route;
pub mod state;
pub mod table;
pub mod widgets;

#[cfg(feature = "cache")]
pub use cache::{CacheStats, ModuleCache};
pub use context::{init_router, install_router, GlobalRouter, Navigator};
pub use error::{ConfigError, ErrorHandlers, LoadError, NavigationError, NavigationResult};
pub use module::FeatureModule;
pub use route::{ComponentFactory, DeferredLoader, LoadFuture, RouteEntry, RouteLoader};
pub use state::{ActiveRoute, NavigationDirection, RouteChangeEvent, RouterState};
pub use table::{Resolution, RouteTable, RouteTableBuilder};
pub use widgets::{router_link, router_view, DefaultPages, RouterLink, RouterView};
