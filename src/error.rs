//! Error types for route configuration, resolution and deferred loading.
//!
//! - [`ConfigError`]: the route table could not be built (conflicting or
//!   unsupported paths).
//! - [`LoadError`]: a deferred loader could not produce its feature module.
//! - [`NavigationError`]: a navigation could not reach a renderable unit.
//! - [`NavigationResult`]: the outcome of one navigation call.
//! - [`ErrorHandlers`]: optional custom renderers for failed navigations.
//!
//! # Examples
//!
//! ```
//! use gpui_lazy_router::error::{NavigationError, NavigationResult};
//!
//! let result = NavigationResult::Loading { path: "customers".into() };
//! assert!(result.is_loading());
//!
//! let err = NavigationError::LoadFailed {
//!     path: "orders".into(),
//!     message: "bundle unavailable".into(),
//! };
//! assert_eq!(err.to_string(), "Failed to load 'orders': bundle unavailable");
//! ```

use gpui::{AnyElement, App};
use std::fmt;
use std::sync::Arc;

// ============================================================================
// Configuration errors
// ============================================================================

/// Conflicts detected while building a [`RouteTable`](crate::table::RouteTable).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Two entries share the same non-empty path
    DuplicatePath { path: String },

    /// More than one entry uses the empty (fallback) path
    DuplicateFallback,

    /// Two entries share the same route name
    DuplicateName { name: String },

    /// Path uses a `:param` or `*` segment, which this router does not match
    UnsupportedPattern { path: String, segment: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::DuplicatePath { path } => {
                write!(f, "Duplicate route path: '{}'", path)
            }
            ConfigError::DuplicateFallback => {
                write!(f, "Only one route may use the empty path")
            }
            ConfigError::DuplicateName { name } => {
                write!(f, "Duplicate route name: '{}'", name)
            }
            ConfigError::UnsupportedPattern { path, segment } => {
                write!(
                    f,
                    "Route '{}' uses unsupported segment '{}' (only literal paths are matched)",
                    path, segment
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Load errors
// ============================================================================

/// Failure reported by a deferred loader future.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadError {
    message: String,
}

impl LoadError {
    /// Create a load error with a human-readable message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The failure message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for LoadError {}

// ============================================================================
// Navigation errors
// ============================================================================

/// Reasons a navigation could not produce a renderable unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    /// No entry matched and the table has no fallback route
    RouteNotFound { path: String },

    /// The deferred loader for `path` failed
    LoadFailed { path: String, message: String },

    /// The loaded module does not expose the requested unit
    ExportMissing { module: String, export: String },
}

impl NavigationError {
    /// Wrap a loader failure for the given route path.
    pub fn load_failed(path: impl Into<String>, err: &LoadError) -> Self {
        NavigationError::LoadFailed {
            path: path.into(),
            message: err.message().to_string(),
        }
    }
}

impl fmt::Display for NavigationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavigationError::RouteNotFound { path } => {
                write!(f, "Route not found: {}", path)
            }
            NavigationError::LoadFailed { path, message } => {
                write!(f, "Failed to load '{}': {}", path, message)
            }
            NavigationError::ExportMissing { module, export } => {
                write!(f, "Module '{}' does not export '{}'", module, export)
            }
        }
    }
}

impl std::error::Error for NavigationError {}

// ============================================================================
// Navigation Result
// ============================================================================

/// Outcome of a navigation call on the router.
#[derive(Debug, Clone)]
pub enum NavigationResult {
    /// The route's unit is available and rendered
    Success { path: String },
    /// A deferred load was started (or is already in flight)
    Loading { path: String },
    /// No route matched and no fallback exists
    NotFound { path: String },
    /// Navigation failed
    Error(NavigationError),
}

impl NavigationResult {
    /// Check if navigation completed synchronously
    pub fn is_success(&self) -> bool {
        matches!(self, NavigationResult::Success { .. })
    }

    /// Check if navigation is waiting on a deferred load
    pub fn is_loading(&self) -> bool {
        matches!(self, NavigationResult::Loading { .. })
    }

    /// Check if route was not found
    pub fn is_not_found(&self) -> bool {
        matches!(self, NavigationResult::NotFound { .. })
    }

    /// Check if there was an error
    pub fn is_error(&self) -> bool {
        matches!(self, NavigationResult::Error(_))
    }
}

// ============================================================================
// Error Handlers
// ============================================================================

/// Handler for navigation errors
pub type ErrorHandler = Arc<dyn Fn(&mut App, &NavigationError) -> AnyElement + Send + Sync>;

/// Custom renderer for navigation failures, consulted by
/// [`RouterView`](crate::widgets::RouterView) before the built-in error page.
///
/// ```ignore
/// let handlers = ErrorHandlers::new().on_error(|_cx, err| {
///     gpui::div().child(format!("Could not open page: {err}")).into_any_element()
/// });
/// ```
#[derive(Clone, Default)]
pub struct ErrorHandlers {
    /// Handler for navigation errors
    pub error: Option<ErrorHandler>,
}

impl ErrorHandlers {
    /// Create empty error handlers
    pub fn new() -> Self {
        Self { error: None }
    }

    /// Set the navigation error handler
    pub fn on_error<F>(mut self, handler: F) -> Self
    where
        F: Fn(&mut App, &NavigationError) -> AnyElement + Send + Sync + 'static,
    {
        self.error = Some(Arc::new(handler));
        self
    }

    /// Render an error page, if a handler is registered
    pub fn render_error(&self, cx: &mut App, error: &NavigationError) -> Option<AnyElement> {
        self.error.as_ref().map(|handler| handler(cx, error))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use gpui::{div, IntoElement, ParentElement, TestAppContext};

    #[test]
    fn test_navigation_result_predicates() {
        let result = NavigationResult::Success {
            path: "".to_string(),
        };
        assert!(result.is_success());
        assert!(!result.is_loading());

        let result = NavigationResult::Loading {
            path: "customers".to_string(),
        };
        assert!(result.is_loading());
        assert!(!result.is_error());

        let result = NavigationResult::NotFound {
            path: "missing".to_string(),
        };
        assert!(result.is_not_found());
    }

    #[test]
    fn test_config_error_display() {
        let error = ConfigError::DuplicatePath {
            path: "orders".to_string(),
        };
        assert_eq!(error.to_string(), "Duplicate route path: 'orders'");
        assert_eq!(
            ConfigError::DuplicateFallback.to_string(),
            "Only one route may use the empty path"
        );
    }

    #[test]
    fn test_load_failed_from_load_error() {
        let err = NavigationError::load_failed("customers", &LoadError::new("offline"));
        assert_eq!(
            err,
            NavigationError::LoadFailed {
                path: "customers".to_string(),
                message: "offline".to_string(),
            }
        );
    }

    #[test]
    fn test_export_missing_display() {
        let err = NavigationError::ExportMissing {
            module: "orders".to_string(),
            export: "OrdersModule".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Module 'orders' does not export 'OrdersModule'"
        );
    }

    #[gpui::test]
    async fn test_on_error(cx: &mut TestAppContext) {
        let handlers = ErrorHandlers::new()
            .on_error(|_cx, error| div().child(format!("Error: {}", error)).into_any_element());

        let error = NavigationError::RouteNotFound {
            path: "nowhere".to_string(),
        };

        let element = cx.update(|cx| handlers.render_error(cx, &error));
        assert!(element.is_some());
    }

    #[gpui::test]
    async fn test_no_handler_renders_nothing(cx: &mut TestAppContext) {
        let handlers = ErrorHandlers::new();
        let error = NavigationError::RouteNotFound {
            path: "nowhere".to_string(),
        };
        let element = cx.update(|cx| handlers.render_error(cx, &error));
        assert!(element.is_none());
    }
}
