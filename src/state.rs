//! Router state: navigation history and the active route.

use crate::error::NavigationError;
use crate::matching::normalize_path;
use crate::route::{ComponentFactory, RouteEntry};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Direction of a history change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationDirection {
    Forward,
    Back,
    Replace,
}

/// A change of the current path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteChangeEvent {
    pub from: Option<String>,
    pub to: String,
    pub direction: NavigationDirection,
}

/// What the router view should show for the current path.
#[derive(Debug, Clone)]
pub enum ActiveRoute {
    /// Nothing navigated yet
    Idle,
    /// The unit is available
    Ready {
        entry: Arc<RouteEntry>,
        unit: ComponentFactory,
    },
    /// Waiting for the entry's deferred load
    Loading { entry: Arc<RouteEntry> },
    /// No route and no fallback
    NotFound { path: String },
    /// Loading or selecting the unit failed
    Failed {
        entry: Arc<RouteEntry>,
        error: NavigationError,
    },
}

impl ActiveRoute {
    /// The entry behind this state, if one was resolved.
    pub fn entry(&self) -> Option<&Arc<RouteEntry>> {
        match self {
            ActiveRoute::Ready { entry, .. }
            | ActiveRoute::Loading { entry }
            | ActiveRoute::Failed { entry, .. } => Some(entry),
            ActiveRoute::Idle | ActiveRoute::NotFound { .. } => None,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, ActiveRoute::Ready { .. })
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ActiveRoute::Loading { .. })
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, ActiveRoute::Failed { .. })
    }

    /// The error, for failed routes.
    pub fn error(&self) -> Option<&NavigationError> {
        match self {
            ActiveRoute::Failed { error, .. } => Some(error),
            _ => None,
        }
    }
}

/// Navigation history plus the active route.
#[derive(Debug)]
pub struct RouterState {
    /// Normalised paths, oldest first
    history: Vec<String>,
    /// Current position in history
    current: usize,
    active: ActiveRoute,
    /// Incremented by every navigation so load completions can tell whether
    /// they were superseded
    navigation_id: Arc<AtomicUsize>,
}

impl RouterState {
    /// Create state positioned at the empty path
    pub fn new() -> Self {
        Self {
            history: vec![String::new()],
            current: 0,
            active: ActiveRoute::Idle,
            navigation_id: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Get current navigation ID
    pub fn navigation_id(&self) -> usize {
        self.navigation_id.load(Ordering::SeqCst)
    }

    /// Start a new navigation and return its ID
    pub fn start_navigation(&self) -> usize {
        self.navigation_id.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Check if a navigation is still current (not superseded by a newer one)
    pub fn is_navigation_current(&self, nav_id: usize) -> bool {
        self.navigation_id() == nav_id
    }

    /// Get current path
    pub fn current_path(&self) -> &str {
        &self.history[self.current]
    }

    pub fn active(&self) -> &ActiveRoute {
        &self.active
    }

    pub fn set_active(&mut self, active: ActiveRoute) {
        self.active = active;
    }

    /// Navigate to a new path, dropping forward history
    pub fn push(&mut self, path: &str) -> RouteChangeEvent {
        let from = Some(self.current_path().to_string());
        let to = normalize_path(path);

        self.history.truncate(self.current + 1);
        self.history.push(to.clone());
        self.current += 1;

        RouteChangeEvent {
            from,
            to,
            direction: NavigationDirection::Forward,
        }
    }

    /// Replace current path
    pub fn replace(&mut self, path: &str) -> RouteChangeEvent {
        let from = Some(self.current_path().to_string());
        let to = normalize_path(path);

        self.history[self.current] = to.clone();

        RouteChangeEvent {
            from,
            to,
            direction: NavigationDirection::Replace,
        }
    }

    /// Go back in history
    pub fn back(&mut self) -> Option<RouteChangeEvent> {
        if !self.can_go_back() {
            return None;
        }
        let from = Some(self.current_path().to_string());
        self.current -= 1;
        Some(RouteChangeEvent {
            from,
            to: self.current_path().to_string(),
            direction: NavigationDirection::Back,
        })
    }

    /// Go forward in history
    pub fn forward(&mut self) -> Option<RouteChangeEvent> {
        if !self.can_go_forward() {
            return None;
        }
        let from = Some(self.current_path().to_string());
        self.current += 1;
        Some(RouteChangeEvent {
            from,
            to: self.current_path().to_string(),
            direction: NavigationDirection::Forward,
        })
    }

    pub fn can_go_back(&self) -> bool {
        self.current > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.current + 1 < self.history.len()
    }

    /// Number of history entries
    pub fn history_len(&self) -> usize {
        self.history.len()
    }
}

impl Default for RouterState {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for RouterState {
    fn clone(&self) -> Self {
        Self {
            history: self.history.clone(),
            current: self.current,
            active: self.active.clone(),
            // Shared so a navigation on any clone supersedes pending loads.
            navigation_id: Arc::clone(&self.navigation_id),
        }
    }
}
