//! Router widgets for rendering routes.
//!
//! - [`RouterView`] / [`router_view`]: renders the active route, showing the
//!   unit's view once it is available and otherwise the loading, not-found
//!   or error page.
//! - [`RouterLink`] / [`router_link`]: clickable navigation link with
//!   optional active-state styling.
//! - [`DefaultPages`]: configurable fallback pages.
//!
//! Views for rendered units are created on first render and kept in the
//! [`GlobalRouter`], so navigating away and back shows the same entity.

use crate::context::{GlobalRouter, Navigator};
use crate::matching::normalize_path;
use crate::state::ActiveRoute;
use crate::{debug_log, trace_log};
use gpui::*;

// ============================================================================
// RouterView
// ============================================================================

/// Component that renders the active route.
///
/// Place one in your window's root view. It re-renders whenever the router
/// refreshes windows (after navigation and after deferred loads finish).
#[derive(Default)]
pub struct RouterView {
    pages: DefaultPages,
}

impl RouterView {
    pub fn new() -> Self {
        Self {
            pages: DefaultPages::new(),
        }
    }

    /// Use custom fallback pages
    pub fn with_pages(pages: DefaultPages) -> Self {
        Self { pages }
    }
}

impl Render for RouterView {
    fn render(&mut self, window: &mut Window, cx: &mut Context<'_, Self>) -> impl IntoElement {
        router_view(window, cx, &self.pages)
    }
}

/// Functional RouterView: renders whatever the router currently has active.
pub fn router_view<V>(
    _window: &mut Window,
    cx: &mut Context<'_, V>,
    pages: &DefaultPages,
) -> AnyElement {
    let active = {
        let Some(router) = cx.try_global::<GlobalRouter>() else {
            return div().child("No router configured").into_any_element();
        };
        router.active().clone()
    }; // router borrow ends here

    match active {
        ActiveRoute::Ready { entry, unit } => {
            let key = entry.view_key();
            let cached = cx.global::<GlobalRouter>().cached_view(&key).cloned();
            let view = if let Some(view) = cached {
                trace_log!("router_view: reusing view '{}'", key);
                view
            } else {
                debug_log!(
                    "router_view: creating '{}' for route '{}'",
                    unit.type_name(),
                    entry.path
                );
                let view = unit.build(cx);
                cx.update_global::<GlobalRouter, _>(|router, _| {
                    router.cache_view(key, view.clone());
                });
                view
            };
            view.into_any_element()
        }
        ActiveRoute::Loading { entry } => pages.render_loading(&entry.path),
        ActiveRoute::NotFound { path } => pages.render_not_found(&path),
        ActiveRoute::Failed { error, .. } => {
            let handlers = cx.global::<GlobalRouter>().error_handlers().clone();
            handlers
                .render_error(cx, &error)
                .unwrap_or_else(|| pages.render_error(&error.to_string()))
        }
        ActiveRoute::Idle => div().into_any_element(),
    }
}

// ============================================================================
// RouterLink
// ============================================================================

/// A clickable link component that navigates to a route on click.
///
/// ```ignore
/// RouterLink::new("orders")
///     .child("Orders")
///     .active_class(|div| div.text_color(gpui::rgb(0x2196f3)))
///     .build(cx)
/// ```
pub struct RouterLink {
    /// Target route path
    path: SharedString,
    /// Optional custom styling when link is active
    active_class: Option<Box<dyn Fn(Div) -> Div>>,
    /// Child elements
    children: Vec<AnyElement>,
}

impl RouterLink {
    /// Create a new RouterLink to the specified path
    pub fn new(path: impl Into<SharedString>) -> Self {
        Self {
            path: path.into(),
            active_class: None,
            children: Vec::new(),
        }
    }

    /// Add a child element
    pub fn child(mut self, child: impl IntoElement) -> Self {
        self.children.push(child.into_any_element());
        self
    }

    /// Set custom styling for when this link is active (current route)
    pub fn active_class(mut self, style: impl Fn(Div) -> Div + 'static) -> Self {
        self.active_class = Some(Box::new(style));
        self
    }

    /// Build the link element with the given context
    pub fn build<V: 'static>(self, cx: &mut Context<'_, V>) -> Div {
        let path = self.path.clone();
        let is_active = is_current(cx, &path);

        let mut link = div().cursor_pointer().on_mouse_down(
            MouseButton::Left,
            cx.listener(move |_view, _event, _window, cx| {
                Navigator::push(cx, path.to_string());
            }),
        );

        if is_active {
            if let Some(active_fn) = self.active_class {
                link = active_fn(link);
            }
        }

        for child in self.children {
            link = link.child(child);
        }

        link
    }
}

/// Create a simple text link with built-in active-state color.
pub fn router_link<V: 'static>(
    cx: &mut Context<'_, V>,
    path: impl Into<SharedString>,
    label: impl Into<SharedString>,
) -> Div {
    let path_str: SharedString = path.into();
    let label_str: SharedString = label.into();
    let is_active = is_current(cx, &path_str);

    div()
        .cursor_pointer()
        .text_color(if is_active {
            rgb(0x2196f3)
        } else {
            rgb(0xcccccc)
        })
        .hover(|this| this.text_color(rgb(0x2196f3)))
        .child(label_str)
        .on_mouse_down(
            MouseButton::Left,
            cx.listener(move |_view, _event, _window, cx| {
                Navigator::push(cx, path_str.to_string());
            }),
        )
}

fn is_current(cx: &App, path: &str) -> bool {
    cx.try_global::<GlobalRouter>()
        .is_some_and(|router| router.current_path() == normalize_path(path))
}

// ============================================================================
// Default Pages System
// ============================================================================

/// Configurable fallback pages for not-found, loading, and error states.
///
/// ```ignore
/// DefaultPages::new()
///     .with_loading(|path| gpui::div().child(format!("Opening {path}…")).into_any_element())
///     .with_error(|msg| gpui::div().child(msg.to_string()).into_any_element())
/// ```
#[derive(Default)]
pub struct DefaultPages {
    /// Custom not-found page builder
    #[allow(clippy::type_complexity)]
    pub not_found: Option<Box<dyn Fn(&str) -> AnyElement + Send + Sync>>,
    /// Custom loading page builder
    #[allow(clippy::type_complexity)]
    pub loading: Option<Box<dyn Fn(&str) -> AnyElement + Send + Sync>>,
    /// Custom error page builder
    #[allow(clippy::type_complexity)]
    pub error: Option<Box<dyn Fn(&str) -> AnyElement + Send + Sync>>,
}

impl DefaultPages {
    /// Create new default pages configuration with built-in defaults
    pub fn new() -> Self {
        Self {
            not_found: None,
            loading: None,
            error: None,
        }
    }

    /// Set custom not-found page (receives the requested path)
    pub fn with_not_found<F>(mut self, builder: F) -> Self
    where
        F: Fn(&str) -> AnyElement + Send + Sync + 'static,
    {
        self.not_found = Some(Box::new(builder));
        self
    }

    /// Set custom loading page (receives the route being loaded)
    pub fn with_loading<F>(mut self, builder: F) -> Self
    where
        F: Fn(&str) -> AnyElement + Send + Sync + 'static,
    {
        self.loading = Some(Box::new(builder));
        self
    }

    /// Set custom error page (receives the error message)
    pub fn with_error<F>(mut self, builder: F) -> Self
    where
        F: Fn(&str) -> AnyElement + Send + Sync + 'static,
    {
        self.error = Some(Box::new(builder));
        self
    }

    pub fn render_not_found(&self, path: &str) -> AnyElement {
        if let Some(builder) = &self.not_found {
            builder(path)
        } else {
            default_not_found_page(path).into_any_element()
        }
    }

    pub fn render_loading(&self, path: &str) -> AnyElement {
        if let Some(builder) = &self.loading {
            builder(path)
        } else {
            default_loading_page(path).into_any_element()
        }
    }

    pub fn render_error(&self, message: &str) -> AnyElement {
        if let Some(builder) = &self.error {
            builder(message)
        } else {
            default_error_page(message).into_any_element()
        }
    }
}

// ============================================================================
// Built-in Default Pages
// ============================================================================

fn centered_page() -> Div {
    div()
        .flex()
        .flex_col()
        .items_center()
        .justify_center()
        .size_full()
        .bg(rgb(0x1e1e1e))
        .p_8()
        .gap_4()
}

fn default_not_found_page(path: &str) -> impl IntoElement {
    centered_page()
        .child(
            div()
                .text_3xl()
                .font_weight(FontWeight::BOLD)
                .text_color(rgb(0xffffff))
                .child("404: Page Not Found"),
        )
        .child(
            div()
                .text_base()
                .text_color(rgb(0xcccccc))
                .child(format!("No route matches: /{}", path)),
        )
}

fn default_loading_page(path: &str) -> impl IntoElement {
    centered_page()
        .child(
            div()
                .text_xl()
                .font_weight(FontWeight::MEDIUM)
                .text_color(rgb(0xffffff))
                .child("Loading..."),
        )
        .child(
            div()
                .text_sm()
                .text_color(rgb(0x888888))
                .child(format!("Fetching module for /{}", path)),
        )
}

fn default_error_page(message: &str) -> impl IntoElement {
    centered_page()
        .child(
            div()
                .text_2xl()
                .font_weight(FontWeight::BOLD)
                .text_color(rgb(0xffffff))
                .child("Could Not Open Page"),
        )
        .child(
            div()
                .text_base()
                .text_color(rgb(0xcccccc))
                .text_center()
                .max_w(px(500.))
                .child(message.to_string()),
        )
}
