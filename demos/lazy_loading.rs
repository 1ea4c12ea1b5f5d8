//! Lazy Loading Demo
//!
//! Opens a window with links to the placeholder page and the two lazily
//! loaded feature areas. Run with `RUST_LOG=debug` to watch each feature
//! module load on its first visit only.

use gpui::{
    div, px, rgb, size, App, AppContext, Application, Bounds, Context, Entity, IntoElement,
    ParentElement, Render, Styled, TitlebarOptions, Window, WindowBounds, WindowOptions,
};
use gpui_lazy_router::app::app_routes;
use gpui_lazy_router::{init_router, router_link, DefaultPages, RouterView};

fn main() {
    env_logger::init();

    let table = match app_routes() {
        Ok(table) => table,
        Err(err) => {
            eprintln!("invalid route configuration: {err}");
            std::process::exit(1);
        }
    };

    Application::new().run(move |cx: &mut App| {
        init_router(cx, table);

        let bounds = Bounds::centered(None, size(px(800.), px(600.)), cx);
        cx.open_window(
            WindowOptions {
                window_bounds: Some(WindowBounds::Windowed(bounds)),
                titlebar: Some(TitlebarOptions {
                    title: Some("Lazy Loading Demo".into()),
                    appears_transparent: false,
                    traffic_light_position: None,
                }),
                ..Default::default()
            },
            |_, cx| cx.new(LazyLoadingApp::new),
        )
        .unwrap();

        cx.activate(true);
    });
}

struct LazyLoadingApp {
    view: Entity<RouterView>,
}

impl LazyLoadingApp {
    fn new(cx: &mut Context<'_, Self>) -> Self {
        Self {
            view: cx.new(|_| {
                RouterView::with_pages(DefaultPages::new().with_loading(|path| {
                    div()
                        .p_4()
                        .text_color(rgb(0x888888))
                        .child(format!("Loading {path}…"))
                        .into_any_element()
                }))
            }),
        }
    }
}

impl Render for LazyLoadingApp {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<'_, Self>) -> impl IntoElement {
        div()
            .flex()
            .flex_col()
            .size_full()
            .bg(rgb(0x1e1e1e))
            .text_color(rgb(0xffffff))
            .child(
                div()
                    .flex()
                    .gap_4()
                    .p_4()
                    .bg(rgb(0x2d2d2d))
                    .border_b_1()
                    .border_color(rgb(0x3e3e3e))
                    .child(router_link(cx, "", "Home"))
                    .child(router_link(cx, "customers", "Customers"))
                    .child(router_link(cx, "orders", "Orders")),
            )
            .child(div().flex_1().child(self.view.clone()))
    }
}
