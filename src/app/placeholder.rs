//! Placeholder page shown on the empty path.

use gpui::{div, rgb, Context, IntoElement, ParentElement, Render, Styled, Window};

/// Stateless default page.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlaceholderPage;

impl PlaceholderPage {
    pub const MESSAGE: &'static str = "placeholder works!";

    pub const fn new() -> Self {
        Self
    }

    /// Text the page shows.
    pub const fn message(&self) -> &'static str {
        Self::MESSAGE
    }
}

impl Render for PlaceholderPage {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<'_, Self>) -> impl IntoElement {
        div()
            .p_4()
            .text_color(rgb(0xcccccc))
            .child(self.message())
    }
}
