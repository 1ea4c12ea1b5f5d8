//! Orders feature module, loaded on first navigation to `orders`.

use crate::error::LoadError;
use crate::module::FeatureModule;
use gpui::{div, rgb, Context, FontWeight, IntoElement, ParentElement, Render, Styled, Window};

/// Export name the `orders` route selects.
pub const EXPORT: &str = "OrdersModule";

/// Landing page of the orders area.
#[derive(Debug, Default)]
pub struct OrderListPage;

impl OrderListPage {
    pub const fn new() -> Self {
        Self
    }
}

impl Render for OrderListPage {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<'_, Self>) -> impl IntoElement {
        div()
            .flex()
            .flex_col()
            .gap_2()
            .p_4()
            .child(
                div()
                    .text_xl()
                    .font_weight(FontWeight::BOLD)
                    .text_color(rgb(0xffffff))
                    .child("Orders"),
            )
            .child(
                div()
                    .text_color(rgb(0xcccccc))
                    .child("order-list works!"),
            )
    }
}

/// Assemble the module.
pub fn module() -> FeatureModule {
    FeatureModule::new("orders").export(EXPORT, OrderListPage::new)
}

/// Deferred loader for the `orders` route.
pub async fn load() -> Result<FeatureModule, LoadError> {
    Ok(module())
}
