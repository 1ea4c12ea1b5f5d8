//! Customers feature module, loaded on first navigation to `customers`.

use crate::error::LoadError;
use crate::module::FeatureModule;
use gpui::{div, rgb, Context, FontWeight, IntoElement, ParentElement, Render, Styled, Window};

/// Export name the `customers` route selects.
pub const EXPORT: &str = "CustomersModule";

/// Landing page of the customers area.
#[derive(Debug, Default)]
pub struct CustomerListPage;

impl CustomerListPage {
    pub const fn new() -> Self {
        Self
    }
}

impl Render for CustomerListPage {
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
                    .child("Customers"),
            )
            .child(
                div()
                    .text_color(rgb(0xcccccc))
                    .child("customer-list works!"),
            )
    }
}

/// Assemble the module.
pub fn module() -> FeatureModule {
    FeatureModule::new("customers").export(EXPORT, CustomerListPage::new)
}

/// Deferred loader for the `customers` route.
pub async fn load() -> Result<FeatureModule, LoadError> {
    Ok(module())
}
