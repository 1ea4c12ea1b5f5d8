//! The default page must instantiate and survive an update pass.

use gpui::{Render, TestAppContext};
use gpui_lazy_router::app::PlaceholderPage;
use gpui_lazy_router::ComponentFactory;
use std::any::TypeId;

#[gpui::test]
fn test_placeholder_page_should_create(cx: &mut TestAppContext) {
    let (page, vcx) = cx.add_window_view(|_window, _cx| PlaceholderPage::new());

    vcx.update(|window, _cx| window.refresh());
    vcx.run_until_parked();

    let message = page.read_with(vcx, |page, _cx| page.message());
    assert_eq!(message, "placeholder works!");
}

#[gpui::test]
fn test_placeholder_page_renders(cx: &mut TestAppContext) {
    let (page, vcx) = cx.add_window_view(|_window, _cx| PlaceholderPage::new());

    page.update_in(vcx, |this, window, cx| {
        let _ = this.render(window, cx);
    });
}

#[gpui::test]
fn test_factory_builds_placeholder_view(cx: &mut TestAppContext) {
    let factory = ComponentFactory::new(PlaceholderPage::new);
    let view = cx.update(|cx| factory.build(cx));
    assert_eq!(view.entity_type(), TypeId::of::<PlaceholderPage>());
}
