//! Resolution properties of the application's route table.

use gpui_lazy_router::app::{app_routes, PlaceholderPage};
use gpui_lazy_router::*;

#[test]
fn test_feature_paths_resolve_to_their_own_loader() {
    let table = app_routes().unwrap();

    let customers = table.resolve("customers").unwrap();
    let orders = table.resolve("orders").unwrap();

    assert_eq!(customers.entry().path, "customers");
    assert_eq!(customers.loader().unwrap().export(), "CustomersModule");
    assert_eq!(orders.entry().path, "orders");
    assert_eq!(orders.loader().unwrap().export(), "OrdersModule");
    assert!(!customers.loader().unwrap().same_as(orders.loader().unwrap()));
}

#[test]
fn test_empty_path_is_eager_placeholder() {
    let table = app_routes().unwrap();

    for path in ["", "/"] {
        match table.resolve(path).unwrap() {
            Resolution::Eager { entry, factory } => {
                assert!(entry.is_fallback());
                assert_eq!(factory.type_name(), std::any::type_name::<PlaceholderPage>());
            }
            Resolution::Deferred { .. } => panic!("empty path must not defer"),
        }
    }
}

#[test]
fn test_resolution_is_idempotent() {
    let table = app_routes().unwrap();

    let first = table.resolve("/customers").unwrap().loader().unwrap().clone();
    let second = table.resolve("customers/").unwrap().loader().unwrap().clone();
    assert!(first.same_as(&second));
}

#[test]
fn test_unknown_path_falls_back_to_placeholder() {
    let table = app_routes().unwrap();

    let resolution = table.resolve("invoices").unwrap();
    assert!(!resolution.is_deferred());
    assert!(resolution.entry().is_fallback());
}

#[test]
fn test_second_fallback_is_a_config_conflict() {
    let err = RouteTable::builder()
        .routes(app_routes().unwrap().entries().iter().map(|e| (**e).clone()))
        .route(RouteEntry::component("", PlaceholderPage::new))
        .build()
        .unwrap_err();
    assert_eq!(err, ConfigError::DuplicateFallback);
}

#[test]
fn test_loaders_produce_named_units() {
    let table = app_routes().unwrap();

    for path in ["customers", "orders"] {
        let loader = table.resolve(path).unwrap().loader().unwrap().clone();
        let module = pollster::block_on(loader.load()).unwrap();
        assert!(
            module.unit(loader.export()).is_some(),
            "module for '{}' should export '{}'",
            path,
            loader.export()
        );
    }
}
