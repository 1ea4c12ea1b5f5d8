//! The application's root route configuration.
//!
//! Two feature areas are split into separately loaded modules and the empty
//! path renders a placeholder page:
//!
//! | Path        | Loader                                   |
//! |-------------|------------------------------------------|
//! | `customers` | deferred, export `CustomersModule`       |
//! | `orders`    | deferred, export `OrdersModule`          |
//! | `""`        | eager [`PlaceholderPage`]                |

pub mod customers;
pub mod orders;
pub mod placeholder;

pub use placeholder::PlaceholderPage;

use crate::error::ConfigError;
use crate::route::RouteEntry;
use crate::table::RouteTable;

/// Build the root route table.
pub fn app_routes() -> Result<RouteTable, ConfigError> {
    RouteTable::builder()
        .route(RouteEntry::lazy("customers", customers::EXPORT, customers::load).name("customers"))
        .route(RouteEntry::lazy("orders", orders::EXPORT, orders::load).name("orders"))
        .route(RouteEntry::component("", PlaceholderPage::new).name("home"))
        .build()
}
