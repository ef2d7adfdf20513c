//! Demo walkthrough of the storefront core: browse the static catalog, fill
//! a cart (including a personalized line), check out, track the order, and
//! render a live-class countdown.

use chrono::{Duration, Utc};
use roboshop_cart::{cart_total, JsonFileStorage};
use roboshop_store::catalog::{load_courses, load_products};
use roboshop_store::mock::{MemoryOrders, MockRemoteOrders, RecordingMailer};
use roboshop_store::{countdown, progress_steps, setup_tracing, ShippingForm, ShopSystem};
use std::sync::Arc;
use tracing::info;

const PRODUCTS_JSON: &str = r#"[
    {"id": 1, "title": "Controller Board", "price": 100.0, "category": "electronics"},
    {"id": 2, "title": "Rover Chassis", "price": 40.0, "category": "mechanics"},
    {"id": 3, "title": "Nameplate", "price": 12.0, "category": "accessories"}
]"#;

const COURSES_JSON: &str = r#"[
    {"id": 10, "name": "Intro to Line Followers", "cost": 25.0}
]"#;

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();
    info!("Starting storefront demo");

    let data_dir = std::env::temp_dir().join("roboshop-demo");
    let system = ShopSystem::new(
        Box::new(JsonFileStorage::new(&data_dir)),
        Arc::new(MockRemoteOrders::new()),
        Arc::new(MemoryOrders::new()),
        Arc::new(RecordingMailer::new()),
    );

    let products = load_products(PRODUCTS_JSON).map_err(|e| e.to_string())?;
    let courses = load_courses(COURSES_JSON).map_err(|e| e.to_string())?;
    info!(
        products = products.len(),
        courses = courses.len(),
        "Catalog loaded"
    );

    // Fill the cart: two boards merge into one line, the engraved nameplate
    // stays its own line.
    let board = &products[0];
    system
        .cart
        .add_item(board.to_cart_item())
        .await
        .map_err(|e| e.to_string())?;
    system
        .cart
        .add_item(board.to_cart_item())
        .await
        .map_err(|e| e.to_string())?;
    let items = system
        .cart
        .add_item(products[2].to_cart_item().with_note("engrave: Turing"))
        .await
        .map_err(|e| e.to_string())?;
    info!(
        lines = items.len(),
        total = cart_total(&items),
        "Cart ready"
    );

    let form = ShippingForm {
        name: "Grace Hopper".to_string(),
        email: "grace@example.com".to_string(),
        phone: "555-0100".to_string(),
        street: "1 Relay Road".to_string(),
        city: "Queensville".to_string(),
        postal_code: "00001".to_string(),
    };
    let order = system
        .checkout
        .place_order(&form)
        .await
        .map_err(|e| e.to_string())?;
    info!(tracking_id = %order.tracking_id, total = order.total(), "Checked out");

    let tracked = system
        .orders
        .track(&order.tracking_id)
        .await
        .map_err(|e| e.to_string())?;
    for step in progress_steps(&tracked) {
        info!(stage = %step.status, state = ?step.state, "Progress");
    }

    let class_start = Utc::now() + Duration::days(2) + Duration::hours(3);
    info!(
        course = %courses[0].name,
        countdown = %countdown(class_start, Utc::now()),
        "Next live class"
    );

    system.shutdown().await?;
    info!("Demo complete");
    Ok(())
}
