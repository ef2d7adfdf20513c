use roboshop_cart::mock::MemoryStorage;
use roboshop_cart::NewItem;
use roboshop_store::mock::{MemoryOrders, MockRemoteOrders, RecordingMailer};
use roboshop_store::{CheckoutError, OrderError, ShippingForm, ShopSystem};
use std::sync::Arc;

struct Harness {
    system: ShopSystem,
    remote: Arc<MockRemoteOrders>,
    local: Arc<MemoryOrders>,
    mailer: Arc<RecordingMailer>,
}

fn harness() -> Harness {
    let remote = Arc::new(MockRemoteOrders::new());
    let local = Arc::new(MemoryOrders::new());
    let mailer = Arc::new(RecordingMailer::new());
    let system = ShopSystem::new(
        Box::new(MemoryStorage::new()),
        remote.clone(),
        local.clone(),
        mailer.clone(),
    );
    Harness {
        system,
        remote,
        local,
        mailer,
    }
}

fn valid_form() -> ShippingForm {
    ShippingForm {
        name: "Grace Hopper".into(),
        email: "grace@example.com".into(),
        phone: "555-0100".into(),
        street: "1 Relay Road".into(),
        city: "Queensville".into(),
        postal_code: "00001".into(),
    }
}

async fn fill_cart(h: &Harness) {
    h.system
        .cart
        .add_item(NewItem::new(1, "Controller Board", 100.0))
        .await
        .expect("add failed");
    h.system
        .cart
        .add_item(NewItem::new(1, "Controller Board", 100.0))
        .await
        .expect("add failed");
    h.system
        .cart
        .add_item(NewItem::new(3, "Nameplate", 12.0).with_note("engrave: Ada"))
        .await
        .expect("add failed");
}

/// Happy path: remote placement, decoupled line snapshot, cleared cart,
/// confirmation email carrying the tracking id.
#[tokio::test]
async fn checkout_places_remotely_and_clears_cart() {
    let h = harness();
    fill_cart(&h).await;

    let order = h
        .system
        .checkout
        .place_order(&valid_form())
        .await
        .expect("checkout failed");

    assert!(order.synced);
    assert_eq!(order.items.len(), 2, "merged board line + noted nameplate");
    assert_eq!(order.total(), 212.0);
    assert!(h.local.is_empty(), "remote success must not touch local tier");
    assert!(
        h.system.cart.items().await.expect("items failed").is_empty(),
        "cart clears after checkout"
    );

    let sent = h.mailer.sent();
    assert_eq!(sent.len(), 1);
    let (template, params) = &sent[0];
    assert_eq!(template, "order_confirmation");
    assert_eq!(
        params.get("tracking_id"),
        Some(&order.tracking_id),
        "confirmation must reference the order"
    );
    assert_eq!(params.get("to_email").map(String::as_str), Some("grace@example.com"));

    // The placed order is retrievable by tracking id.
    let tracked = h
        .system
        .orders
        .track(&order.tracking_id)
        .await
        .expect("track failed");
    assert_eq!(tracked, order);

    h.system.shutdown().await.expect("shutdown failed");
}

/// Remote outage degrades to an unsynced local record; the flow still
/// completes and the record is trackable.
#[tokio::test]
async fn remote_outage_falls_back_to_unsynced_local_record() {
    let h = harness();
    fill_cart(&h).await;
    h.remote.set_down(true);

    let order = h
        .system
        .checkout
        .place_order(&valid_form())
        .await
        .expect("fallback checkout failed");

    assert!(!order.synced, "fallback record must be flagged unsynced");
    assert!(order.tracking_id.starts_with("RB-"));
    assert_eq!(h.local.len(), 1);
    assert!(h.system.cart.items().await.expect("items failed").is_empty());

    // Even with the remote back up, the local record resolves lookups.
    h.remote.set_down(false);
    let tracked = h
        .system
        .orders
        .track(&order.tracking_id)
        .await
        .expect("track failed");
    assert!(!tracked.synced);
    assert_eq!(tracked.items, order.items);
}

/// Validation rejects before any mutation: the cart keeps its lines and no
/// order record exists anywhere.
#[tokio::test]
async fn missing_field_rejects_without_mutation() {
    let h = harness();
    fill_cart(&h).await;

    let mut form = valid_form();
    form.email = "  ".into();
    let err = h
        .system
        .checkout
        .place_order(&form)
        .await
        .expect_err("blank email must be rejected");
    assert!(matches!(err, CheckoutError::MissingField("email")));

    assert_eq!(h.system.cart.items().await.expect("items failed").len(), 2);
    assert!(h.local.is_empty());
    assert!(h.mailer.sent().is_empty());
}

#[tokio::test]
async fn empty_cart_cannot_check_out() {
    let h = harness();
    let err = h
        .system
        .checkout
        .place_order(&valid_form())
        .await
        .expect_err("empty cart must be rejected");
    assert!(matches!(err, CheckoutError::EmptyCart));
}

/// The confirmation email is best-effort: a failing mailer does not fail
/// the order or leave the cart populated.
#[tokio::test]
async fn mailer_failure_does_not_fail_checkout() {
    let h = harness();
    fill_cart(&h).await;
    h.mailer.set_failing(true);

    let order = h
        .system
        .checkout
        .place_order(&valid_form())
        .await
        .expect("checkout must survive mailer outage");
    assert!(order.synced);
    assert!(h.system.cart.items().await.expect("items failed").is_empty());
}

#[tokio::test]
async fn tracking_unknown_id_is_not_found() {
    let h = harness();
    let err = h
        .system
        .orders
        .track("TRK-999999")
        .await
        .expect_err("unknown id must not resolve");
    assert!(matches!(err, OrderError::NotFound(_)));
}
