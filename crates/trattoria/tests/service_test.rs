use std::sync::Arc;

use chrono::Local;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use trattoria::catalog_actor;
use trattoria::clients::CatalogClient;
use trattoria::lifecycle::RestaurantSystem;
use trattoria::model::{CatalogItemId, Order, OrderId, OrderStatus};
use trattoria::notify::NotificationChannel;
use trattoria::order_actor::TransitionPolicy;
use trattoria::service::{NewOrder, NewOrderLine, OrderService, ServiceError};
use trattoria_actors::ActorClient;

/// A seeded system with a service and its channel.
async fn setup(
    policy: TransitionPolicy,
) -> (RestaurantSystem, OrderService, Arc<NotificationChannel>) {
    let system = RestaurantSystem::new(16, policy);
    system.seed_catalog().await.unwrap();
    let notifier = Arc::new(NotificationChannel::new());
    let service = system.order_service(notifier.clone());
    (system, service, notifier)
}

fn alice_cart() -> NewOrder {
    NewOrder {
        customer_name: "Alice".into(),
        items: vec![NewOrderLine::new(1, 2, dec!(8.99))],
    }
}

fn json(text: &str) -> serde_json::Value {
    serde_json::from_str(text).unwrap()
}

fn invalid(message: &str) -> ServiceError {
    ServiceError::Validation(message.into())
}

async fn move_to(service: &OrderService, id: u32, status: &str) -> Order {
    service
        .update_order_status(OrderId(id), status)
        .await
        .unwrap()
}

#[tokio::test]
async fn test_alice_places_an_order() {
    let (system, service, notifier) = setup(TransitionPolicy::Permissive).await;
    let mut viewer = notifier.connect();

    let detail = service.create_order(alice_cart()).await.unwrap();

    assert_eq!(detail.order.id, OrderId(1));
    assert_eq!(detail.order.customer_name, "Alice");
    assert_eq!(detail.order.total, dec!(17.98));
    assert_eq!(detail.order.status, OrderStatus::Pending);
    assert_eq!(detail.order_items.len(), 1);
    let line = &detail.order_items[0];
    assert_eq!(line.line_item.quantity, 2);
    assert_eq!(line.line_item.price, dec!(8.99));
    assert_eq!(line.menu_item.name, "Bruschetta Italiana");

    let event = json(&viewer.outbox.recv().await.unwrap());
    assert_eq!(event["type"], "new_order");
    assert_eq!(event["order"]["id"], 1);
    assert_eq!(event["order"]["orderItems"][0]["menuItem"]["id"], 1);

    let reloaded = service.get_order_with_items(OrderId(1)).await.unwrap();
    assert_eq!(reloaded, detail);

    drop(service);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_total_sums_every_line_at_submitted_prices() {
    let (_system, service, _notifier) = setup(TransitionPolicy::Permissive).await;

    let detail = service
        .create_order(NewOrder {
            customer_name: "Bob".into(),
            items: vec![
                NewOrderLine::new(5, 1, dec!(15.99)),
                NewOrderLine::new(8, 3, dec!(6.99)),
                // differs from the catalog price; the submitted price is kept
                NewOrderLine::new(7, 1, dec!(5.00)),
            ],
        })
        .await
        .unwrap();

    assert_eq!(detail.order.total, dec!(41.96));
    let prices: Vec<_> = detail
        .order_items
        .iter()
        .map(|l| l.line_item.price)
        .collect();
    assert_eq!(prices, vec![dec!(15.99), dec!(6.99), dec!(5.00)]);
}

#[tokio::test]
async fn test_invalid_cart_persists_nothing_and_broadcasts_nothing() {
    let (_system, service, notifier) = setup(TransitionPolicy::Permissive).await;
    let mut viewer = notifier.connect();

    let err = service
        .create_order(NewOrder {
            customer_name: "   ".into(),
            items: vec![NewOrderLine::new(1, 1, dec!(8.99))],
        })
        .await
        .unwrap_err();
    assert_eq!(err, invalid("Customer name is required"));

    let err = service
        .create_order(NewOrder {
            customer_name: "Alice".into(),
            items: vec![],
        })
        .await
        .unwrap_err();
    assert_eq!(err, invalid("At least one item is required"));

    assert!(service.list_orders(None).await.unwrap().is_empty());
    assert!(viewer.outbox.try_recv().is_err());
}

#[tokio::test]
async fn test_unknown_menu_item_rolls_back_the_whole_order() {
    let (system, service, notifier) = setup(TransitionPolicy::Permissive).await;
    let mut viewer = notifier.connect();

    let err = service
        .create_order(NewOrder {
            customer_name: "Carol".into(),
            items: vec![
                NewOrderLine::new(1, 1, dec!(8.99)),
                NewOrderLine::new(99, 1, dec!(3.00)),
            ],
        })
        .await
        .unwrap_err();
    assert_eq!(err, invalid("Unknown menu item: 99"));

    assert!(service.list_orders(None).await.unwrap().is_empty());
    assert!(system.line_item_client.list().await.unwrap().is_empty());
    assert!(viewer.outbox.try_recv().is_err());

    // Ids are not reused after a rollback.
    let detail = service.create_order(alice_cart()).await.unwrap();
    assert_eq!(detail.order.id, OrderId(2));
}

#[tokio::test]
async fn test_status_update_is_broadcast() {
    let (_system, service, notifier) = setup(TransitionPolicy::Permissive).await;
    service.create_order(alice_cart()).await.unwrap();
    let mut viewer = notifier.connect();

    let order = service
        .update_order_status(OrderId(1), "preparing")
        .await
        .unwrap();
    assert_eq!(order.status, OrderStatus::Preparing);
    assert_eq!(order.total, dec!(17.98));

    let event = json(&viewer.outbox.recv().await.unwrap());
    assert_eq!(event["type"], "order_status_update");
    assert_eq!(event["orderId"], 1);
    assert_eq!(event["status"], "preparing");
    assert_eq!(event["order"]["status"], "preparing");

    let stored = service.get_order_with_items(OrderId(1)).await.unwrap();
    assert_eq!(stored.order.status, OrderStatus::Preparing);
}

#[tokio::test]
async fn test_bad_status_updates_are_rejected_quietly() {
    let (_system, service, notifier) = setup(TransitionPolicy::Permissive).await;
    service.create_order(alice_cart()).await.unwrap();
    let mut viewer = notifier.connect();

    let err = service
        .update_order_status(OrderId(1), "shipped")
        .await
        .unwrap_err();
    assert_eq!(err, invalid("Invalid status"));

    let err = service
        .update_order_status(OrderId(42), "ready")
        .await
        .unwrap_err();
    assert_eq!(err, ServiceError::NotFound("Order not found".into()));

    assert!(viewer.outbox.try_recv().is_err());
}

#[tokio::test]
async fn test_permissive_policy_allows_reopening_an_order() {
    let (_system, service, _notifier) = setup(TransitionPolicy::Permissive).await;
    service.create_order(alice_cart()).await.unwrap();

    move_to(&service, 1, "completed").await;
    let order = move_to(&service, 1, "pending").await;
    assert_eq!(order.status, OrderStatus::Pending);
}

#[tokio::test]
async fn test_strict_policy_enforces_the_kitchen_workflow() {
    let (_system, service, notifier) = setup(TransitionPolicy::Strict).await;
    service.create_order(alice_cart()).await.unwrap();
    let mut viewer = notifier.connect();

    let err = service
        .update_order_status(OrderId(1), "completed")
        .await
        .unwrap_err();
    assert_eq!(
        err,
        ServiceError::Validation("Cannot move order from pending to completed".into())
    );
    assert!(viewer.outbox.try_recv().is_err());

    for status in ["preparing", "ready", "completed"] {
        move_to(&service, 1, status).await;
    }
    let detail = service.get_order_with_items(OrderId(1)).await.unwrap();
    assert_eq!(detail.order.status, OrderStatus::Completed);
}

#[tokio::test]
async fn test_list_orders_newest_first_with_filters() {
    let (_system, service, _notifier) = setup(TransitionPolicy::Permissive).await;
    for name in ["Ann", "Ben", "Cat"] {
        service
            .create_order(NewOrder {
                customer_name: name.into(),
                items: vec![NewOrderLine::new(3, 1, dec!(16.99))],
            })
            .await
            .unwrap();
    }
    move_to(&service, 2, "ready").await;

    let names: Vec<_> = service
        .list_orders(None)
        .await
        .unwrap()
        .into_iter()
        .map(|o| o.customer_name)
        .collect();
    assert_eq!(names, vec!["Cat", "Ben", "Ann"]);

    let pending: Vec<_> = service
        .list_orders(Some("pending"))
        .await
        .unwrap()
        .into_iter()
        .map(|o| o.id)
        .collect();
    assert_eq!(pending, vec![OrderId(3), OrderId(1)]);

    let unknown = service.list_orders(Some("shipped")).await.unwrap();
    assert!(unknown.is_empty());
}

#[tokio::test]
async fn test_catalog_reads() {
    let (_system, service, _notifier) = setup(TransitionPolicy::Permissive).await;

    let all = service.list_catalog(None).await.unwrap();
    assert_eq!(all.len(), 8);
    assert_eq!(all[0].id, CatalogItemId(1));

    let pizza: Vec<_> = service
        .list_catalog(Some("pizza"))
        .await
        .unwrap()
        .into_iter()
        .map(|i| i.name)
        .collect();
    assert_eq!(pizza, vec!["Margherita Pizza", "Pepperoni Pizza"]);
    let soups = service.list_catalog(Some("soups")).await.unwrap();
    assert!(soups.is_empty());

    let cannoli = service.get_catalog_item(CatalogItemId(8)).await.unwrap();
    assert_eq!(cannoli.price, dec!(6.99));
    let missing = CatalogItemId(9);
    let err = service.get_catalog_item(missing).await.unwrap_err();
    assert_eq!(err, ServiceError::NotFound("Menu item not found".into()));
}

#[tokio::test]
async fn test_dangling_menu_reference_is_an_integrity_error() {
    use trattoria::model::LineItemCreate;

    let (system, service, _notifier) = setup(TransitionPolicy::Permissive).await;
    service.create_order(alice_cart()).await.unwrap();

    // The catalog never deletes items; simulate a store that lost one.
    system
        .catalog_client
        .delete(CatalogItemId(1))
        .await
        .unwrap();
    assert!(matches!(
        service.get_order_with_items(OrderId(1)).await,
        Err(ServiceError::Integrity(_))
    ));

    // And new lines pointing at it are refused at insert time.
    let err = system
        .line_item_client
        .add_line_item(LineItemCreate {
            order_id: OrderId(1),
            menu_item_id: CatalogItemId(1),
            quantity: 1,
            price: dec!(8.99),
        })
        .await
        .unwrap_err();
    assert_eq!(
        err,
        trattoria::line_item_actor::LineItemError::UnknownCatalogItem(CatalogItemId(1))
    );
}

#[tokio::test]
async fn test_daily_stats_reflect_todays_orders() {
    let (_system, service, _notifier) = setup(TransitionPolicy::Permissive).await;
    service.create_order(alice_cart()).await.unwrap();
    service
        .create_order(NewOrder {
            customer_name: "Dan".into(),
            items: vec![NewOrderLine::new(7, 1, dec!(7.99))],
        })
        .await
        .unwrap();
    move_to(&service, 2, "completed").await;

    let stats = service.daily_stats(Local::now()).await.unwrap();
    assert_eq!(stats.total_orders, 2);
    assert_eq!(stats.pending_orders, 1);
    assert_eq!(stats.completed_orders, 1);
    assert_eq!(stats.revenue, dec!(25.97));
}

#[tokio::test]
async fn test_disconnected_viewer_does_not_block_the_rest() {
    let (_system, service, notifier) = setup(TransitionPolicy::Permissive).await;
    let gone = notifier.connect();
    let mut live = notifier.connect();
    drop(gone);

    service.create_order(alice_cart()).await.unwrap();

    let event = json(&live.outbox.recv().await.unwrap());
    assert_eq!(event["type"], "new_order");
    assert_eq!(notifier.viewer_count(), 1);
}

#[tokio::test]
async fn test_oversized_total_is_rejected_before_anything_is_stored() {
    let (system, service, notifier) = setup(TransitionPolicy::Permissive).await;
    let mut viewer = notifier.connect();
    let huge = Decimal::from_scientific("1e28").unwrap();

    let err = service
        .create_order(NewOrder {
            customer_name: "Eve".into(),
            items: vec![NewOrderLine::new(1, 10, huge)],
        })
        .await
        .unwrap_err();
    assert_eq!(err, invalid("Order total is too large"));

    assert!(service.list_orders(None).await.unwrap().is_empty());
    assert!(system.line_item_client.list().await.unwrap().is_empty());
    assert!(viewer.outbox.try_recv().is_err());
}

#[tokio::test]
async fn test_daily_revenue_overflow_is_reported_not_fatal() {
    let (_system, service, _notifier) = setup(TransitionPolicy::Permissive).await;
    let big = Decimal::from_scientific("5e28").unwrap();
    for name in ["Eve", "Mallory"] {
        service
            .create_order(NewOrder {
                customer_name: name.into(),
                items: vec![NewOrderLine::new(1, 1, big)],
            })
            .await
            .unwrap();
    }

    let err = service.daily_stats(Local::now()).await.unwrap_err();
    assert!(matches!(err, ServiceError::Integrity(_)));

    // The stores are still serving after the failed summary.
    assert_eq!(service.list_orders(None).await.unwrap().len(), 2);
    assert!(matches!(
        service.daily_stats(Local::now()).await,
        Err(ServiceError::Integrity(_))
    ));
}

#[tokio::test]
async fn test_order_that_cannot_be_read_back_is_rolled_back() {
    let (system, _service, notifier) = setup(TransitionPolicy::Permissive).await;
    let mut viewer = notifier.connect();

    // Line items are checked against the seeded catalog, but the service reads
    // menu entries from an empty one, so assembling the detail fails.
    let (empty_actor, empty) = catalog_actor::new(8);
    tokio::spawn(empty_actor.run(()));
    let service = OrderService::new(
        CatalogClient::new(empty),
        system.order_client.clone(),
        system.line_item_client.clone(),
        notifier.clone(),
    );

    let err = service.create_order(alice_cart()).await.unwrap_err();
    let missing = ServiceError::Integrity("Menu item not found: 1".into());
    assert_eq!(err, missing);

    assert!(system.order_client.list().await.unwrap().is_empty());
    assert!(system.line_item_client.list().await.unwrap().is_empty());
    assert!(viewer.outbox.try_recv().is_err());
}
