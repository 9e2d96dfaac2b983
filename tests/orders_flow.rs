use commerce_api::{
    db::create_pool,
    dto::{
        orders::{CreateOrderRequest, UpdateOrderRequest},
        products::CreateProductRequest,
        users::CreateUserRequest,
    },
    error::AppError,
    models::OrderStatus,
    state::AppState,
};
use uuid::Uuid;

// Inventory flow: orders consume stock in the same transaction that
// records them, so oversells and unknown products leave nothing behind.
#[tokio::test]
async fn order_creation_consumes_stock_atomically() -> anyhow::Result<()> {
    // Allow skipping when no DB is configured in the environment.
    let database_url = match std::env::var("TEST_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
    {
        Ok(url) => url,
        Err(_) => {
            eprintln!(
                "Skipping test: set TEST_DATABASE_URL or DATABASE_URL to run integration flow tests."
            );
            return Ok(());
        }
    };

    let state = setup_state(&database_url).await?;

    let buyer = state
        .users
        .create(CreateUserRequest {
            email: "buyer@example.com".into(),
            password: "secret123".into(),
            name: Some("Buyer".into()),
            address: None,
        })
        .await?;

    let widget = state
        .products
        .create(CreateProductRequest {
            name: "Test Widget".into(),
            description: Some("A product for testing".into()),
            price: "10.00".parse()?,
            stock: Some(5),
        })
        .await?;

    // A paid order for 3 leaves 2 in stock
    let first = state
        .orders
        .create(CreateOrderRequest {
            user_id: Some(buyer.id),
            product_id: Some(widget.id),
            quantity: Some(3),
            status: None,
        })
        .await?;
    assert_eq!(first.status, OrderStatus::Paid);
    assert_eq!(first.quantity, Some(3));
    assert_eq!(stock_of(&state, widget.id).await?, 2);

    // An overdraw is rejected and writes nothing
    let oversell = state
        .orders
        .create(CreateOrderRequest {
            user_id: Some(buyer.id),
            product_id: Some(widget.id),
            quantity: Some(10),
            status: None,
        })
        .await;
    match oversell {
        Err(AppError::InsufficientStock {
            requested,
            available,
        }) => {
            assert_eq!(requested, 10);
            assert_eq!(available, 2);
        }
        other => panic!("expected insufficient stock, got {other:?}"),
    }
    assert_eq!(stock_of(&state, widget.id).await?, 2);
    assert_eq!(state.orders.list(0, 10, None, None).await?.len(), 1);

    // An unknown product is reported as missing, not as an overdraw
    let missing = state
        .orders
        .create(CreateOrderRequest {
            user_id: Some(buyer.id),
            product_id: Some(Uuid::new_v4()),
            quantity: Some(1),
            status: None,
        })
        .await;
    assert!(matches!(missing, Err(AppError::ProductNotFound)));

    // Orders without a product line consume nothing
    let bare = state
        .orders
        .create(CreateOrderRequest {
            user_id: None,
            product_id: None,
            quantity: None,
            status: Some(OrderStatus::InTransit),
        })
        .await?;
    assert_eq!(bare.status, OrderStatus::InTransit);
    assert_eq!(stock_of(&state, widget.id).await?, 2);

    // Two rivals for the last units: exactly one wins
    state.products.adjust_stock(widget.id, 3).await?;
    assert_eq!(stock_of(&state, widget.id).await?, 5);
    let order_for_three = || CreateOrderRequest {
        user_id: Some(buyer.id),
        product_id: Some(widget.id),
        quantity: Some(3),
        status: None,
    };
    let (left, right) = tokio::join!(
        state.orders.create(order_for_three()),
        state.orders.create(order_for_three()),
    );
    let loser = if left.is_ok() { right } else { left };
    match loser {
        Err(AppError::InsufficientStock {
            requested,
            available,
        }) => {
            assert_eq!(requested, 3);
            assert_eq!(available, 2);
        }
        other => panic!("expected the losing order to overdraw, got {other:?}"),
    }
    assert_eq!(stock_of(&state, widget.id).await?, 2);

    // Changing the quantity later is bookkeeping only; stock is untouched
    let requanted: UpdateOrderRequest = serde_json::from_str(r#"{"quantity": 1}"#)?;
    let updated = state.orders.update(first.id, requanted).await?;
    assert_eq!(updated.quantity, Some(1));
    assert_eq!(stock_of(&state, widget.id).await?, 2);

    // Stock adjustments are signed and cannot take stock below zero
    let restocked = state.products.adjust_stock(widget.id, 5).await?;
    assert_eq!(restocked.stock, 7);
    let drained = state.products.adjust_stock(widget.id, -4).await?;
    assert_eq!(drained.stock, 3);
    let overdraw = state.products.adjust_stock(widget.id, -100).await;
    match overdraw {
        Err(AppError::Validation(msg)) => assert_eq!(msg, "stock cannot be negative"),
        other => panic!("expected a validation error, got {other:?}"),
    }
    assert_eq!(stock_of(&state, widget.id).await?, 3);
    assert!(matches!(
        state.products.adjust_stock(Uuid::new_v4(), 1).await,
        Err(AppError::NotFound("Product"))
    ));

    // Listings filter by owner and status
    let delivered: UpdateOrderRequest = serde_json::from_str(r#"{"status": "DELIVERED"}"#)?;
    state.orders.update(first.id, delivered).await?;
    let delivered_orders = state
        .orders
        .list(0, 10, None, Some(OrderStatus::Delivered))
        .await?;
    assert_eq!(delivered_orders.len(), 1);
    assert_eq!(delivered_orders[0].id, first.id);

    let buyer_orders = state.orders.list(0, 10, Some(buyer.id), None).await?;
    assert_eq!(buyer_orders.len(), 2);
    let both_filters = state
        .orders
        .list(0, 10, Some(buyer.id), Some(OrderStatus::Delivered))
        .await?;
    assert_eq!(both_filters.len(), 1);

    // Deleting the buyer detaches their orders instead of cascading
    state.users.delete(buyer.id).await?;
    let detached = state
        .orders
        .find_by_id(first.id)
        .await?
        .expect("order survives its buyer");
    assert!(detached.user_id.is_none());

    // Delete returns the final snapshot
    let snapshot = state.orders.delete(first.id).await?;
    assert_eq!(snapshot.id, first.id);
    assert!(state.orders.find_by_id(first.id).await?.is_none());

    Ok(())
}

async fn setup_state(database_url: &str) -> anyhow::Result<AppState> {
    let pool = create_pool(database_url, 5).await?;
    sqlx::migrate!("./migrations").run(&pool).await?;

    // Clean tables between runs
    sqlx::query(
        "TRUNCATE TABLE deliveries, orders, couriers, products, users RESTART IDENTITY CASCADE",
    )
    .execute(&pool)
    .await?;

    Ok(AppState::new(pool))
}

async fn stock_of(state: &AppState, id: Uuid) -> anyhow::Result<i32> {
    let product = state.products.find_by_id(id).await?.expect("product exists");
    Ok(product.stock)
}
