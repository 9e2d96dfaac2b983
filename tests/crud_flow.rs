use commerce_api::{
    db::create_pool,
    dto::{
        couriers::{CreateCourierRequest, UpdateCourierRequest},
        deliveries::{CreateDeliveryRequest, UpdateDeliveryRequest},
        orders::CreateOrderRequest,
        products::{CreateProductRequest, UpdateProductRequest},
        users::{CreateUserRequest, UpdateUserRequest},
    },
    error::AppError,
    models::OrderStatus,
    state::AppState,
};
use rust_decimal::Decimal;
use uuid::Uuid;

// Integration flow: create, patch, list, and delete each entity through
// the repositories, exercising the partial-update and snapshot rules.
#[tokio::test]
async fn crud_and_partial_update_flow() -> anyhow::Result<()> {
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

    // Users: create, then conflict on the same email
    let alice = state
        .users
        .create(CreateUserRequest {
            email: "alice@example.com".into(),
            password: "secret123".into(),
            name: Some("Alice".into()),
            address: None,
        })
        .await?;
    assert_eq!(alice.email, "alice@example.com");
    assert_eq!(alice.name.as_deref(), Some("Alice"));
    assert!(alice.address.is_none());

    let duplicate = state
        .users
        .create(CreateUserRequest {
            email: "alice@example.com".into(),
            password: "another1".into(),
            name: None,
            address: None,
        })
        .await;
    match duplicate {
        Err(AppError::Conflict(msg)) => assert_eq!(msg, "Email is already taken"),
        other => panic!("expected a conflict, got {other:?}"),
    }

    let fetched = state.users.find_by_id(alice.id).await?.expect("alice exists");
    assert_eq!(fetched.id, alice.id);
    assert!(state.users.find_by_id(Uuid::new_v4()).await?.is_none());

    // Patch: explicit null clears, absent fields stay, updated_at moves
    let patch: UpdateUserRequest =
        serde_json::from_str(r#"{"name": null, "address": "5 High Street"}"#)?;
    let updated = state.users.update(alice.id, patch).await?;
    assert!(updated.name.is_none());
    assert_eq!(updated.address.as_deref(), Some("5 High Street"));
    assert_eq!(updated.email, alice.email);
    assert!(updated.updated_at > alice.updated_at);

    let empty: UpdateUserRequest = serde_json::from_str("{}")?;
    let touched = state.users.update(alice.id, empty).await?;
    assert_eq!(touched.email, updated.email);
    assert_eq!(touched.name, updated.name);
    assert_eq!(touched.address, updated.address);
    assert!(touched.updated_at > updated.updated_at);

    let missing = state
        .users
        .update(Uuid::new_v4(), UpdateUserRequest::default())
        .await;
    assert!(matches!(missing, Err(AppError::NotFound("User"))));

    // Delete hands back the pre-deletion snapshot exactly once
    let snapshot = state.users.delete(alice.id).await?;
    assert_eq!(snapshot.id, alice.id);
    assert_eq!(snapshot.email, "alice@example.com");
    assert!(state.users.find_by_id(alice.id).await?.is_none());
    assert!(matches!(
        state.users.delete(alice.id).await,
        Err(AppError::NotFound("User"))
    ));

    // Listing is newest-first and pages with offset/limit
    for email in ["bob@example.com", "carol@example.com", "dave@example.com"] {
        state
            .users
            .create(CreateUserRequest {
                email: email.into(),
                password: "secret123".into(),
                name: None,
                address: None,
            })
            .await?;
    }
    let newest_first = state.users.list(0, 10).await?;
    let emails: Vec<_> = newest_first.iter().map(|u| u.email.as_str()).collect();
    assert_eq!(
        emails,
        ["dave@example.com", "carol@example.com", "bob@example.com"]
    );
    assert_eq!(state.users.list(0, 2).await?.len(), 2);
    let last_page = state.users.list(2, 2).await?;
    assert_eq!(last_page.len(), 1);
    assert_eq!(last_page[0].email, "bob@example.com");

    // Products: stock defaults to zero, search matches name or description
    let laptop = state
        .products
        .create(CreateProductRequest {
            name: "Laptop Pro 15".into(),
            description: Some("High-performance laptop with 15-inch display".into()),
            price: "1299.99".parse()?,
            stock: Some(25),
        })
        .await?;
    assert_eq!(laptop.stock, 25);

    let lamp = state
        .products
        .create(CreateProductRequest {
            name: "Desk Lamp LED".into(),
            description: Some("Adjustable LED desk lamp".into()),
            price: "34.99".parse()?,
            stock: None,
        })
        .await?;
    assert_eq!(lamp.stock, 0);

    let by_name = state.products.list(0, 10, Some("laptop")).await?;
    assert_eq!(by_name.len(), 1);
    assert_eq!(by_name[0].name, "Laptop Pro 15");
    let by_description = state.products.list(0, 10, Some("ADJUSTABLE")).await?;
    assert_eq!(by_description.len(), 1);
    assert_eq!(by_description[0].name, "Desk Lamp LED");
    assert!(state.products.list(0, 10, Some("tablet")).await?.is_empty());
    assert_eq!(state.products.list(0, 10, None).await?.len(), 2);

    let patch: UpdateProductRequest =
        serde_json::from_str(r#"{"description": null, "price": "1199.00"}"#)?;
    let discounted = state.products.update(laptop.id, patch).await?;
    assert!(discounted.description.is_none());
    assert_eq!(discounted.price, "1199.00".parse::<Decimal>()?);
    assert_eq!(discounted.name, "Laptop Pro 15");

    // Couriers default to available
    let courier = state
        .couriers
        .create(CreateCourierRequest {
            name: "Express Couriers".into(),
            is_available: None,
        })
        .await?;
    assert!(courier.is_available);
    let off_duty = state
        .couriers
        .update(
            courier.id,
            UpdateCourierRequest {
                name: None,
                is_available: Some(false),
            },
        )
        .await?;
    assert!(!off_duty.is_available);

    // Deliveries reference orders and couriers; broken references are
    // rejected, deleted ones are nulled out
    let order = state
        .orders
        .create(CreateOrderRequest {
            user_id: None,
            product_id: None,
            quantity: None,
            status: None,
        })
        .await?;
    assert_eq!(order.status, OrderStatus::Paid);

    let delivery = state
        .deliveries
        .create(CreateDeliveryRequest {
            order_id: Some(order.id),
            courier_id: Some(courier.id),
            pick_up_at: None,
            delivered_at: None,
        })
        .await?;
    assert_eq!(delivery.order_id, Some(order.id));
    assert_eq!(delivery.courier_id, Some(courier.id));

    let dangling = state
        .deliveries
        .create(CreateDeliveryRequest {
            order_id: None,
            courier_id: Some(Uuid::new_v4()),
            pick_up_at: None,
            delivered_at: None,
        })
        .await;
    match dangling {
        Err(AppError::Validation(msg)) => {
            assert_eq!(msg, "referenced order or courier does not exist")
        }
        other => panic!("expected a validation error, got {other:?}"),
    }

    let patch: UpdateDeliveryRequest =
        serde_json::from_str(r#"{"pick_up_at": "2026-08-22T09:30:00Z"}"#)?;
    let picked_up = state.deliveries.update(delivery.id, patch).await?;
    assert!(picked_up.pick_up_at.is_some());
    let cleared: UpdateDeliveryRequest = serde_json::from_str(r#"{"pick_up_at": null}"#)?;
    let reset = state.deliveries.update(delivery.id, cleared).await?;
    assert!(reset.pick_up_at.is_none());

    state.couriers.delete(courier.id).await?;
    let orphaned = state
        .deliveries
        .find_by_id(delivery.id)
        .await?
        .expect("delivery survives its courier");
    assert!(orphaned.courier_id.is_none());

    let removed = state.deliveries.delete(delivery.id).await?;
    assert_eq!(removed.id, delivery.id);
    assert!(state.deliveries.find_by_id(delivery.id).await?.is_none());

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
