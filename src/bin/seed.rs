use commerce_api::{config::AppConfig, db::create_pool};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let pool = create_pool(&config.database_url, config.db_max_connections).await?;
    // Ensure migrations are applied.
    sqlx::migrate!("./migrations").run(&pool).await?;

    seed_users(&pool).await?;
    seed_products(&pool).await?;
    seed_couriers(&pool).await?;

    println!("Seed completed");
    Ok(())
}

async fn seed_users(pool: &PgPool) -> anyhow::Result<()> {
    let users = vec![
        ("john.doe@example.com", "John Doe", "hashed_password_1"),
        ("jane.smith@example.com", "Jane Smith", "hashed_password_2"),
        ("bob.wilson@example.com", "Bob Wilson", "hashed_password_3"),
    ];

    for (email, name, password) in users {
        sqlx::query(
            r#"
            INSERT INTO users (id, email, password, name)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (email) DO NOTHING
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(email)
        .bind(password)
        .bind(name)
        .execute(pool)
        .await?;
    }

    println!("Seeded users");
    Ok(())
}

async fn seed_products(pool: &PgPool) -> anyhow::Result<()> {
    let products = vec![
        ("Laptop Pro 15", "High-performance laptop with 15-inch display", "1299.99", 25),
        ("Wireless Mouse", "Ergonomic wireless mouse with precision tracking", "29.99", 150),
        ("Mechanical Keyboard", "RGB mechanical keyboard with blue switches", "89.99", 75),
        ("USB-C Hub", "7-in-1 USB-C hub with HDMI and card reader", "49.99", 100),
        ("Webcam HD", "1080p HD webcam with built-in microphone", "79.99", 50),
        ("Monitor 27 inch", "4K UHD monitor with HDR support", "399.99", 30),
        ("Desk Lamp LED", "Adjustable LED desk lamp with touch control", "34.99", 80),
        ("Headphones Wireless", "Noise-cancelling wireless headphones", "199.99", 60),
        ("External SSD 1TB", "Portable SSD with USB 3.2 Gen 2", "129.99", 45),
        ("Laptop Stand", "Aluminum laptop stand with adjustable height", "39.99", 120),
    ];

    for (name, description, price, stock) in products {
        // Product names carry no unique constraint, so probe first to
        // keep reruns from piling up duplicates.
        let exists: Option<(Uuid,)> = sqlx::query_as("SELECT id FROM products WHERE name = $1")
            .bind(name)
            .fetch_optional(pool)
            .await?;
        if exists.is_some() {
            continue;
        }

        sqlx::query(
            "INSERT INTO products (id, name, description, price, stock) VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(description)
        .bind(price.parse::<Decimal>()?)
        .bind(stock)
        .execute(pool)
        .await?;
    }

    println!("Seeded products");
    Ok(())
}

async fn seed_couriers(pool: &PgPool) -> anyhow::Result<()> {
    let couriers = vec![("Express Couriers", true), ("City Logistics", true)];

    for (name, is_available) in couriers {
        let exists: Option<(Uuid,)> = sqlx::query_as("SELECT id FROM couriers WHERE name = $1")
            .bind(name)
            .fetch_optional(pool)
            .await?;
        if exists.is_some() {
            continue;
        }

        sqlx::query("INSERT INTO couriers (id, name, is_available) VALUES ($1, $2, $3)")
            .bind(Uuid::new_v4())
            .bind(name)
            .bind(is_available)
            .execute(pool)
            .await?;
    }

    println!("Seeded couriers");
    Ok(())
}
