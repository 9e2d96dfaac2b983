use std::time::Instant;

use crate::db::DbPool;
use crate::repo::{CourierRepo, DeliveryRepo, OrderRepo, ProductRepo, UserRepo};

/// Shared application state: the pool plus one repository per entity,
/// built once at startup and cloned into handlers.
#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
    pub users: UserRepo,
    pub products: ProductRepo,
    pub orders: OrderRepo,
    pub deliveries: DeliveryRepo,
    pub couriers: CourierRepo,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(pool: DbPool) -> Self {
        Self {
            users: UserRepo::new(pool.clone()),
            products: ProductRepo::new(pool.clone()),
            orders: OrderRepo::new(pool.clone()),
            deliveries: DeliveryRepo::new(pool.clone()),
            couriers: CourierRepo::new(pool.clone()),
            pool,
            started_at: Instant::now(),
        }
    }
}
