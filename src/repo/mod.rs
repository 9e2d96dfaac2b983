pub mod couriers;
pub mod deliveries;
pub mod orders;
pub mod products;
pub mod users;

pub use couriers::CourierRepo;
pub use deliveries::DeliveryRepo;
pub use orders::OrderRepo;
pub use products::ProductRepo;
pub use users::UserRepo;
