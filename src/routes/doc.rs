use utoipa::OpenApi;
use utoipa::openapi::OpenApi as OpenApiSpec;
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        couriers::{CreateCourierRequest, UpdateCourierRequest},
        deliveries::{CreateDeliveryRequest, UpdateDeliveryRequest},
        orders::{CreateOrderRequest, UpdateOrderRequest},
        products::{AdjustStockRequest, CreateProductRequest, UpdateProductRequest},
        users::{CreateUserRequest, UpdateUserRequest},
    },
    models::{Courier, Delivery, Order, OrderStatus, Product, User},
    response::{ApiResponse, ErrorResponse, MessageResponse},
    routes::{couriers, deliveries, health, orders, params, products, users},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        users::create_user,
        users::list_users,
        users::get_user,
        users::update_user,
        users::delete_user,
        products::create_product,
        products::list_products,
        products::get_product,
        products::update_product,
        products::delete_product,
        products::adjust_stock,
        orders::create_order,
        orders::list_orders,
        orders::get_order,
        orders::update_order,
        orders::delete_order,
        deliveries::create_delivery,
        deliveries::list_deliveries,
        deliveries::get_delivery,
        deliveries::update_delivery,
        deliveries::delete_delivery,
        couriers::create_courier,
        couriers::list_couriers,
        couriers::get_courier,
        couriers::update_courier,
        couriers::delete_courier
    ),
    components(
        schemas(
            User,
            Product,
            Order,
            OrderStatus,
            Delivery,
            Courier,
            CreateUserRequest,
            UpdateUserRequest,
            CreateProductRequest,
            UpdateProductRequest,
            AdjustStockRequest,
            CreateOrderRequest,
            UpdateOrderRequest,
            CreateDeliveryRequest,
            UpdateDeliveryRequest,
            CreateCourierRequest,
            UpdateCourierRequest,
            params::Pagination,
            params::ProductListQuery,
            params::OrderListQuery,
            MessageResponse,
            ErrorResponse,
            health::HealthData,
            ApiResponse<User>,
            ApiResponse<Vec<User>>,
            ApiResponse<Product>,
            ApiResponse<Vec<Product>>,
            ApiResponse<Order>,
            ApiResponse<Vec<Order>>,
            ApiResponse<Delivery>,
            ApiResponse<Vec<Delivery>>,
            ApiResponse<Courier>,
            ApiResponse<Vec<Courier>>
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "users", description = "User endpoints"),
        (name = "products", description = "Product endpoints"),
        (name = "orders", description = "Order endpoints"),
        (name = "deliveries", description = "Delivery endpoints"),
        (name = "couriers", description = "Courier endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
