//! HTTP Routes
//!
//! API Endpoints:
//! - /customer        GET   列出所有客户
//! - /customer        POST  注册客户
//! - /customer/{id}   GET   获取客户详情
//! - /ping            GET   健康检查

use axum::{routing::get, Router};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .merge(customer_routes())
}

/// Customer 路由
fn customer_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/customer",
            get(handlers::list_customers).post(handlers::register_customer),
        )
        .route("/customer/:customer_id", get(handlers::get_customer))
}
