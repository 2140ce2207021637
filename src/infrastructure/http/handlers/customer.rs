//! Customer HTTP Handlers

use axum::{
    body::Bytes,
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::domain::customer::Customer;
use crate::infrastructure::http::dto::CustomerPayload;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 获取客户列表
pub async fn list_customers(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<CustomerPayload>>, ApiError> {
    let customers = state.customer_usecase.get_all_customer().await?;

    Ok(Json(customers.into_iter().map(CustomerPayload::from).collect()))
}

/// 注册客户，成功后原样回显请求体
///
/// 请求体按 JSON 解码，不检查 Content-Type；空请求体同样返回 400
pub async fn register_customer(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<CustomerPayload>, ApiError> {
    let payload: CustomerPayload =
        serde_json::from_slice(&body).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let customer = Customer::from(payload);
    state.customer_usecase.register_customer(&customer).await?;

    Ok(Json(CustomerPayload::from(customer)))
}

/// 获取客户详情
pub async fn get_customer(
    State(state): State<Arc<AppState>>,
    Path(customer_id): Path<String>,
) -> Result<Json<CustomerPayload>, ApiError> {
    let customer = state.customer_usecase.find_customer_by_id(&customer_id).await?;

    Ok(Json(CustomerPayload::from(customer)))
}
