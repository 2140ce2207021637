//! Application State

use std::sync::Arc;

use crate::application::CustomerUseCasePort;

/// 应用状态
///
/// 由 main 显式构造并注入，处理器只通过用例端口访问业务
pub struct AppState {
    pub customer_usecase: Arc<dyn CustomerUseCasePort>,
}

impl AppState {
    pub fn new(customer_usecase: Arc<dyn CustomerUseCasePort>) -> Self {
        Self { customer_usecase }
    }
}
