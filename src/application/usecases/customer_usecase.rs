//! Customer Use-Case
//!
//! 每个操作一对一委托给仓储，错误原样向上传递

use async_trait::async_trait;
use std::sync::Arc;

use crate::application::ports::{CustomerRepositoryPort, RepositoryError};
use crate::domain::customer::Customer;

/// Customer 用例端口（入站）
///
/// HTTP 层只依赖此 trait，便于替换实现和测试
#[async_trait]
pub trait CustomerUseCasePort: Send + Sync {
    /// 注册客户
    async fn register_customer(&self, customer: &Customer) -> Result<(), RepositoryError>;

    /// 根据 ID 查找客户
    async fn find_customer_by_id(&self, id: &str) -> Result<Customer, RepositoryError>;

    /// 获取所有客户
    async fn get_all_customer(&self) -> Result<Vec<Customer>, RepositoryError>;
}

/// Customer 用例实现
pub struct CustomerUseCase {
    customer_repo: Arc<dyn CustomerRepositoryPort>,
}

impl CustomerUseCase {
    pub fn new(customer_repo: Arc<dyn CustomerRepositoryPort>) -> Self {
        Self { customer_repo }
    }
}

#[async_trait]
impl CustomerUseCasePort for CustomerUseCase {
    async fn register_customer(&self, customer: &Customer) -> Result<(), RepositoryError> {
        self.customer_repo.create(customer).await?;

        tracing::info!(customer_id = %customer.id, name = %customer.name, "Customer registered");

        Ok(())
    }

    async fn find_customer_by_id(&self, id: &str) -> Result<Customer, RepositoryError> {
        self.customer_repo.find_by_id(id).await
    }

    async fn get_all_customer(&self) -> Result<Vec<Customer>, RepositoryError> {
        self.customer_repo.retrieve_all().await
    }
}
