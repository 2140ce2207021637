//! Repository Ports - 出站端口
//!
//! 定义数据持久化的抽象接口
//! 具体实现在 infrastructure 层（SQLite、内存）

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::customer::Customer;

/// Repository 错误
///
/// `Database` 原样携带底层驱动的错误信息，调用方不应依赖其内容做分支判断。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    #[error("customer not found: {0}")]
    NotFound(String),

    #[error("{0}")]
    Database(String),
}

/// Customer Repository Port
///
/// 每个操作只对存储发起一次语句，不做事务、重试或批处理。
#[async_trait]
pub trait CustomerRepositoryPort: Send + Sync {
    /// 插入一条客户记录
    async fn create(&self, customer: &Customer) -> Result<(), RepositoryError>;

    /// 根据 ID 查找客户，未找到时返回 `NotFound`
    async fn find_by_id(&self, id: &str) -> Result<Customer, RepositoryError>;

    /// 获取所有客户（顺序由存储决定，不作保证）
    async fn retrieve_all(&self) -> Result<Vec<Customer>, RepositoryError>;
}
