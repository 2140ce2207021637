//! Customer Service - 客户 CRUD 服务
//!
//! 分层架构: Controller -> Use-Case -> Repository
//!
//! 领域层 (domain/):
//! - Customer Context: 客户实体
//!
//! 应用层 (application/):
//! - Ports: 仓储端口（CustomerRepositoryPort）
//! - Use-Cases: 客户用例（注册、按 ID 查找、列出全部）
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API
//! - Persistence: SQLite 存储
//! - Memory: 内存存储

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
