//! Memory Layer - In-Memory Storage
//!
//! 不依赖数据库的仓储实现，用于本地运行和测试

mod customer_repo;

pub use customer_repo::InMemoryCustomerRepository;
