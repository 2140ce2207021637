//! Domain Layer - 领域层
//!
//! 限界上下文:
//! - Customer Context: 客户管理

pub mod customer;

pub use customer::Customer;
