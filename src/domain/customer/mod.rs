//! Customer Context - 客户限界上下文
//!
//! 职责:
//! - Customer 实体定义

mod entity;

pub use entity::Customer;
