//! 应用层 - 用例
//!
//! 控制器与仓储之间的编排层

mod customer_usecase;

pub use customer_usecase::{CustomerUseCase, CustomerUseCasePort};
