//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构出站端口定义（Repository）
//! - usecases: 用例端口及实现

pub mod ports;
pub mod usecases;

pub use ports::{CustomerRepositoryPort, RepositoryError};
pub use usecases::{CustomerUseCase, CustomerUseCasePort};
