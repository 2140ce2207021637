//! Customer Context - Entity

use std::fmt;

/// 客户实体
///
/// 不变量:
/// - `id` 由外部分配，唯一性由存储层保证
/// - 创建后不可变（无更新、无删除操作）
///
/// 应用层不校验 `id` 是否为空。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub address: String,
}

impl Customer {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            address: address.into(),
        }
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.id, self.name, self.address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_creation() {
        let customer = Customer::new("C001", "Dummy Name 1", "Dummy Address 1");

        assert_eq!(customer.id, "C001");
        assert_eq!(customer.name, "Dummy Name 1");
        assert_eq!(customer.address, "Dummy Address 1");
    }

    #[test]
    fn test_customer_display() {
        let customer = Customer::new("C001", "Dummy Name 1", "Dummy Address 1");
        assert_eq!(customer.to_string(), "C001 Dummy Name 1 Dummy Address 1");
    }

    #[test]
    fn test_clone_is_independent() {
        let original = Customer::new("C001", "Dummy Name 1", "Dummy Address 1");
        let mut copy = original.clone();
        copy.name = "Changed".to_string();

        assert_eq!(original.name, "Dummy Name 1");
    }
}
