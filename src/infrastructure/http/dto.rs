//! Data Transfer Objects

use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::customer::Customer;

// ============================================================================
// Customer DTOs
// ============================================================================

/// 客户请求/响应体
///
/// 线上字段名为 `Id`、`Nama`、`Address`，同时接受全小写和全大写写法。
/// 缺失字段和 `null` 都按空字符串处理，不做校验。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CustomerPayload {
    #[serde(alias = "id", alias = "ID", deserialize_with = "null_as_empty")]
    pub id: String,
    #[serde(alias = "nama", alias = "NAMA", deserialize_with = "null_as_empty")]
    pub nama: String,
    #[serde(alias = "address", alias = "ADDRESS", deserialize_with = "null_as_empty")]
    pub address: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl From<Customer> for CustomerPayload {
    fn from(customer: Customer) -> Self {
        Self {
            id: customer.id,
            nama: customer.name,
            address: customer.address,
        }
    }
}

impl From<CustomerPayload> for Customer {
    fn from(payload: CustomerPayload) -> Self {
        Customer::new(payload.id, payload.nama, payload.address)
    }
}
