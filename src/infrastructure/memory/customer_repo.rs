//! In-Memory Customer Repository Implementation

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::Arc;

use crate::application::ports::{CustomerRepositoryPort, RepositoryError};
use crate::domain::customer::Customer;

/// 内存客户仓储
///
/// 与 SQLite 实现遵守同一契约：重复 ID 插入失败，查找不到返回 `NotFound`
pub struct InMemoryCustomerRepository {
    customers: DashMap<String, Customer>,
}

impl InMemoryCustomerRepository {
    pub fn new() -> Self {
        Self {
            customers: DashMap::new(),
        }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }
}

impl Default for InMemoryCustomerRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CustomerRepositoryPort for InMemoryCustomerRepository {
    async fn create(&self, customer: &Customer) -> Result<(), RepositoryError> {
        match self.customers.entry(customer.id.clone()) {
            Entry::Occupied(_) => Err(RepositoryError::Database(format!(
                "duplicate customer id: {}",
                customer.id
            ))),
            Entry::Vacant(entry) => {
                entry.insert(customer.clone());
                tracing::debug!(customer_id = %customer.id, "Customer stored in memory");
                Ok(())
            }
        }
    }

    async fn find_by_id(&self, id: &str) -> Result<Customer, RepositoryError> {
        self.customers
            .get(id)
            .map(|c| c.clone())
            .ok_or_else(|| RepositoryError::NotFound(id.to_string()))
    }

    async fn retrieve_all(&self) -> Result<Vec<Customer>, RepositoryError> {
        Ok(self.customers.iter().map(|e| e.value().clone()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_customer_lifecycle() {
        let repo = InMemoryCustomerRepository::new();
        let customer = Customer::new("C001", "Dummy Name 1", "Dummy Address 1");

        // Empty
        assert!(repo.retrieve_all().await.unwrap().is_empty());

        // Create
        repo.create(&customer).await.unwrap();

        // Find
        let found = repo.find_by_id("C001").await.unwrap();
        assert_eq!(found, customer);

        // Duplicate
        assert!(repo.create(&customer).await.is_err());

        // Retrieve all
        let all = repo.retrieve_all().await.unwrap();
        assert_eq!(all.len(), 1);
    }

    #[tokio::test]
    async fn test_find_missing_customer() {
        let repo = InMemoryCustomerRepository::new();

        let err = repo.find_by_id("C404").await.unwrap_err();
        assert_eq!(err, RepositoryError::NotFound("C404".to_string()));
    }
}
