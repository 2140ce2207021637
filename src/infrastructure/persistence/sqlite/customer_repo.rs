//! SQLite Customer Repository

use async_trait::async_trait;
use sqlx::FromRow;

use super::DbPool;
use crate::application::ports::{CustomerRepositoryPort, RepositoryError};
use crate::domain::customer::Customer;

/// SQLite Customer Repository
pub struct SqliteCustomerRepository {
    pool: DbPool,
}

impl SqliteCustomerRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// 列名必须与表一致，不匹配时解码失败而不是返回空实体
#[derive(FromRow)]
struct CustomerRow {
    id: String,
    nama: String,
    address: String,
}

impl From<CustomerRow> for Customer {
    fn from(row: CustomerRow) -> Self {
        Customer::new(row.id, row.nama, row.address)
    }
}

#[async_trait]
impl CustomerRepositoryPort for SqliteCustomerRepository {
    async fn create(&self, customer: &Customer) -> Result<(), RepositoryError> {
        sqlx::query("INSERT INTO customer VALUES (?, ?, ?)")
            .bind(&customer.id)
            .bind(&customer.name)
            .bind(&customer.address)
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> Result<Customer, RepositoryError> {
        let row: Option<CustomerRow> = sqlx::query_as("SELECT * FROM customer WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        row.map(Customer::from)
            .ok_or_else(|| RepositoryError::NotFound(id.to_string()))
    }

    async fn retrieve_all(&self) -> Result<Vec<Customer>, RepositoryError> {
        let rows: Vec<CustomerRow> = sqlx::query_as("SELECT * FROM customer")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        Ok(rows.into_iter().map(Customer::from).collect())
    }
}
