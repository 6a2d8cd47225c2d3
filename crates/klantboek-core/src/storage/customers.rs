//! Repository for customer database operations.
//!
//! Each method issues exactly one logical unit of work against the
//! `customers` table; there are no multi-statement transactions and no
//! retries. Candidates are validated before any SQL runs, so a failing
//! record is never persisted.

use std::sync::Arc;

use sqlx::PgPool;

use crate::{
    error::{CoreError, Result},
    models::{Customer, CustomerId, CustomerUpdate, NewCustomer},
    validate::validate_fields,
};

/// Repository for customer database operations.
pub struct Repository {
    pool: Arc<PgPool>,
}

impl Repository {
    /// Creates a new repository instance.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Returns all customers.
    ///
    /// Rows are ordered by id for deterministic output; callers must not
    /// rely on any particular ordering.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    pub async fn find_all(&self) -> Result<Vec<Customer>> {
        let customers = sqlx::query_as::<_, Customer>(
            r"
            SELECT id, first_name, last_name, city
            FROM customers
            ORDER BY id
            ",
        )
        .fetch_all(&*self.pool)
        .await?;

        Ok(customers)
    }

    /// Finds a customer by id.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    pub async fn find_by_id(&self, id: CustomerId) -> Result<Option<Customer>> {
        let customer = sqlx::query_as::<_, Customer>(
            r"
            SELECT id, first_name, last_name, city
            FROM customers
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&*self.pool)
        .await?;

        Ok(customer)
    }

    /// Validates and inserts a new customer, returning the persisted row
    /// with its database-assigned id.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if a field constraint is violated;
    /// no row is inserted in that case. Returns `CoreError::Database` if
    /// the insert fails.
    pub async fn create(&self, fields: &NewCustomer) -> Result<Customer> {
        validate_fields(&fields.first_name, &fields.last_name, &fields.city)?;

        let customer = sqlx::query_as::<_, Customer>(
            r"
            INSERT INTO customers (first_name, last_name, city)
            VALUES ($1, $2, $3)
            RETURNING id, first_name, last_name, city
            ",
        )
        .bind(&fields.first_name)
        .bind(&fields.last_name)
        .bind(&fields.city)
        .fetch_one(&*self.pool)
        .await?;

        Ok(customer)
    }

    /// Loads a customer, applies the partial update, re-validates the
    /// merged record, and persists it. The id never changes.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` if no row matches the id,
    /// `CoreError::Validation` if the merged record violates a constraint.
    pub async fn update(&self, id: CustomerId, changes: &CustomerUpdate) -> Result<Customer> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| CoreError::NotFound(format!("no customer with id {id}")))?;

        let merged = changes.apply_to(&current);
        validate_fields(&merged.first_name, &merged.last_name, &merged.city)?;

        let customer = sqlx::query_as::<_, Customer>(
            r"
            UPDATE customers
            SET first_name = $2, last_name = $3, city = $4
            WHERE id = $1
            RETURNING id, first_name, last_name, city
            ",
        )
        .bind(id)
        .bind(&merged.first_name)
        .bind(&merged.last_name)
        .bind(&merged.city)
        .fetch_one(&*self.pool)
        .await?;

        Ok(customer)
    }

    /// Deletes a customer by id.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` if no row matches the id, so a
    /// delete of a missing customer never silently succeeds.
    pub async fn delete(&self, id: CustomerId) -> Result<()> {
        let result = sqlx::query(
            r"
            DELETE FROM customers
            WHERE id = $1
            ",
        )
        .bind(id)
        .execute(&*self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(CoreError::NotFound(format!("no customer with id {id}")));
        }

        Ok(())
    }

    /// Counts all customers.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    pub async fn count(&self) -> Result<i64> {
        let count: (i64,) = sqlx::query_as(
            r"
            SELECT COUNT(*) FROM customers
            ",
        )
        .fetch_one(&*self.pool)
        .await?;

        Ok(count.0)
    }

    /// Checks whether a customer exists.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    pub async fn exists(&self, id: CustomerId) -> Result<bool> {
        let exists: (bool,) = sqlx::query_as(
            r"
            SELECT EXISTS(SELECT 1 FROM customers WHERE id = $1)
            ",
        )
        .bind(id)
        .fetch_one(&*self.pool)
        .await?;

        Ok(exists.0)
    }
}
