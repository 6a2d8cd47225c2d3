//! CRUD handlers for the customer resource.
//!
//! Each handler extracts its path/body inputs, invokes exactly one
//! repository operation, and shapes the response envelope. Field values
//! come from the request body; validation happens in the storage layer
//! before any row is written.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use klantboek_core::{Customer, CustomerId, CustomerUpdate, NewCustomer, Storage};
use serde::Serialize;
use tracing::{info, instrument};

use crate::error::ApiError;

/// Response envelope for the customer collection.
#[derive(Debug, Serialize)]
pub struct CustomersResponse {
    /// All customers currently in the directory.
    pub customers: Vec<Customer>,
}

/// Response envelope for a single customer lookup.
#[derive(Debug, Serialize)]
pub struct CustomerResponse {
    /// The requested customer.
    pub customer: Customer,
}

/// Response envelope for a successful update.
#[derive(Debug, Serialize)]
pub struct UpdateResponse {
    /// Confirmation message naming the updated customer.
    pub message: String,
    /// The customer after the update.
    pub customer: Customer,
}

/// `GET /customers` — lists all customers.
#[instrument(name = "list_customers", skip(storage))]
pub async fn list_customers(
    State(storage): State<Storage>,
) -> Result<Json<CustomersResponse>, ApiError> {
    let customers = storage.customers.find_all().await?;
    Ok(Json(CustomersResponse { customers }))
}

/// `GET /customer/{id}` — looks up a single customer by id.
#[instrument(name = "get_customer", skip(storage))]
pub async fn get_customer(
    State(storage): State<Storage>,
    Path(id): Path<i64>,
) -> Result<Json<CustomerResponse>, ApiError> {
    let id = CustomerId(id);
    let customer = storage
        .customers
        .find_by_id(id)
        .await?
        .ok_or_else(|| klantboek_core::CoreError::NotFound(format!("no customer with id {id}")))?;

    Ok(Json(CustomerResponse { customer }))
}

/// `POST /customers` — creates a customer from the request body.
#[instrument(name = "create_customer", skip(storage, fields))]
pub async fn create_customer(
    State(storage): State<Storage>,
    Json(fields): Json<NewCustomer>,
) -> Result<(StatusCode, Json<Customer>), ApiError> {
    let customer = storage.customers.create(&fields).await?;
    info!(customer_id = %customer.id, "customer created");

    Ok((StatusCode::CREATED, Json(customer)))
}

/// `PUT /customers/{id}` — applies a partial update to a customer.
#[instrument(name = "update_customer", skip(storage, changes))]
pub async fn update_customer(
    State(storage): State<Storage>,
    Path(id): Path<i64>,
    Json(changes): Json<CustomerUpdate>,
) -> Result<Json<UpdateResponse>, ApiError> {
    let customer = storage.customers.update(CustomerId(id), &changes).await?;
    info!(customer_id = %customer.id, "customer updated");

    Ok(Json(UpdateResponse {
        message: format!("The customer with ID {} is now updated", customer.id),
        customer,
    }))
}

/// `DELETE /customers/{id}` — removes a customer by id.
#[instrument(name = "delete_customer", skip(storage))]
pub async fn delete_customer(
    State(storage): State<Storage>,
    Path(id): Path<i64>,
) -> Result<Json<String>, ApiError> {
    let id = CustomerId(id);
    storage.customers.delete(id).await?;
    info!(customer_id = %id, "customer deleted");

    Ok(Json(format!("The customer with ID {id} has been deleted")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use klantboek_core::CustomerId;

    fn sample() -> Customer {
        Customer {
            id: CustomerId(3),
            first_name: "Paris".to_string(),
            last_name: "Hilton".to_string(),
            city: "Eindhoven".to_string(),
        }
    }

    #[test]
    fn list_envelope_nests_under_customers_key() {
        let body = CustomersResponse { customers: vec![sample()] };
        let json = serde_json::to_value(&body).unwrap();

        assert!(json["customers"].is_array());
        assert_eq!(json["customers"][0]["first_name"], "Paris");
    }

    #[test]
    fn lookup_envelope_nests_under_customer_key() {
        let body = CustomerResponse { customer: sample() };
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["customer"]["id"], 3);
        assert_eq!(json["customer"]["city"], "Eindhoven");
    }

    #[test]
    fn update_envelope_carries_message_and_customer() {
        let customer = sample();
        let body = UpdateResponse {
            message: format!("The customer with ID {} is now updated", customer.id),
            customer,
        };
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["message"], "The customer with ID 3 is now updated");
        assert_eq!(json["customer"]["last_name"], "Hilton");
    }

    #[test]
    fn create_request_body_deserializes_all_fields() {
        let fields: NewCustomer = serde_json::from_str(
            r#"{"first_name": "Paris", "last_name": "Hilton", "city": "Eindhoven"}"#,
        )
        .unwrap();

        assert_eq!(fields.first_name, "Paris");
        assert_eq!(fields.last_name, "Hilton");
        assert_eq!(fields.city, "Eindhoven");
    }
}
