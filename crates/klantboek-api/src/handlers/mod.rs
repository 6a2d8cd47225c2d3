//! Route handlers for the customer API.

pub mod customers;
pub mod health;

pub use customers::{
    create_customer, delete_customer, get_customer, list_customers, update_customer,
};
pub use health::{health_check, liveness_check};
