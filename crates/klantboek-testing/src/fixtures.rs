//! Fixture builders for customer test data.

use klantboek_core::NewCustomer;

/// Builder for customer field sets with valid defaults.
///
/// Defaults satisfy every constraint, so tests only override the field
/// they are exercising.
#[derive(Debug, Clone)]
pub struct CustomerBuilder {
    first_name: String,
    last_name: String,
    city: String,
}

impl Default for CustomerBuilder {
    fn default() -> Self {
        Self {
            first_name: "Paris".to_string(),
            last_name: "Hilton".to_string(),
            city: "Eindhoven".to_string(),
        }
    }
}

impl CustomerBuilder {
    /// Creates a builder with valid default fields.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the first name.
    #[must_use]
    pub fn first_name(mut self, name: &str) -> Self {
        self.first_name = name.to_string();
        self
    }

    /// Overrides the last name.
    #[must_use]
    pub fn last_name(mut self, name: &str) -> Self {
        self.last_name = name.to_string();
        self
    }

    /// Overrides the city.
    #[must_use]
    pub fn city(mut self, city: &str) -> Self {
        self.city = city.to_string();
        self
    }

    /// Builds the field set.
    pub fn build(self) -> NewCustomer {
        NewCustomer { first_name: self.first_name, last_name: self.last_name, city: self.city }
    }
}
