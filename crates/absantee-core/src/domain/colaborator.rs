//! Colaborator domain types.

use serde::{Deserialize, Serialize};

use crate::schema::ColumnValue;

/// A persisted colaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Colaborator {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub street: String,
    pub postal_code: String,
}

impl Colaborator {
    /// Column values in `schema::COLABORATOR` order.
    pub fn column_values(&self) -> Vec<ColumnValue> {
        vec![
            self.name.as_str().into(),
            self.email.as_str().into(),
            self.street.as_str().into(),
            self.postal_code.as_str().into(),
        ]
    }
}

/// Data for creating a new colaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewColaborator {
    pub name: String,
    pub email: String,
    pub street: String,
    pub postal_code: String,
}

impl NewColaborator {
    /// Column values in `schema::COLABORATOR` order.
    pub fn column_values(&self) -> Vec<ColumnValue> {
        vec![
            self.name.as_str().into(),
            self.email.as_str().into(),
            self.street.as_str().into(),
            self.postal_code.as_str().into(),
        ]
    }

    /// Attach a store-assigned id.
    pub fn with_id(self, id: i64) -> Colaborator {
        Colaborator {
            id,
            name: self.name,
            email: self.email,
            street: self.street,
            postal_code: self.postal_code,
        }
    }
}
