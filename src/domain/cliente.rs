use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One customer record.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct Cliente {
    pub id: i32,
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewCliente {
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
}

impl NewCliente {
    #[must_use]
    pub fn new(
        name: String,
        phone: Option<String>,
        email: Option<String>,
        address: Option<String>,
    ) -> Self {
        Self {
            name: name.trim().to_string(),
            phone: phone
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            email: email
                .map(|s| s.to_lowercase().trim().to_string())
                .filter(|s| !s.is_empty()),
            address: address
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct UpdateCliente {
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
}

impl UpdateCliente {
    #[must_use]
    pub fn new(
        name: String,
        phone: Option<String>,
        email: Option<String>,
        address: Option<String>,
    ) -> Self {
        Self {
            name: name.trim().to_string(),
            phone: phone
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            email: email
                .map(|s| s.to_lowercase().trim().to_string())
                .filter(|s| !s.is_empty()),
            address: address
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
        }
    }
}
