use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One staff member of the directory.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct Personal {
    pub id: i32,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub position: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewPersonal {
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub position: Option<String>,
}

impl NewPersonal {
    #[must_use]
    pub fn new(
        name: String,
        phone: String,
        email: Option<String>,
        position: Option<String>,
    ) -> Self {
        Self {
            name: name.trim().to_string(),
            phone: phone.trim().to_string(),
            email: email
                .map(|s| s.to_lowercase().trim().to_string())
                .filter(|s| !s.is_empty()),
            position: position
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct UpdatePersonal {
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub position: Option<String>,
}

impl UpdatePersonal {
    #[must_use]
    pub fn new(
        name: String,
        phone: String,
        email: Option<String>,
        position: Option<String>,
    ) -> Self {
        Self {
            name: name.trim().to_string(),
            phone: phone.trim().to_string(),
            email: email
                .map(|s| s.to_lowercase().trim().to_string())
                .filter(|s| !s.is_empty()),
            position: position
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
        }
    }
}
