use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::personal::{NewPersonal, UpdatePersonal};
use crate::forms::validate_phone;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
/// Body of `POST /api/personal`.
pub struct PersonalForm {
    #[serde(default)]
    #[validate(length(min = 1, max = 120, message = "El nombre es obligatorio"))]
    pub name: String,
    #[serde(default)]
    #[validate(custom(function = validate_phone))]
    pub phone: String,
    #[serde(default)]
    #[validate(email(message = "El correo no es válido"))]
    pub email: Option<String>,
    #[serde(default)]
    #[validate(length(max = 120, message = "El puesto es demasiado largo"))]
    pub position: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
/// Body of `PUT /api/personal`: the full record including its id.
pub struct UpdatePersonalForm {
    pub id: i32,
    #[serde(default)]
    #[validate(length(min = 1, max = 120, message = "El nombre es obligatorio"))]
    pub name: String,
    #[serde(default)]
    #[validate(custom(function = validate_phone))]
    pub phone: String,
    #[serde(default)]
    #[validate(email(message = "El correo no es válido"))]
    pub email: Option<String>,
    #[serde(default)]
    #[validate(length(max = 120, message = "El puesto es demasiado largo"))]
    pub position: Option<String>,
}

impl From<&PersonalForm> for NewPersonal {
    fn from(form: &PersonalForm) -> Self {
        NewPersonal::new(
            form.name.clone(),
            form.phone.clone(),
            form.email.clone(),
            form.position.clone(),
        )
    }
}

impl From<&UpdatePersonalForm> for UpdatePersonal {
    fn from(form: &UpdatePersonalForm) -> Self {
        UpdatePersonal::new(
            form.name.clone(),
            form.phone.clone(),
            form.email.clone(),
            form.position.clone(),
        )
    }
}
