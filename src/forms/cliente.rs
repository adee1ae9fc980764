use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::cliente::{NewCliente, UpdateCliente};
use crate::forms::validate_phone;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
/// Body of `POST /api/clientes`.
pub struct ClienteForm {
    #[serde(default)]
    #[validate(length(min = 1, max = 120, message = "El nombre es obligatorio"))]
    pub name: String,
    #[serde(default)]
    #[validate(custom(function = validate_phone))]
    pub phone: Option<String>,
    #[serde(default)]
    #[validate(email(message = "El correo no es válido"))]
    pub email: Option<String>,
    #[serde(default)]
    #[validate(length(max = 250, message = "La dirección es demasiado larga"))]
    pub address: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
/// Body of `PUT /api/clientes`: the full record including its id.
pub struct UpdateClienteForm {
    pub id: i32,
    #[serde(default)]
    #[validate(length(min = 1, max = 120, message = "El nombre es obligatorio"))]
    pub name: String,
    #[serde(default)]
    #[validate(custom(function = validate_phone))]
    pub phone: Option<String>,
    #[serde(default)]
    #[validate(email(message = "El correo no es válido"))]
    pub email: Option<String>,
    #[serde(default)]
    #[validate(length(max = 250, message = "La dirección es demasiado larga"))]
    pub address: Option<String>,
}

impl From<&ClienteForm> for NewCliente {
    fn from(form: &ClienteForm) -> Self {
        NewCliente::new(
            form.name.clone(),
            form.phone.clone(),
            form.email.clone(),
            form.address.clone(),
        )
    }
}

impl From<&UpdateClienteForm> for UpdateCliente {
    fn from(form: &UpdateClienteForm) -> Self {
        UpdateCliente::new(
            form.name.clone(),
            form.phone.clone(),
            form.email.clone(),
            form.address.clone(),
        )
    }
}
