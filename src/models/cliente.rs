use chrono::{NaiveDateTime, Utc};
use diesel::prelude::*;

use crate::domain::cliente::{
    Cliente as DomainCliente, NewCliente as DomainNewCliente,
    UpdateCliente as DomainUpdateCliente,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::clientes)]
/// Diesel model for [`crate::domain::cliente::Cliente`].
pub struct Cliente {
    pub id: i32,
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::clientes)]
/// Insertable form of [`Cliente`].
pub struct NewCliente<'a> {
    pub name: &'a str,
    pub phone: Option<&'a str>,
    pub email: Option<&'a str>,
    pub address: Option<&'a str>,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::clientes)]
#[diesel(treat_none_as_null = true)]
/// Data used when updating a [`Cliente`] record.
pub struct UpdateCliente<'a> {
    pub name: &'a str,
    pub phone: Option<&'a str>,
    pub email: Option<&'a str>,
    pub address: Option<&'a str>,
    pub updated_at: NaiveDateTime,
}

impl From<Cliente> for DomainCliente {
    fn from(cliente: Cliente) -> Self {
        Self {
            id: cliente.id,
            name: cliente.name,
            phone: cliente.phone,
            email: cliente.email,
            address: cliente.address,
            created_at: cliente.created_at,
            updated_at: cliente.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewCliente> for NewCliente<'a> {
    fn from(cliente: &'a DomainNewCliente) -> Self {
        Self {
            name: cliente.name.as_str(),
            phone: cliente.phone.as_deref(),
            email: cliente.email.as_deref(),
            address: cliente.address.as_deref(),
        }
    }
}

impl<'a> From<&'a DomainUpdateCliente> for UpdateCliente<'a> {
    fn from(cliente: &'a DomainUpdateCliente) -> Self {
        Self {
            name: cliente.name.as_str(),
            phone: cliente.phone.as_deref(),
            email: cliente.email.as_deref(),
            address: cliente.address.as_deref(),
            updated_at: Utc::now().naive_utc(),
        }
    }
}
