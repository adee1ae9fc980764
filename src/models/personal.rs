use chrono::{NaiveDateTime, Utc};
use diesel::prelude::*;

use crate::domain::personal::{
    NewPersonal as DomainNewPersonal, Personal as DomainPersonal,
    UpdatePersonal as DomainUpdatePersonal,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::personal)]
/// Diesel model for [`crate::domain::personal::Personal`].
pub struct Personal {
    pub id: i32,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub position: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::personal)]
/// Insertable form of [`Personal`].
pub struct NewPersonal<'a> {
    pub name: &'a str,
    pub phone: &'a str,
    pub email: Option<&'a str>,
    pub position: Option<&'a str>,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::personal)]
#[diesel(treat_none_as_null = true)]
/// Data used when updating a [`Personal`] record. Updates replace the full
/// field set, so `None` clears the column instead of skipping it.
pub struct UpdatePersonal<'a> {
    pub name: &'a str,
    pub phone: &'a str,
    pub email: Option<&'a str>,
    pub position: Option<&'a str>,
    pub updated_at: NaiveDateTime,
}

impl From<Personal> for DomainPersonal {
    fn from(personal: Personal) -> Self {
        Self {
            id: personal.id,
            name: personal.name,
            phone: personal.phone,
            email: personal.email,
            position: personal.position,
            created_at: personal.created_at,
            updated_at: personal.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewPersonal> for NewPersonal<'a> {
    fn from(personal: &'a DomainNewPersonal) -> Self {
        Self {
            name: personal.name.as_str(),
            phone: personal.phone.as_str(),
            email: personal.email.as_deref(),
            position: personal.position.as_deref(),
        }
    }
}

impl<'a> From<&'a DomainUpdatePersonal> for UpdatePersonal<'a> {
    fn from(personal: &'a DomainUpdatePersonal) -> Self {
        Self {
            name: personal.name.as_str(),
            phone: personal.phone.as_str(),
            email: personal.email.as_deref(),
            position: personal.position.as_deref(),
            updated_at: Utc::now().naive_utc(),
        }
    }
}
