//! Storage traits the controllers depend on, plus their Diesel
//! implementations.
//!
//! Listing is split in two modes: `list` takes the offset/limit window the
//! pagination engine computed, `list_all` returns the full ordered sequence.
//! Both order by ascending id so repeated calls observe the same sequence.

use crate::domain::cliente::{Cliente, NewCliente, UpdateCliente};
use crate::domain::personal::{NewPersonal, Personal, UpdatePersonal};
use crate::repository::errors::RepositoryResult;

pub mod cliente;
pub mod errors;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod personal;

pub trait PersonalReader {
    fn count(&self) -> RepositoryResult<usize>;
    fn list(&self, offset: usize, limit: usize) -> RepositoryResult<Vec<Personal>>;
    fn list_all(&self) -> RepositoryResult<Vec<Personal>>;
    fn get_by_id(&self, id: i32) -> RepositoryResult<Option<Personal>>;
    fn get_by_phone(&self, phone: &str) -> RepositoryResult<Vec<Personal>>;
}

pub trait PersonalWriter {
    fn insert(&self, new_personal: &NewPersonal) -> RepositoryResult<Personal>;
    fn update(&self, id: i32, updates: &UpdatePersonal) -> RepositoryResult<Option<Personal>>;
    fn delete_by_id(&self, id: i32) -> RepositoryResult<bool>;
}

pub trait ClienteReader {
    fn count(&self) -> RepositoryResult<usize>;
    fn list(&self, offset: usize, limit: usize) -> RepositoryResult<Vec<Cliente>>;
    fn list_all(&self) -> RepositoryResult<Vec<Cliente>>;
    fn get_by_id(&self, id: i32) -> RepositoryResult<Option<Cliente>>;
}

pub trait ClienteWriter {
    fn insert(&self, new_cliente: &NewCliente) -> RepositoryResult<Cliente>;
    fn update(&self, id: i32, updates: &UpdateCliente) -> RepositoryResult<Option<Cliente>>;
    fn delete_by_id(&self, id: i32) -> RepositoryResult<bool>;
}
