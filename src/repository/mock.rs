//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::cliente::{Cliente, NewCliente, UpdateCliente};
use crate::domain::personal::{NewPersonal, Personal, UpdatePersonal};
use crate::repository::errors::RepositoryResult;
use crate::repository::{ClienteReader, ClienteWriter, PersonalReader, PersonalWriter};

mock! {
    pub PersonalRepository {}

    impl PersonalReader for PersonalRepository {
        fn count(&self) -> RepositoryResult<usize>;
        fn list(&self, offset: usize, limit: usize) -> RepositoryResult<Vec<Personal>>;
        fn list_all(&self) -> RepositoryResult<Vec<Personal>>;
        fn get_by_id(&self, id: i32) -> RepositoryResult<Option<Personal>>;
        fn get_by_phone(&self, phone: &str) -> RepositoryResult<Vec<Personal>>;
    }

    impl PersonalWriter for PersonalRepository {
        fn insert(&self, new_personal: &NewPersonal) -> RepositoryResult<Personal>;
        fn update(&self, id: i32, updates: &UpdatePersonal) -> RepositoryResult<Option<Personal>>;
        fn delete_by_id(&self, id: i32) -> RepositoryResult<bool>;
    }
}

mock! {
    pub ClienteRepository {}

    impl ClienteReader for ClienteRepository {
        fn count(&self) -> RepositoryResult<usize>;
        fn list(&self, offset: usize, limit: usize) -> RepositoryResult<Vec<Cliente>>;
        fn list_all(&self) -> RepositoryResult<Vec<Cliente>>;
        fn get_by_id(&self, id: i32) -> RepositoryResult<Option<Cliente>>;
    }

    impl ClienteWriter for ClienteRepository {
        fn insert(&self, new_cliente: &NewCliente) -> RepositoryResult<Cliente>;
        fn update(&self, id: i32, updates: &UpdateCliente) -> RepositoryResult<Option<Cliente>>;
        fn delete_by_id(&self, id: i32) -> RepositoryResult<bool>;
    }
}
