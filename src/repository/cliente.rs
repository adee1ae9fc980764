use diesel::prelude::*;

use crate::{
    db::DbPool,
    domain::cliente::{Cliente, NewCliente, UpdateCliente},
    repository::{ClienteReader, ClienteWriter, errors::RepositoryResult},
};

/// Diesel implementation of [`ClienteReader`] and [`ClienteWriter`].
pub struct DieselClienteRepository<'a> {
    pool: &'a DbPool,
}

impl<'a> DieselClienteRepository<'a> {
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }
}

impl ClienteReader for DieselClienteRepository<'_> {
    fn count(&self) -> RepositoryResult<usize> {
        use crate::schema::clientes;

        let mut conn = self.pool.get()?;
        let total: i64 = clientes::table.count().get_result(&mut conn)?;

        Ok(total as usize)
    }

    fn list(&self, offset: usize, limit: usize) -> RepositoryResult<Vec<Cliente>> {
        use crate::models::cliente::Cliente as DbCliente;
        use crate::schema::clientes;

        let mut conn = self.pool.get()?;
        // Saturate oversized windows; a negative SQLite LIMIT means unlimited.
        let items = clientes::table
            .order(clientes::id.asc())
            .limit(i64::try_from(limit).unwrap_or(i64::MAX))
            .offset(i64::try_from(offset).unwrap_or(i64::MAX))
            .load::<DbCliente>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(items)
    }

    fn list_all(&self) -> RepositoryResult<Vec<Cliente>> {
        use crate::models::cliente::Cliente as DbCliente;
        use crate::schema::clientes;

        let mut conn = self.pool.get()?;
        let items = clientes::table
            .order(clientes::id.asc())
            .load::<DbCliente>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(items)
    }

    fn get_by_id(&self, id: i32) -> RepositoryResult<Option<Cliente>> {
        use crate::models::cliente::Cliente as DbCliente;
        use crate::schema::clientes;

        let mut conn = self.pool.get()?;
        let record = clientes::table
            .find(id)
            .first::<DbCliente>(&mut conn)
            .optional()?;

        Ok(record.map(Into::into))
    }
}

impl ClienteWriter for DieselClienteRepository<'_> {
    fn insert(&self, new_cliente: &NewCliente) -> RepositoryResult<Cliente> {
        use crate::models::cliente::{Cliente as DbCliente, NewCliente as DbNewCliente};
        use crate::schema::clientes;

        let mut conn = self.pool.get()?;
        let insertable: DbNewCliente = new_cliente.into();
        let created = diesel::insert_into(clientes::table)
            .values(&insertable)
            .get_result::<DbCliente>(&mut conn)?;

        Ok(created.into())
    }

    fn update(&self, id: i32, updates: &UpdateCliente) -> RepositoryResult<Option<Cliente>> {
        use crate::models::cliente::{Cliente as DbCliente, UpdateCliente as DbUpdateCliente};
        use crate::schema::clientes;

        let mut conn = self.pool.get()?;
        let changeset: DbUpdateCliente = updates.into();
        let updated = diesel::update(clientes::table.find(id))
            .set(&changeset)
            .get_result::<DbCliente>(&mut conn)
            .optional()?;

        Ok(updated.map(Into::into))
    }

    fn delete_by_id(&self, id: i32) -> RepositoryResult<bool> {
        use crate::schema::clientes;

        let mut conn = self.pool.get()?;
        let deleted = diesel::delete(clientes::table.find(id)).execute(&mut conn)?;

        Ok(deleted > 0)
    }
}
