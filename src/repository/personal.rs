use diesel::prelude::*;

use crate::{
    db::DbPool,
    domain::personal::{NewPersonal, Personal, UpdatePersonal},
    repository::{PersonalReader, PersonalWriter, errors::RepositoryResult},
};

/// Diesel implementation of [`PersonalReader`] and [`PersonalWriter`].
pub struct DieselPersonalRepository<'a> {
    pool: &'a DbPool,
}

impl<'a> DieselPersonalRepository<'a> {
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }
}

impl PersonalReader for DieselPersonalRepository<'_> {
    fn count(&self) -> RepositoryResult<usize> {
        use crate::schema::personal;

        let mut conn = self.pool.get()?;
        let total: i64 = personal::table.count().get_result(&mut conn)?;

        Ok(total as usize)
    }

    fn list(&self, offset: usize, limit: usize) -> RepositoryResult<Vec<Personal>> {
        use crate::models::personal::Personal as DbPersonal;
        use crate::schema::personal;

        let mut conn = self.pool.get()?;
        // Saturate oversized windows; a negative SQLite LIMIT means unlimited.
        let items = personal::table
            .order(personal::id.asc())
            .limit(i64::try_from(limit).unwrap_or(i64::MAX))
            .offset(i64::try_from(offset).unwrap_or(i64::MAX))
            .load::<DbPersonal>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(items)
    }

    fn list_all(&self) -> RepositoryResult<Vec<Personal>> {
        use crate::models::personal::Personal as DbPersonal;
        use crate::schema::personal;

        let mut conn = self.pool.get()?;
        let items = personal::table
            .order(personal::id.asc())
            .load::<DbPersonal>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(items)
    }

    fn get_by_id(&self, id: i32) -> RepositoryResult<Option<Personal>> {
        use crate::models::personal::Personal as DbPersonal;
        use crate::schema::personal;

        let mut conn = self.pool.get()?;
        let record = personal::table
            .find(id)
            .first::<DbPersonal>(&mut conn)
            .optional()?;

        Ok(record.map(Into::into))
    }

    fn get_by_phone(&self, phone: &str) -> RepositoryResult<Vec<Personal>> {
        use crate::models::personal::Personal as DbPersonal;
        use crate::schema::personal;

        let mut conn = self.pool.get()?;
        let items = personal::table
            .filter(personal::phone.eq(phone))
            .order(personal::id.asc())
            .load::<DbPersonal>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(items)
    }
}

impl PersonalWriter for DieselPersonalRepository<'_> {
    fn insert(&self, new_personal: &NewPersonal) -> RepositoryResult<Personal> {
        use crate::models::personal::{NewPersonal as DbNewPersonal, Personal as DbPersonal};
        use crate::schema::personal;

        let mut conn = self.pool.get()?;
        let insertable: DbNewPersonal = new_personal.into();
        let created = diesel::insert_into(personal::table)
            .values(&insertable)
            .get_result::<DbPersonal>(&mut conn)?;

        Ok(created.into())
    }

    fn update(&self, id: i32, updates: &UpdatePersonal) -> RepositoryResult<Option<Personal>> {
        use crate::models::personal::{Personal as DbPersonal, UpdatePersonal as DbUpdatePersonal};
        use crate::schema::personal;

        let mut conn = self.pool.get()?;
        let changeset: DbUpdatePersonal = updates.into();
        let updated = diesel::update(personal::table.find(id))
            .set(&changeset)
            .get_result::<DbPersonal>(&mut conn)
            .optional()?;

        Ok(updated.map(Into::into))
    }

    fn delete_by_id(&self, id: i32) -> RepositoryResult<bool> {
        use crate::schema::personal;

        let mut conn = self.pool.get()?;
        let deleted = diesel::delete(personal::table.find(id)).execute(&mut conn)?;

        Ok(deleted > 0)
    }
}
