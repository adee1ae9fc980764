use validator::Validate;

use crate::domain::cliente::{Cliente, NewCliente, UpdateCliente};
use crate::forms::cliente::{ClienteForm, UpdateClienteForm};
use crate::forms::issues;
use crate::pagination::{PageMeta, PageParams, PageWindow};
use crate::repository::{ClienteReader, ClienteWriter};
use crate::services::{ServiceError, ServiceResult};

/// Returns one page of cliente records with its pagination metadata.
pub fn list_clientes<R>(repo: &R, params: &PageParams) -> ServiceResult<(PageMeta, Vec<Cliente>)>
where
    R: ClienteReader + ?Sized,
{
    let total = repo.count()?;
    let window = PageWindow::compute(total, params);

    let items = if total == 0 {
        Vec::new()
    } else {
        repo.list(window.offset, window.limit)?
    };

    Ok((window.meta, items))
}

/// Returns the full ordered cliente list, bypassing pagination.
pub fn list_all_clientes<R>(repo: &R) -> ServiceResult<Vec<Cliente>>
where
    R: ClienteReader + ?Sized,
{
    repo.list_all().map_err(ServiceError::from)
}

/// Fetches one record by its identifier.
pub fn get_cliente_by_id<R>(repo: &R, id: i32) -> ServiceResult<Cliente>
where
    R: ClienteReader + ?Sized,
{
    repo.get_by_id(id)?.ok_or(ServiceError::NotFound)
}

/// Validates and persists a new record.
pub fn create_cliente<R>(repo: &R, form: &ClienteForm) -> ServiceResult<Cliente>
where
    R: ClienteWriter + ?Sized,
{
    if let Err(errors) = form.validate() {
        return Err(ServiceError::Validation(issues(&errors)));
    }

    let new_cliente = NewCliente::from(form);
    Ok(repo.insert(&new_cliente)?)
}

/// Validates and applies a full-record update.
pub fn update_cliente<R>(repo: &R, form: &UpdateClienteForm) -> ServiceResult<Cliente>
where
    R: ClienteWriter + ?Sized,
{
    if let Err(errors) = form.validate() {
        return Err(ServiceError::Validation(issues(&errors)));
    }

    let updates = UpdateCliente::from(form);
    repo.update(form.id, &updates)?.ok_or(ServiceError::NotFound)
}

/// Removes a record by id.
pub fn delete_cliente<R>(repo: &R, id: i32) -> ServiceResult<()>
where
    R: ClienteWriter + ?Sized,
{
    if repo.delete_by_id(id)? {
        Ok(())
    } else {
        Err(ServiceError::NotFound)
    }
}
