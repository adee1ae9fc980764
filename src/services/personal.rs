use validator::Validate;

use crate::domain::personal::{NewPersonal, Personal, UpdatePersonal};
use crate::forms::issues;
use crate::forms::personal::{PersonalForm, UpdatePersonalForm};
use crate::pagination::{PageMeta, PageParams, PageWindow};
use crate::repository::{PersonalReader, PersonalWriter};
use crate::services::{ServiceError, ServiceResult};

/// Returns one page of personal records with its pagination metadata.
pub fn list_personal<R>(repo: &R, params: &PageParams) -> ServiceResult<(PageMeta, Vec<Personal>)>
where
    R: PersonalReader + ?Sized,
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

/// Returns the full ordered personal list, bypassing pagination.
pub fn list_all_personal<R>(repo: &R) -> ServiceResult<Vec<Personal>>
where
    R: PersonalReader + ?Sized,
{
    repo.list_all().map_err(ServiceError::from)
}

/// Fetches one record by its identifier.
pub fn get_personal_by_id<R>(repo: &R, id: i32) -> ServiceResult<Personal>
where
    R: PersonalReader + ?Sized,
{
    repo.get_by_id(id)?.ok_or(ServiceError::NotFound)
}

/// Looks up records by phone number. Zero matches is a valid outcome.
pub fn get_personal_by_phone<R>(repo: &R, phone: &str) -> ServiceResult<Vec<Personal>>
where
    R: PersonalReader + ?Sized,
{
    repo.get_by_phone(phone).map_err(ServiceError::from)
}

/// Validates and persists a new record. Storage is never touched when the
/// payload fails validation.
pub fn create_personal<R>(repo: &R, form: &PersonalForm) -> ServiceResult<Personal>
where
    R: PersonalWriter + ?Sized,
{
    if let Err(errors) = form.validate() {
        return Err(ServiceError::Validation(issues(&errors)));
    }

    let new_personal = NewPersonal::from(form);
    Ok(repo.insert(&new_personal)?)
}

/// Validates and applies a full-record update.
pub fn update_personal<R>(repo: &R, form: &UpdatePersonalForm) -> ServiceResult<Personal>
where
    R: PersonalWriter + ?Sized,
{
    if let Err(errors) = form.validate() {
        return Err(ServiceError::Validation(issues(&errors)));
    }

    let updates = UpdatePersonal::from(form);
    repo.update(form.id, &updates)?.ok_or(ServiceError::NotFound)
}

/// Removes a record by id.
pub fn delete_personal<R>(repo: &R, id: i32) -> ServiceResult<()>
where
    R: PersonalWriter + ?Sized,
{
    if repo.delete_by_id(id)? {
        Ok(())
    } else {
        Err(ServiceError::NotFound)
    }
}
