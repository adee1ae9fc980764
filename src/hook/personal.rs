use serde_json::Value;

use crate::domain::personal::Personal;
use crate::dto::api::{ApiReply, DataResponse, PagedResponse};
use crate::forms::DeleteForm;
use crate::forms::personal::{PersonalForm, UpdatePersonalForm};
use crate::hook::state::Reactive;
use crate::hook::{MSG_UNREACHABLE, exchange, failure_messages};
use crate::pagination::PageParams;

/// Data access for the personal resource.
pub struct PersonalHook {
    http: reqwest::Client,
    base_url: String,
    personal: Reactive<Vec<Personal>>,
    messages: Reactive<Vec<String>>,
}

impl PersonalHook {
    /// `base_url` points at the resource root, e.g.
    /// `http://localhost:3000/api/personal`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            personal: Reactive::default(),
            messages: Reactive::default(),
        }
    }

    /// Snapshot of the last fetched collection.
    pub fn personal(&self) -> Vec<Personal> {
        self.personal.get()
    }

    /// Snapshot of the messages produced by the last call.
    pub fn messages(&self) -> Vec<String> {
        self.messages.get()
    }

    pub fn subscribe_personal(&self) -> tokio::sync::watch::Receiver<Vec<Personal>> {
        self.personal.subscribe()
    }

    pub fn subscribe_messages(&self) -> tokio::sync::watch::Receiver<Vec<String>> {
        self.messages.subscribe()
    }

    /// Fetches one page and replaces the collection with it.
    pub async fn get_personal(&self, params: &PageParams) -> Option<PagedResponse<Personal>> {
        let request = self.http.get(&self.base_url).query(&[
            ("page", params.page.to_string()),
            ("pageSize", params.page_size.to_string()),
        ]);

        match exchange::<PagedResponse<Personal>>(request).await {
            Ok(ApiReply::Success(body)) => {
                self.personal.replace(body.data.clone());
                self.messages
                    .replace(vec!["Personal obtenido".to_string()]);
                Some(body)
            }
            Ok(ApiReply::Failure(err)) => {
                self.messages.replace(failure_messages(err.error));
                None
            }
            Err(_) => {
                self.messages.replace(vec![MSG_UNREACHABLE.to_string()]);
                None
            }
        }
    }

    /// Fetches the full unpaginated list and replaces the collection.
    pub async fn get_all_personal(&self) -> Option<Vec<Personal>> {
        let request = self.http.get(format!("{}/getPersonal", self.base_url));

        match exchange::<DataResponse<Vec<Personal>>>(request).await {
            Ok(ApiReply::Success(body)) => {
                self.personal.replace(body.data.clone());
                self.messages
                    .replace(vec!["Personal obtenido".to_string()]);
                Some(body.data)
            }
            Ok(ApiReply::Failure(err)) => {
                self.messages.replace(failure_messages(err.error));
                None
            }
            Err(_) => {
                self.messages.replace(vec![MSG_UNREACHABLE.to_string()]);
                None
            }
        }
    }

    /// Fetches one record; on success the collection holds just that record.
    pub async fn get_personal_by_id(&self, id: i32) -> Option<Personal> {
        let request = self.http.get(format!("{}/{id}", self.base_url));

        match exchange::<DataResponse<Personal>>(request).await {
            Ok(ApiReply::Success(body)) => {
                self.personal.replace(vec![body.data.clone()]);
                self.messages
                    .replace(vec!["Personal obtenido".to_string()]);
                Some(body.data)
            }
            Ok(ApiReply::Failure(err)) => {
                self.messages.replace(failure_messages(err.error));
                None
            }
            Err(_) => {
                self.messages.replace(vec![MSG_UNREACHABLE.to_string()]);
                None
            }
        }
    }

    /// Looks up records by phone number.
    pub async fn get_personal_by_telefono(&self, telefono: &str) -> Option<Vec<Personal>> {
        let request = self
            .http
            .get(format!("{}/telefono/{telefono}", self.base_url));

        match exchange::<DataResponse<Vec<Personal>>>(request).await {
            Ok(ApiReply::Success(body)) => {
                self.personal.replace(body.data.clone());
                self.messages
                    .replace(vec!["Personal obtenido".to_string()]);
                Some(body.data)
            }
            Ok(ApiReply::Failure(err)) => {
                self.messages.replace(failure_messages(err.error));
                None
            }
            Err(_) => {
                self.messages.replace(vec![MSG_UNREACHABLE.to_string()]);
                None
            }
        }
    }

    /// Creates a record. Validation issues land in the messages state.
    pub async fn set_personal(&self, payload: &PersonalForm) -> Option<Personal> {
        let request = self.http.post(&self.base_url).json(payload);

        match exchange::<DataResponse<Personal>>(request).await {
            Ok(ApiReply::Success(body)) => {
                self.messages
                    .replace(vec!["Personal agregado con éxito".to_string()]);
                Some(body.data)
            }
            Ok(ApiReply::Failure(err)) => {
                self.messages.replace(failure_messages(err.error));
                None
            }
            Err(_) => {
                self.messages.replace(vec![MSG_UNREACHABLE.to_string()]);
                None
            }
        }
    }

    /// Updates a record in place.
    pub async fn update_personal(&self, record: &UpdatePersonalForm) -> Option<Personal> {
        let request = self.http.put(&self.base_url).json(record);

        match exchange::<DataResponse<Personal>>(request).await {
            Ok(ApiReply::Success(body)) => {
                self.messages
                    .replace(vec!["Personal actualizado con éxito".to_string()]);
                Some(body.data)
            }
            Ok(ApiReply::Failure(err)) => {
                self.messages.replace(failure_messages(err.error));
                None
            }
            Err(_) => {
                self.messages.replace(vec![MSG_UNREACHABLE.to_string()]);
                None
            }
        }
    }

    /// Deletes a record by id. The collection is left untouched.
    pub async fn delete_personal(&self, id: i32) -> Option<()> {
        let request = self.http.delete(&self.base_url).json(&DeleteForm { id });

        match exchange::<DataResponse<Value>>(request).await {
            Ok(ApiReply::Success(_)) => {
                self.messages
                    .replace(vec!["Personal eliminado".to_string()]);
                Some(())
            }
            Ok(ApiReply::Failure(err)) => {
                self.messages.replace(failure_messages(err.error));
                None
            }
            Err(_) => {
                self.messages.replace(vec![MSG_UNREACHABLE.to_string()]);
                None
            }
        }
    }
}
