use serde_json::Value;

use crate::domain::cliente::Cliente;
use crate::dto::api::{ApiReply, DataResponse, PagedResponse};
use crate::forms::DeleteForm;
use crate::forms::cliente::{ClienteForm, UpdateClienteForm};
use crate::hook::state::Reactive;
use crate::hook::{MSG_UNREACHABLE, exchange, failure_messages};
use crate::pagination::PageParams;

/// Data access for the clientes resource.
pub struct ClienteHook {
    http: reqwest::Client,
    base_url: String,
    clientes: Reactive<Vec<Cliente>>,
    messages: Reactive<Vec<String>>,
}

impl ClienteHook {
    /// `base_url` points at the resource root, e.g.
    /// `http://localhost:3000/api/clientes`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            clientes: Reactive::default(),
            messages: Reactive::default(),
        }
    }

    /// Snapshot of the last fetched collection.
    pub fn clientes(&self) -> Vec<Cliente> {
        self.clientes.get()
    }

    /// Snapshot of the messages produced by the last call.
    pub fn messages(&self) -> Vec<String> {
        self.messages.get()
    }

    pub fn subscribe_clientes(&self) -> tokio::sync::watch::Receiver<Vec<Cliente>> {
        self.clientes.subscribe()
    }

    pub fn subscribe_messages(&self) -> tokio::sync::watch::Receiver<Vec<String>> {
        self.messages.subscribe()
    }

    /// Fetches one page and replaces the collection with it.
    pub async fn get_clientes(&self, params: &PageParams) -> Option<PagedResponse<Cliente>> {
        let request = self.http.get(&self.base_url).query(&[
            ("page", params.page.to_string()),
            ("pageSize", params.page_size.to_string()),
        ]);

        match exchange::<PagedResponse<Cliente>>(request).await {
            Ok(ApiReply::Success(body)) => {
                self.clientes.replace(body.data.clone());
                self.messages
                    .replace(vec!["Clientes obtenidos".to_string()]);
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
    pub async fn get_all_clientes(&self) -> Option<Vec<Cliente>> {
        let request = self.http.get(format!("{}/getClientes", self.base_url));

        match exchange::<DataResponse<Vec<Cliente>>>(request).await {
            Ok(ApiReply::Success(body)) => {
                self.clientes.replace(body.data.clone());
                self.messages
                    .replace(vec!["Clientes obtenidos".to_string()]);
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
    pub async fn get_cliente_by_id(&self, id: i32) -> Option<Cliente> {
        let request = self.http.get(format!("{}/{id}", self.base_url));

        match exchange::<DataResponse<Cliente>>(request).await {
            Ok(ApiReply::Success(body)) => {
                self.clientes.replace(vec![body.data.clone()]);
                self.messages
                    .replace(vec!["Cliente obtenido".to_string()]);
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
    pub async fn set_cliente(&self, payload: &ClienteForm) -> Option<Cliente> {
        let request = self.http.post(&self.base_url).json(payload);

        match exchange::<DataResponse<Cliente>>(request).await {
            Ok(ApiReply::Success(body)) => {
                self.messages
                    .replace(vec!["Cliente agregado con éxito".to_string()]);
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
    pub async fn update_cliente(&self, record: &UpdateClienteForm) -> Option<Cliente> {
        let request = self.http.put(&self.base_url).json(record);

        match exchange::<DataResponse<Cliente>>(request).await {
            Ok(ApiReply::Success(body)) => {
                self.messages
                    .replace(vec!["Cliente actualizado con éxito".to_string()]);
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
    pub async fn delete_cliente(&self, id: i32) -> Option<()> {
        let request = self.http.delete(&self.base_url).json(&DeleteForm { id });

        match exchange::<DataResponse<Value>>(request).await {
            Ok(ApiReply::Success(_)) => {
                self.messages
                    .replace(vec!["Cliente eliminado".to_string()]);
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
