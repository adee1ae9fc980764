//! Caller-side data access over the HTTP API.
//!
//! Each hook wraps one resource's endpoints and keeps two pieces of
//! reactive state: the last fetched collection and a queue of user-facing
//! messages. Both are replaced wholesale on every call. No failure escapes
//! past a hook: everything terminates in the messages state, and the
//! return value is a payload-or-`None` signal for caller control flow.
//!
//! Rapid overlapping calls on the same hook are not serialized against each
//! other: whichever response resolves last overwrites the shared state.

use serde::de::DeserializeOwned;

use crate::dto::api::{ApiReply, ErrorBody};

pub mod cliente;
pub mod personal;
pub mod state;

/// Message shown when the request never produced a readable envelope.
pub const MSG_UNREACHABLE: &str = "No fue posible conectarse con el servidor";

/// Translates a failure envelope into the display message sequence.
pub(crate) fn failure_messages(error: ErrorBody) -> Vec<String> {
    match error {
        ErrorBody::Issues { issues } => issues.into_iter().map(|issue| issue.message).collect(),
        ErrorBody::Message { message } => vec![message],
    }
}

/// Sends the request and reads either side of the envelope. Transport
/// failures and unreadable bodies both surface as the reqwest error.
pub(crate) async fn exchange<T: DeserializeOwned>(
    request: reqwest::RequestBuilder,
) -> Result<ApiReply<T>, reqwest::Error> {
    let response = request.send().await?;
    response.json::<ApiReply<T>>().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::api::ValidationIssue;

    #[test]
    fn issue_texts_become_the_message_sequence() {
        let messages = failure_messages(ErrorBody::Issues {
            issues: vec![
                ValidationIssue {
                    field: "name".to_string(),
                    message: "El nombre es obligatorio".to_string(),
                },
                ValidationIssue {
                    field: "phone".to_string(),
                    message: "El teléfono no es válido".to_string(),
                },
            ],
        });
        assert_eq!(
            messages,
            ["El nombre es obligatorio", "El teléfono no es válido"]
        );
    }

    #[test]
    fn generic_failures_become_a_single_message() {
        let messages = failure_messages(ErrorBody::Message {
            message: "Registro no encontrado".to_string(),
        });
        assert_eq!(messages, ["Registro no encontrado"]);
    }
}
