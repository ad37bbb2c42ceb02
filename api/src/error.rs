use rocket::{http::Status, serde::json::Json};
use schemars::JsonSchema;
use serde::Serialize;

/// The wire shape of every non-2xx response, and of the plain-message
/// success responses.
#[derive(Debug, Serialize, JsonSchema)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_owned(),
        }
    }
}

pub type JsonError = (Status, Json<Message>);

pub type JsonResult<T> = Result<Json<T>, JsonError>;

pub fn bad_request(message: &str) -> JsonError {
    (Status::BadRequest, Json(Message::new(message)))
}

pub fn not_found(message: &str) -> JsonError {
    (Status::NotFound, Json(Message::new(message)))
}
