//! Routes for user registration.

use rocket::{http::Status, post, serde::json::Json, State};
use rocket_okapi::{openapi, JsonSchema};
use serde::Deserialize;

use app::user;

use crate::{
    error::{self, JsonError, Message},
    state::RocketState,
};

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub(super) struct RegisterRequest {
    /// Identifier of the user to register.
    user_id: String,
}

/// Register a new user. Registration creates the user's wallet with a zero
/// balance; registering the same id twice fails and leaves the original
/// wallet untouched.
#[openapi(tag = "User")]
#[post("/register", data = "<request>")]
pub(super) async fn register(
    state: &State<RocketState>,
    request: Json<RegisterRequest>,
) -> Result<(Status, Json<Message>), JsonError> {
    let id = user::Id(request.into_inner().user_id);
    match user::register(&state.users, state.wallets.as_ref(), id).await {
        Ok(_) => Ok((
            Status::Created,
            Json(Message::new("User registered and wallet created.")),
        )),
        Err(user::Error::UserAlreadyExists) => Err(error::bad_request("User already registered.")),
    }
}
