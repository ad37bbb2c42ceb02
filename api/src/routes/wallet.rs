//! Routes for querying and topping up wallets.

use rocket::{
    get, post,
    serde::json::{Json, Value},
    State,
};
use rocket_okapi::openapi;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use app::{credits::Credits, topup, user, wallet};

use crate::{
    error::{self, JsonResult},
    state::RocketState,
};

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub(super) struct WalletResponse {
    /// Current wallet balance in credits.
    balance: i64,
    /// Estimated talktime the balance buys, e.g. "20 minutes".
    estimated_talktime: String,
}

impl WalletResponse {
    fn from_entity(wallet: &wallet::Wallet) -> Self {
        Self {
            balance: wallet.balance().0,
            estimated_talktime: wallet.estimated_talktime().to_string(),
        }
    }
}

#[derive(Debug, Deserialize, JsonSchema)]
pub(super) struct TopUpRequest {
    /// Amount of credits to add. Must be a positive whole number.
    amount: Option<Value>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub(super) struct TopUpResponse {
    /// Wallet balance after the top-up.
    balance: i64,
    /// Estimated talktime the new balance buys.
    estimated_talktime: String,
    message: String,
}

/// Get wallet details for a user.
#[openapi(tag = "Wallet")]
#[get("/wallet/<user_id>")]
pub(super) async fn get(
    state: &State<RocketState>,
    user_id: String,
) -> JsonResult<WalletResponse> {
    let wallet = state
        .wallets
        .get(&user::Id(user_id))
        .await
        .ok_or_else(|| error::not_found("Wallet not found."))?;
    Ok(Json(WalletResponse::from_entity(&wallet)))
}

/// Top up a user's wallet. The amount is first authorized against the
/// payment gateway; only an approved payment credits the wallet. A declined
/// payment can simply be resubmitted.
#[openapi(tag = "Wallet")]
#[post("/wallet/<user_id>/top-up", data = "<request>")]
pub(super) async fn top_up(
    state: &State<RocketState>,
    user_id: String,
    request: Json<TopUpRequest>,
) -> JsonResult<TopUpResponse> {
    // Amounts are whole credit units; anything else in the `amount` field is
    // rejected before the flow runs.
    let amount = match request.amount.as_ref().and_then(Value::as_i64) {
        Some(amount) => Credits(amount),
        None => return Err(error::bad_request("Invalid amount.")),
    };

    let wallet = topup::top_up(
        state.wallets.as_ref(),
        state.payments.as_ref(),
        &user::Id(user_id),
        amount,
    )
    .await
    .map_err(|e| match e {
        topup::Error::InvalidAmount => error::bad_request("Invalid amount."),
        topup::Error::PaymentDeclined => error::bad_request("Payment failed. Try again."),
        topup::Error::WalletNotFound => error::not_found("Wallet not found."),
    })?;

    Ok(Json(TopUpResponse {
        balance: wallet.balance().0,
        estimated_talktime: wallet.estimated_talktime().to_string(),
        message: "Wallet topped up successfully.".to_owned(),
    }))
}
