//! This library contains definitions for the API layer.

use app::{payment, user, wallet};
use rocket::{Build, Rocket};
use state::RocketState;

mod error;
mod routes;
mod state;

pub fn register(
    rocket: Rocket<Build>,
    users: user::Directory,
    wallets: Box<dyn wallet::Store>,
    payments: Box<dyn payment::Authorizer>,
) -> Rocket<Build> {
    routes::register(
        rocket,
        RocketState {
            users,
            wallets,
            payments,
        },
    )
}
