use std::time::Duration;

use app::{payment, user, wallet};
use rocket::{launch, Build, Rocket};
use serde::Deserialize;

const PORT: u16 = 5000;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Config {
    payment: PaymentConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct PaymentConfig {
    delay_ms: u64,
    decline_probability: f64,
    seed: Option<u64>,
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            delay_ms: 2000,
            decline_probability: 0.2,
            seed: None,
        }
    }
}

impl PaymentConfig {
    fn into_payment_config(self) -> payment::Config {
        payment::Config {
            delay: Duration::from_millis(self.delay_ms),
            decline_probability: self.decline_probability,
            seed: self.seed,
        }
    }
}

#[launch]
async fn rocket() -> _ {
    start_server().await
}

async fn start_server() -> Rocket<Build> {
    env_logger::init();

    let figment = rocket::Config::figment().merge(("port", PORT));
    let rocket = Rocket::custom(figment);
    let config: Config = rocket.figment().extract().unwrap();

    log::info!("starting top-up backend on port {}", PORT);
    let payments = payment::Simulated::new(config.payment.into_payment_config());

    api::register(
        rocket,
        user::Directory::new(),
        Box::new(wallet::InMemoryStore::new()),
        Box::new(payments),
    )
}
