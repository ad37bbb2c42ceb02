//! Contains code related to payment authorization. The most important
//! abstraction exposed by this module is [`Authorizer`], which stands in for
//! an external payment processor: it takes non-negligible time to resolve
//! and may decline. Callers must treat it as a black box.

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::sync::Mutex;

use crate::credits::Credits;

mod entities;

pub use entities::{Config, Outcome};

/// A single asynchronous authorization step. Implementations resolve with an
/// [`Outcome`]; they never surface a decline as an error.
#[async_trait]
pub trait Authorizer: Send + Sync {
    async fn initiate(&self, amount: Credits) -> Outcome;
}

/// Simulated payment gateway: a fixed delay followed by an independent
/// random draw per call. The outcome is not influenced by the amount or by
/// any wallet state. Seeding the draw source makes the outcome sequence
/// deterministic, which the tests rely on.
pub struct Simulated {
    config: Config,
    rng: Mutex<StdRng>,
}

impl Simulated {
    pub fn new(config: Config) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            config,
            rng: Mutex::new(rng),
        }
    }
}

#[async_trait]
impl Authorizer for Simulated {
    async fn initiate(&self, amount: Credits) -> Outcome {
        tokio::time::sleep(self.config.delay).await;
        let roll: f64 = self.rng.lock().await.gen();
        let outcome = if roll < self.config.decline_probability {
            Outcome::Declined
        } else {
            Outcome::Approved
        };
        log::debug!("authorization for {:?} credits: {:?}", amount.0, outcome);
        outcome
    }
}
