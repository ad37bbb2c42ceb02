use std::time::Duration;

/// The result of a payment authorization. A decline is an expected outcome,
/// not an error; authorization never fails in any other way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Approved,
    Declined,
}

/// Settings for the simulated gateway.
#[derive(Debug, Clone)]
pub struct Config {
    /// How long an authorization takes to resolve.
    pub delay: Duration,
    /// Probability in `[0, 1]` that an authorization is declined.
    pub decline_probability: f64,
    /// Seed for the outcome source. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            delay: Duration::from_secs(2),
            decline_probability: 0.2,
            seed: None,
        }
    }
}
