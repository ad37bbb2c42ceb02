//! The top-up flow: validate the amount, authorize the payment, credit the
//! wallet. Authorization happens before the wallet is looked up, so a
//! decline never touches any state.

use thiserror::Error;

use crate::credits::Credits;
use crate::payment::{self, Outcome};
use crate::user;
use crate::wallet;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("top-up amount must be a positive number")]
    InvalidAmount,
    #[error("no wallet exists for this user")]
    WalletNotFound,
    #[error("payment authorization was declined")]
    PaymentDeclined,
}

/// Runs one top-up request to a terminal outcome. On success the updated
/// wallet snapshot is returned; on any error no balance has changed. There
/// are no internal retries: a declined payment is reported to the caller,
/// who may resubmit.
pub async fn top_up(
    wallets: &dyn wallet::Store,
    payments: &dyn payment::Authorizer,
    user_id: &user::Id,
    amount: Credits,
) -> Result<wallet::Wallet, Error> {
    if amount <= Credits::ZERO {
        return Err(Error::InvalidAmount);
    }
    match payments.initiate(amount).await {
        Outcome::Declined => Err(Error::PaymentDeclined),
        Outcome::Approved => wallets
            .top_up(user_id, amount)
            .await
            .ok_or(Error::WalletNotFound),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wallet::Store;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Fixed-outcome authorizer that counts how often it is invoked.
    struct FixedAuthorizer {
        outcome: Outcome,
        calls: AtomicUsize,
    }

    impl FixedAuthorizer {
        fn new(outcome: Outcome) -> Self {
            Self {
                outcome,
                calls: AtomicUsize::new(0),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl payment::Authorizer for FixedAuthorizer {
        async fn initiate(&self, _amount: Credits) -> Outcome {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.outcome
        }
    }

    fn alice() -> user::Id {
        user::Id("alice".to_owned())
    }

    async fn registered_store() -> wallet::InMemoryStore {
        let store = wallet::InMemoryStore::new();
        store.create(alice()).await;
        store
    }

    #[tokio::test]
    async fn non_positive_amounts_are_rejected_without_payment() {
        let wallets = registered_store().await;
        let payments = FixedAuthorizer::new(Outcome::Approved);

        for amount in [Credits(0), Credits(-5)] {
            let err = top_up(&wallets, &payments, &alice(), amount)
                .await
                .unwrap_err();
            assert_eq!(err, Error::InvalidAmount);
        }
        assert_eq!(payments.calls(), 0);
        assert_eq!(
            wallets.get(&alice()).await.unwrap().balance(),
            Credits::ZERO
        );
    }

    #[tokio::test]
    async fn declined_payment_leaves_balance_unchanged() {
        let wallets = registered_store().await;
        let payments = FixedAuthorizer::new(Outcome::Declined);

        for _ in 0..10 {
            let err = top_up(&wallets, &payments, &alice(), Credits(100))
                .await
                .unwrap_err();
            assert_eq!(err, Error::PaymentDeclined);
        }
        assert_eq!(
            wallets.get(&alice()).await.unwrap().balance(),
            Credits::ZERO
        );
    }

    #[tokio::test]
    async fn missing_wallet_is_reported_after_authorization() {
        let wallets = wallet::InMemoryStore::new();
        let payments = FixedAuthorizer::new(Outcome::Approved);

        let err = top_up(&wallets, &payments, &alice(), Credits(10))
            .await
            .unwrap_err();
        assert_eq!(err, Error::WalletNotFound);
    }

    #[tokio::test]
    async fn successful_top_ups_accumulate() {
        let wallets = registered_store().await;
        let payments = FixedAuthorizer::new(Outcome::Approved);

        let wallet = top_up(&wallets, &payments, &alice(), Credits(100))
            .await
            .unwrap();
        assert_eq!(wallet.balance(), Credits(100));

        let wallet = top_up(&wallets, &payments, &alice(), Credits(50))
            .await
            .unwrap();
        assert_eq!(wallet.balance(), Credits(150));
        assert_eq!(wallet.estimated_talktime().to_string(), "300 minutes");
        assert_eq!(payments.calls(), 2);
    }
}
