//! Provides facilities for operating on user wallets. The [`Store`] trait is
//! the capability the flows operate against; [`InMemoryStore`] is the only
//! implementation in this process, holding all wallets for the lifetime of
//! the process. A persistent store can be substituted without touching the
//! registration or top-up flows.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::credits::Credits;
use crate::user;

mod entities;

pub use entities::Wallet;

/// Owns the mapping from user id to wallet and enforces at most one wallet
/// per user. The only mutating entry point into balances is [`Store::top_up`].
#[async_trait]
pub trait Store: Send + Sync {
    /// Creates a wallet for `user_id` if none exists yet. If one already
    /// exists it is returned unchanged; the balance is never reset.
    async fn create(&self, user_id: user::Id) -> Wallet;

    /// Returns a snapshot of the wallet for `user_id`, if any.
    async fn get(&self, user_id: &user::Id) -> Option<Wallet>;

    /// Credits the wallet for `user_id` and returns the updated snapshot, or
    /// `None` without mutating anything if no wallet exists.
    async fn top_up(&self, user_id: &user::Id, amount: Credits) -> Option<Wallet>;
}

/// In-memory wallet store. The write lock serializes wallet mutations, so a
/// top-up's read-modify-write cannot interleave with another one.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    wallets: RwLock<HashMap<user::Id, Wallet>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Store for InMemoryStore {
    async fn create(&self, user_id: user::Id) -> Wallet {
        let mut wallets = self.wallets.write().await;
        wallets
            .entry(user_id.clone())
            .or_insert_with(|| Wallet::new(user_id))
            .clone()
    }

    async fn get(&self, user_id: &user::Id) -> Option<Wallet> {
        self.wallets.read().await.get(user_id).cloned()
    }

    async fn top_up(&self, user_id: &user::Id, amount: Credits) -> Option<Wallet> {
        let mut wallets = self.wallets.write().await;
        let wallet = wallets.get_mut(user_id)?;
        wallet.top_up(amount);
        Some(wallet.clone())
    }
}
