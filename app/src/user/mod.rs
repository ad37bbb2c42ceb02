use std::collections::HashSet;

use thiserror::Error;
use tokio::sync::RwLock;

use crate::wallet;

mod entities;

pub use entities::Id;

#[derive(Debug, Error)]
pub enum Error {
    #[error("User being created already exists")]
    UserAlreadyExists,
}

/// The set of registered user ids. Constructed once at process start and
/// passed by reference into the request handlers.
#[derive(Debug, Default)]
pub struct Directory {
    registered: RwLock<HashSet<Id>>,
}

impl Directory {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn contains(&self, id: &Id) -> bool {
        self.registered.read().await.contains(id)
    }

    async fn record(&self, id: Id) -> Result<(), Error> {
        let mut registered = self.registered.write().await;
        if !registered.insert(id) {
            return Err(Error::UserAlreadyExists);
        }
        Ok(())
    }
}

/// Registers a new user and creates their zero-balance wallet. This is the
/// only path that creates a wallet, which keeps the invariant that a wallet
/// exists iff its user has completed registration.
pub async fn register(
    directory: &Directory,
    wallets: &dyn wallet::Store,
    id: Id,
) -> Result<wallet::Wallet, Error> {
    directory.record(id.clone()).await?;
    log::info!("registered user {:?}", id.0);
    Ok(wallets.create(id).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credits::Credits;
    use crate::wallet::Store;

    fn alice() -> Id {
        Id("alice".to_owned())
    }

    #[tokio::test]
    async fn register_creates_zero_balance_wallet() {
        let directory = Directory::new();
        let wallets = wallet::InMemoryStore::new();

        let created = register(&directory, &wallets, alice()).await.unwrap();
        assert_eq!(created.balance(), Credits::ZERO);
        assert!(directory.contains(&alice()).await);
        assert!(wallets.get(&alice()).await.is_some());
    }

    #[tokio::test]
    async fn duplicate_registration_is_rejected() {
        let directory = Directory::new();
        let wallets = wallet::InMemoryStore::new();

        register(&directory, &wallets, alice()).await.unwrap();
        wallets.top_up(&alice(), Credits(100)).await.unwrap();

        let err = register(&directory, &wallets, alice()).await.unwrap_err();
        assert!(matches!(err, Error::UserAlreadyExists));

        // The first registration's wallet survives untouched.
        let wallet = wallets.get(&alice()).await.unwrap();
        assert_eq!(wallet.balance(), Credits(100));
    }
}
