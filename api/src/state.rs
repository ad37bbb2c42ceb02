use app::{payment, user, wallet};

pub struct RocketState {
    pub users: user::Directory,
    pub wallets: Box<dyn wallet::Store>,
    pub payments: Box<dyn payment::Authorizer>,
}
