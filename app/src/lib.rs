pub mod credits;
pub mod payment;
pub mod topup;
pub mod user;
pub mod wallet;
