//! This module contains definitions for the credit quantities held by wallets.

use std::fmt;
use std::ops::{Add, AddAssign};

/// Minutes of talktime granted per credit of balance.
const TALKTIME_MINUTES_PER_CREDIT: i64 = 2;

/// An amount of prepaid credits. Balances are whole credit units.
#[derive(Debug, Clone, Copy, Default, PartialOrd, Ord, PartialEq, Eq)]
pub struct Credits(pub i64);

impl Credits {
    pub const ZERO: Credits = Credits(0);

    /// Talktime this many credits buys.
    pub fn talktime(self) -> Talktime {
        Talktime(self.0 * TALKTIME_MINUTES_PER_CREDIT)
    }
}

impl Add for Credits {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Credits {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

/// Estimated talktime in minutes. This is a display convenience derived from
/// the balance, not an authoritative quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Talktime(pub i64);

impl fmt::Display for Talktime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} minutes", self.0)
    }
}
