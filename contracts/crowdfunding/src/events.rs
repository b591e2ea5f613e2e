//! Event payloads published by the mutating entry points.
//!
//! Topics follow the `(symbol_short!(..), address)` convention; the payload
//! is a `#[contracttype]` struct so off-chain consumers can decode it
//! without positional guessing.

use soroban_sdk::{contracttype, Address};

/// Published on every successful `pledge`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PledgeReceived {
    pub contributor: Address,
    /// Net amount credited, after any first-pledge storage fee.
    pub amount: i128,
    /// Running total after this pledge.
    pub total: i128,
}

/// Published when the owner claims a funded campaign.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FundsClaimed {
    pub owner: Address,
    /// Amount paid out; the pre-claim running total.
    pub amount: i128,
}

/// Published when a contributor reclaims from an unfunded campaign.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PledgeReclaimed {
    pub contributor: Address,
    /// Amount refunded: net contribution plus the storage fee.
    pub amount: i128,
}
