//! # Storage
//!
//! Typed helpers over the two Soroban storage tiers used by the contract:
//!
//! ## Instance storage (contract-lifetime TTL)
//!
//! | Key        | Type       | Description                                |
//! |------------|------------|--------------------------------------------|
//! | `Config`   | `Campaign` | Immutable campaign configuration           |
//! | `Total`    | `i128`     | Sum of net contributions currently held    |
//!
//! Instance TTL is bumped by **7 days** whenever it falls below 1 day remaining.
//!
//! ## Persistent storage (per-entry TTL)
//!
//! | Key             | Type                | Description                     |
//! |-----------------|---------------------|---------------------------------|
//! | `Contributions` | `Map<Address, i128>`| Net contribution per contributor|
//!
//! Persistent TTL is bumped by **30 days** whenever it falls below 7 days
//! remaining.
//!
//! The contributions map lives under its own key so contributor entries can
//! never collide with the scalar fields, and so `get_contributions` can
//! enumerate the whole mapping in key order in a single read.
//!
//! Every loader panics with [`Error::NotInitialized`] when the contract has
//! not been initialized; `init` is the only writer of `Config`.

use soroban_sdk::{contracttype, panic_with_error, Address, Env, Map};

use crate::types::Campaign;
use crate::Error;

// ── TTL Constants ────────────────────────────────────────────────────

/// Approximate ledgers per day (~5 seconds per ledger).
const DAY_IN_LEDGERS: u32 = 17_280;

/// Instance storage: bump by 7 days when below 1 day remaining.
const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

/// Persistent storage: bump by 30 days when below 7 days remaining.
const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

// ── Storage Keys ─────────────────────────────────────────────────────

/// All contract storage keys.
///
/// Instance-tier keys (`Config`, `Total`) live as long as the contract and
/// are extended together. The persistent-tier `Contributions` key holds the
/// contributor map with an independent TTL.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Immutable campaign configuration (Instance).
    Config,
    /// Running total of net contributions (Instance).
    Total,
    /// Contributor → net contribution map (Persistent).
    Contributions,
}

// ── Instance Storage Helpers ─────────────────────────────────────────

/// Extend instance storage TTL if it falls below the threshold.
fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

/// Return `true` once `init` has run.
pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

/// Write the campaign configuration and zero the running total.
/// Called exactly once, from `init`.
pub fn save_config(env: &Env, campaign: &Campaign) {
    env.storage().instance().set(&DataKey::Config, campaign);
    env.storage().instance().set(&DataKey::Total, &0i128);
    env.storage()
        .persistent()
        .set(&DataKey::Contributions, &Map::<Address, i128>::new(env));
    bump_instance(env);
    bump_contributions(env);
}

/// Load the campaign configuration.
/// Panics with `NotInitialized` before `init`.
pub fn load_config(env: &Env) -> Campaign {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .unwrap_or_else(|| panic_with_error!(env, Error::NotInitialized))
}

/// Load the running total of net contributions.
pub fn load_total(env: &Env) -> i128 {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::Total)
        .unwrap_or_else(|| panic_with_error!(env, Error::NotInitialized))
}

/// Overwrite the running total.
pub fn save_total(env: &Env, total: i128) {
    env.storage().instance().set(&DataKey::Total, &total);
    bump_instance(env);
}

// ── Persistent Storage Helpers ───────────────────────────────────────

/// Extend the TTL for the contributions map.
fn bump_contributions(env: &Env) {
    env.storage().persistent().extend_ttl(
        &DataKey::Contributions,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );
}

/// Load the full contributor map.
/// Panics with `NotInitialized` before `init`.
pub fn load_contributions(env: &Env) -> Map<Address, i128> {
    let map: Map<Address, i128> = env
        .storage()
        .persistent()
        .get(&DataKey::Contributions)
        .unwrap_or_else(|| panic_with_error!(env, Error::NotInitialized));
    bump_contributions(env);
    map
}

/// Write back the contributor map after a pledge or a reclaim.
pub fn save_contributions(env: &Env, contributions: &Map<Address, i128>) {
    env.storage()
        .persistent()
        .set(&DataKey::Contributions, contributions);
    bump_contributions(env);
}
