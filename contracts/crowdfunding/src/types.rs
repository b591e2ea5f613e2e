//! # Types
//!
//! Shared data structures of the crowdfunding contract.
//!
//! ## Design decisions
//!
//! ### Config / ledger split
//!
//! The campaign is internally stored as two kinds of entries:
//!
//! - [`Campaign`] — written once by `init`; never mutated.
//! - The running total and the contributions map — mutated by `pledge`,
//!   `claim_funds` and `reclaim`.
//!
//! ### Phases as a derived state machine
//!
//! The campaign phase is never stored; it is derived from the ledger clock
//! and the running total:
//!
//! ```text
//! Open (now < end_date)
//!   ├──► ClosedFunded   (now ≥ end_date, total ≥ goal)
//!   └──► ClosedUnfunded (now ≥ end_date, total < goal)
//! ```
//!
//! The only non-time-driven transition is `total` crossing `goal`, which can
//! happen solely during `pledge` while the campaign is still open.

use soroban_sdk::{contracttype, Address};

/// Fixed fee withheld from a contributor's first pledge, in minimal token
/// units. It covers the persistent map entry created for the contributor and
/// is refunded in full when the contributor reclaims.
pub const STORAGE_COST: i128 = 240_000_000_000_000_000_000;

/// Immutable campaign configuration, written once at initialization.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Campaign {
    /// Funding target in minimal token units.
    pub goal: i128,
    /// Beneficiary; the only address allowed to call `claim_funds`.
    pub owner: Address,
    /// Ledger timestamp after which pledging closes and settlement opens.
    pub end_date: u64,
    /// Token the campaign is denominated in; all deposits and payouts move
    /// through this asset.
    pub token: Address,
}
