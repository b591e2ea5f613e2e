//! # Crowdfunding Contract
//!
//! A single-campaign crowdfunding ledger: contributors pledge toward a fixed
//! goal before a deadline; once the deadline passes, the owner claims the
//! whole pot if the goal was met, or each contributor reclaims their deposit
//! if it was not.
//!
//! | Phase      | Entry Point(s)                                        |
//! |------------|-------------------------------------------------------|
//! | Bootstrap  | [`Crowdfunding::init`]                                |
//! | Funding    | [`Crowdfunding::pledge`]                              |
//! | Settlement | [`Crowdfunding::claim_funds`], [`Crowdfunding::reclaim`] |
//! | Queries    | `get_total`, `get_goal`, `get_contributions`, `is_funded` |
//!
//! ## Architecture
//!
//! Storage access is fully delegated to [`storage`]; event payloads live in
//! [`events`]. This file contains **only** the public entry points: the
//! precondition checks, the token movements and the event emissions.
//!
//! The campaign phase (open / closed-funded / closed-unfunded) is never
//! stored — every time-gated entry point compares the ledger clock against
//! the immutable `end_date` (see [`types`] for the phase diagram).
//!
//! ## First-pledge storage fee
//!
//! Creating a contributor's map entry allocates persistent storage the
//! contract pays for. The first pledge of each contributor must therefore
//! exceed [`STORAGE_COST`]; that fixed amount is withheld before crediting.
//! Later pledges reuse the entry and are credited in full. `reclaim` refunds
//! the withheld fee together with the net contribution, so a contributor who
//! reclaims gets their whole deposit back.

#![no_std]

use soroban_sdk::{
    contract, contracterror, contractimpl, panic_with_error, symbol_short, token, Address, Env,
    Vec,
};

pub mod events;
mod storage;
mod types;

#[cfg(test)]
mod test_events;

use events::{FundsClaimed, PledgeReceived, PledgeReclaimed};
use storage::{
    has_config, load_config, load_contributions, load_total, save_config, save_contributions,
    save_total,
};
pub use types::{Campaign, STORAGE_COST};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// `pledge` after `end_date`.
    CampaignOver = 1,
    /// First pledge at or below `STORAGE_COST`.
    InsufficientDeposit = 2,
    /// `claim_funds` by anyone but the owner.
    Unauthorized = 3,
    /// `claim_funds` or `reclaim` before `end_date` has passed.
    CampaignNotOver = 4,
    /// `claim_funds` while the total is below the goal.
    GoalNotReached = 5,
    /// `reclaim` after the goal was reached.
    GoalReached = 6,
    /// `reclaim` with no stored contribution.
    NoFunds = 7,
    /// Second call to `init`.
    AlreadyInitialized = 8,
    /// Any call before `init`.
    NotInitialized = 9,
}

#[contract]
pub struct Crowdfunding;

#[contractimpl]
impl Crowdfunding {
    // ─────────────────────────────────────────────────────────
    // Initialisation
    // ─────────────────────────────────────────────────────────

    /// Initialise the campaign.
    ///
    /// Must be called exactly once immediately after deployment; subsequent
    /// calls panic with `Error::AlreadyInitialized` and every other entry
    /// point panics with `Error::NotInitialized` until this has run.
    ///
    /// - `goal` — funding target in minimal units of `token`.
    /// - `owner` — beneficiary; must sign, and is the only address allowed
    ///   to call `claim_funds`.
    /// - `end_date` — ledger timestamp closing the funding phase.
    /// - `token` — asset the campaign is denominated in.
    pub fn init(env: Env, goal: i128, owner: Address, end_date: u64, token: Address) {
        owner.require_auth();

        if has_config(&env) {
            panic_with_error!(&env, Error::AlreadyInitialized);
        }

        save_config(
            &env,
            &Campaign {
                goal,
                owner,
                end_date,
                token,
            },
        );
    }

    // ─────────────────────────────────────────────────────────
    // Funding
    // ─────────────────────────────────────────────────────────

    /// Pledge `amount` toward the campaign.
    ///
    /// The full `amount` is pulled from `contributor` into the contract via
    /// the campaign token. On a contributor's first pledge the amount must
    /// strictly exceed [`STORAGE_COST`]; the fee is withheld and only the
    /// remainder is credited. Fails with `Error::CampaignOver` once the
    /// deadline has been reached.
    pub fn pledge(env: Env, contributor: Address, amount: i128) {
        contributor.require_auth();

        let campaign = load_config(&env);
        if env.ledger().timestamp() >= campaign.end_date {
            panic_with_error!(&env, Error::CampaignOver);
        }

        let mut contributions = load_contributions(&env);
        let contributed = contributions.get(contributor.clone()).unwrap_or(0);

        // First pledge pays for the map entry; later pledges reuse it.
        let credited = if contributed <= 0 {
            if amount <= STORAGE_COST {
                panic_with_error!(&env, Error::InsufficientDeposit);
            }
            amount - STORAGE_COST
        } else {
            amount
        };

        // Pull the whole deposit, fee included, into the contract.
        let token_client = token::Client::new(&env, &campaign.token);
        token_client.transfer(&contributor, &env.current_contract_address(), &amount);

        let total = load_total(&env) + credited;
        save_total(&env, total);
        contributions.set(contributor.clone(), contributed + credited);
        save_contributions(&env, &contributions);

        env.events().publish(
            (symbol_short!("pledged"), contributor.clone()),
            PledgeReceived {
                contributor,
                amount: credited,
                total,
            },
        );
    }

    // ─────────────────────────────────────────────────────────
    // Settlement
    // ─────────────────────────────────────────────────────────

    /// Pay the whole running total out to the owner.
    ///
    /// Preconditions, checked in order: `caller` is the owner
    /// (`Error::Unauthorized`), the deadline has passed
    /// (`Error::CampaignNotOver`), the goal was met
    /// (`Error::GoalNotReached`).
    ///
    /// Contribution entries are left untouched as a historical record; they
    /// are not separately redeemable after a claim.
    pub fn claim_funds(env: Env, caller: Address) {
        caller.require_auth();

        let campaign = load_config(&env);
        if caller != campaign.owner {
            panic_with_error!(&env, Error::Unauthorized);
        }
        if env.ledger().timestamp() <= campaign.end_date {
            panic_with_error!(&env, Error::CampaignNotOver);
        }

        let total = load_total(&env);
        if total < campaign.goal {
            panic_with_error!(&env, Error::GoalNotReached);
        }

        let token_client = token::Client::new(&env, &campaign.token);
        token_client.transfer(&env.current_contract_address(), &campaign.owner, &total);
        save_total(&env, 0);

        env.events().publish(
            (symbol_short!("claimed"), campaign.owner.clone()),
            FundsClaimed {
                owner: campaign.owner,
                amount: total,
            },
        );
    }

    /// Refund `contributor` after an unfunded campaign.
    ///
    /// Preconditions: the deadline has passed (`Error::CampaignNotOver`),
    /// the goal was missed (`Error::GoalReached` otherwise), and the
    /// contributor has a stored contribution (`Error::NoFunds`).
    ///
    /// The refund is the stored net contribution plus [`STORAGE_COST`], so
    /// the contributor recovers their original deposit in full. The entry is
    /// removed outright; a second reclaim fails with `Error::NoFunds`.
    pub fn reclaim(env: Env, contributor: Address) {
        contributor.require_auth();

        let campaign = load_config(&env);
        if env.ledger().timestamp() <= campaign.end_date {
            panic_with_error!(&env, Error::CampaignNotOver);
        }
        if load_total(&env) >= campaign.goal {
            panic_with_error!(&env, Error::GoalReached);
        }

        let mut contributions = load_contributions(&env);
        let contributed = contributions.get(contributor.clone()).unwrap_or(0);
        if contributed <= 0 {
            panic_with_error!(&env, Error::NoFunds);
        }

        // The withheld entry fee rides back with the refund.
        let refund = contributed + STORAGE_COST;
        let token_client = token::Client::new(&env, &campaign.token);
        token_client.transfer(&env.current_contract_address(), &contributor, &refund);

        // NOTE: the running total is intentionally not decremented here; it
        // reflects lifetime pledged value once settlement starts. Keeping it
        // unchanged also keeps `total < goal` true for the remaining
        // contributors' reclaims.
        contributions.remove(contributor.clone());
        save_contributions(&env, &contributions);

        env.events().publish(
            (symbol_short!("reclaimed"), contributor.clone()),
            PledgeReclaimed {
                contributor,
                amount: refund,
            },
        );
    }

    // ─────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────

    /// Running total of net contributions.
    pub fn get_total(env: Env) -> i128 {
        load_total(&env)
    }

    /// The campaign's funding target.
    pub fn get_goal(env: Env) -> i128 {
        load_config(&env).goal
    }

    /// All stored contributions as `(contributor, net amount)` pairs, in map
    /// key order.
    pub fn get_contributions(env: Env) -> Vec<(Address, i128)> {
        let contributions = load_contributions(&env);
        let mut out = Vec::new(&env);
        for (contributor, amount) in contributions.iter() {
            out.push_back((contributor, amount));
        }
        out
    }

    /// `true` once the running total has reached the goal.
    pub fn is_funded(env: Env) -> bool {
        let campaign = load_config(&env);
        load_total(&env) >= campaign.goal
    }
}
