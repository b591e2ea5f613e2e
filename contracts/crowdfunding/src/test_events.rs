extern crate std;

use soroban_sdk::{
    symbol_short,
    testutils::{Address as _, Events},
    vec, Address, IntoVal, TryIntoVal,
};

use crate::events::{FundsClaimed, PledgeReceived, PledgeReclaimed};
use crate::test::{mint, pass_deadline, setup, ONE};
use crate::STORAGE_COST;

#[test]
fn test_pledged_event() {
    let (env, client, _owner, token) = setup();
    let alice = Address::generate(&env);
    mint(&env, &token, &alice, 10 * ONE);

    client.pledge(&alice, &ONE);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![
        &env,
        symbol_short!("pledged").into_val(&env),
        alice.clone().into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: PledgeReceived = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        PledgeReceived {
            contributor: alice.clone(),
            amount: ONE - STORAGE_COST,
            total: ONE - STORAGE_COST,
        }
    );
}

#[test]
fn test_claimed_event() {
    let (env, client, owner, token) = setup();
    let alice = Address::generate(&env);
    mint(&env, &token, &alice, 20 * ONE);

    client.pledge(&alice, &(11 * ONE));
    pass_deadline(&env);
    client.claim_funds(&owner);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![
        &env,
        symbol_short!("claimed").into_val(&env),
        owner.clone().into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: FundsClaimed = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        FundsClaimed {
            owner: owner.clone(),
            amount: 11 * ONE - STORAGE_COST,
        }
    );
}

#[test]
fn test_reclaimed_event() {
    let (env, client, _owner, token) = setup();
    let alice = Address::generate(&env);
    mint(&env, &token, &alice, 10 * ONE);

    client.pledge(&alice, &(2 * ONE));
    pass_deadline(&env);
    client.reclaim(&alice);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![
        &env,
        symbol_short!("reclaimed").into_val(&env),
        alice.clone().into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    // Refund = net contribution + the withheld storage fee.
    let event_data: PledgeReclaimed = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        PledgeReclaimed {
            contributor: alice.clone(),
            amount: 2 * ONE,
        }
    );
}
