use pretty_assertions::assert_eq;
use soroban_sdk::{testutils::Address as _, Address, Env};

use super::setup::{mint, set_timestamp, setup_pool, ONE_DAY, ONE_YEAR, START, UNIT};
use crate::error::ContractError;

#[test]
fn rewards_accrue_per_user() {
    let env = Env::default();
    env.mock_all_auths();
    set_timestamp(&env, START);

    let user1 = Address::generate(&env);
    let user2 = Address::generate(&env);
    let pool = setup_pool(&env, None);

    mint(&env, &pool.staked_token, &user1, 36 * UNIT);
    mint(&env, &pool.staked_token, &user2, 72 * UNIT);
    pool.staking.stake(&user1, &(36 * UNIT));
    pool.staking.stake(&user2, &(72 * UNIT));

    set_timestamp(&env, START + ONE_YEAR);

    assert_eq!(pool.staking.query_reward(&user1), 36 * UNIT * 10 / 100);
    assert_eq!(pool.staking.query_reward(&user2), 72 * UNIT * 10 / 100);
}

#[test]
fn repeated_stake_keeps_earlier_reward() {
    let env = Env::default();
    env.mock_all_auths();
    set_timestamp(&env, START);

    let user = Address::generate(&env);
    let pool = setup_pool(&env, None);

    mint(&env, &pool.staked_token, &user, 72 * UNIT);
    pool.staking.stake(&user, &(36 * UNIT));

    set_timestamp(&env, START + ONE_YEAR);
    pool.staking.stake(&user, &(36 * UNIT));

    set_timestamp(&env, START + ONE_YEAR + ONE_YEAR / 2);

    // 3.6 for the first year plus 72 * 10% for half a year
    assert_eq!(pool.staking.query_reward(&user), 72 * UNIT / 10);
}

#[test]
fn withdrawal_reduces_future_accrual() {
    let env = Env::default();
    env.mock_all_auths();
    set_timestamp(&env, START);

    let user1 = Address::generate(&env);
    let user2 = Address::generate(&env);
    let pool = setup_pool(&env, None);

    mint(&env, &pool.staked_token, &user1, 36 * UNIT);
    mint(&env, &pool.staked_token, &user2, 72 * UNIT);
    pool.staking.stake(&user1, &(36 * UNIT));
    pool.staking.stake(&user2, &(72 * UNIT));

    set_timestamp(&env, START + ONE_YEAR);
    pool.staking.withdraw(&user1, &(18 * UNIT));
    pool.staking.withdraw(&user2, &(36 * UNIT));

    set_timestamp(&env, START + 3 * ONE_YEAR);

    // one year on the full stake plus two years on half of it
    let user1_expected = 36 * UNIT / 10 + 2 * (18 * UNIT / 10);
    let user2_expected = 72 * UNIT / 10 + 2 * (36 * UNIT / 10);
    assert_eq!(pool.staking.query_reward(&user1), user1_expected);
    assert_eq!(pool.staking.query_reward(&user2), user2_expected);
    assert_eq!(user1_expected, 36 * UNIT * 10 / 100 * 2);
}

#[test]
fn query_reward_has_no_side_effect() {
    let env = Env::default();
    env.mock_all_auths();
    set_timestamp(&env, START);

    let user = Address::generate(&env);
    let pool = setup_pool(&env, None);

    mint(&env, &pool.staked_token, &user, 36 * UNIT);
    pool.staking.stake(&user, &(36 * UNIT));
    let before = pool.staking.query_account(&user);

    set_timestamp(&env, START + ONE_YEAR);
    pool.staking.query_reward(&user);

    assert_eq!(pool.staking.query_account(&user), before);
}

#[test]
fn reward_is_monotonic_between_events() {
    let env = Env::default();
    env.mock_all_auths();
    set_timestamp(&env, START);

    let user = Address::generate(&env);
    let pool = setup_pool(&env, None);

    mint(&env, &pool.staked_token, &user, 7 * UNIT);
    pool.staking.stake(&user, &(7 * UNIT));

    let mut previous = 0;
    for step in 0..=48u64 {
        // uneven steps to hit truncation at odd timestamps
        set_timestamp(&env, START + step * (ONE_DAY * 7 + 13));
        let reward = pool.staking.query_reward(&user);
        assert!(reward >= previous);
        previous = reward;
    }
    assert!(previous > 0);
}

#[test]
fn total_reserve_matches_sum_of_balances() {
    let env = Env::default();
    env.mock_all_auths();
    set_timestamp(&env, START);

    let pool = setup_pool(&env, None);
    let users = [
        Address::generate(&env),
        Address::generate(&env),
        Address::generate(&env),
    ];
    for user in users.iter() {
        mint(&env, &pool.staked_token, user, 100 * UNIT);
    }

    let sum_of_balances = |users: &[Address]| -> i128 {
        users
            .iter()
            .map(|user| pool.staking.query_balance(user))
            .sum()
    };

    pool.staking.stake(&users[0], &(40 * UNIT));
    pool.staking.stake(&users[1], &(25 * UNIT));
    assert_eq!(pool.staking.query_total_reserve(), sum_of_balances(&users));

    set_timestamp(&env, START + ONE_DAY);
    pool.staking.withdraw(&users[0], &(15 * UNIT));
    pool.staking.stake(&users[2], &(60 * UNIT));
    assert_eq!(pool.staking.query_total_reserve(), sum_of_balances(&users));

    // failed operations leave the reserve untouched
    assert_eq!(
        pool.staking.try_withdraw(&users[1], &(26 * UNIT)),
        Err(Ok(ContractError::InsufficientBalance))
    );
    assert_eq!(
        pool.staking.try_stake(&users[2], &UNIT),
        Err(Ok(ContractError::InvalidAmount))
    );
    assert_eq!(pool.staking.query_total_reserve(), sum_of_balances(&users));

    set_timestamp(&env, START + 2 * ONE_DAY);
    pool.staking.withdraw(&users[1], &(25 * UNIT));
    pool.staking.stake(&users[0], &(5 * UNIT));
    assert_eq!(pool.staking.query_total_reserve(), sum_of_balances(&users));
    assert_eq!(pool.staking.query_total_reserve(), 90 * UNIT);
    assert_eq!(
        pool.staked_token.balance(&pool.staking.address),
        pool.staking.query_total_reserve()
    );
}
