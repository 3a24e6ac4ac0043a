use soroban_sdk::{contracttype, log, Address, Env};
use staking_common::ttl::{
    INSTANCE_RENEWAL_THRESHOLD, INSTANCE_TARGET_TTL, PERSISTENT_RENEWAL_THRESHOLD,
    PERSISTENT_TARGET_TTL,
};

use crate::error::ContractError;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    /// Token users deposit as principal
    pub staked_token: Address,
    /// Token rewards are paid out in
    pub reward_token: Address,
    /// Oracle quoting reward units per staked unit; `None` means a fixed rate of one
    pub rate_source: Option<Address>,
    /// Account that approved this contract to pay rewards on its behalf.
    /// When not set, rewards are paid from the contract's own reward balance.
    pub reward_funder: Option<Address>,
    /// Annual percentage rate, between 1 and 100
    pub apr: u32,
    /// Smallest amount a single stake call may deposit
    pub min_stake: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq, Default)]
pub struct Account {
    /// Staked principal
    pub balance: i128,
    /// Reward locked in up to `checkpoint`, in staked-asset units
    pub settled_reward: i128,
    /// Ledger timestamp of the last stake, withdrawal or claim
    pub checkpoint: u64,
}

impl Account {
    pub fn is_empty(&self) -> bool {
        self.balance == 0 && self.settled_reward == 0
    }
}

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Config,
    TotalReserve,
    Initialized,
    Account(Address),
}

pub fn get_config(env: &Env) -> Result<Config, ContractError> {
    let config = env
        .storage()
        .persistent()
        .get(&DataKey::Config)
        .ok_or_else(|| {
            log!(env, "Staking pool: Config not set");
            ContractError::NotInitialized
        })?;
    env.storage().persistent().extend_ttl(
        &DataKey::Config,
        PERSISTENT_RENEWAL_THRESHOLD,
        PERSISTENT_TARGET_TTL,
    );

    Ok(config)
}

pub fn save_config(env: &Env, config: &Config) {
    env.storage().persistent().set(&DataKey::Config, config);
    env.storage().persistent().extend_ttl(
        &DataKey::Config,
        PERSISTENT_RENEWAL_THRESHOLD,
        PERSISTENT_TARGET_TTL,
    );
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Initialized)
        .unwrap_or(false)
}

pub fn set_initialized(env: &Env) {
    env.storage().instance().set(&DataKey::Initialized, &true);
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_RENEWAL_THRESHOLD, INSTANCE_TARGET_TTL);
}

/// Missing accounts read as the zero record.
pub fn get_account(env: &Env, user: &Address) -> Account {
    let key = DataKey::Account(user.clone());
    let account = env
        .storage()
        .persistent()
        .get::<_, Account>(&key)
        .unwrap_or_default();
    env.storage().persistent().has(&key).then(|| {
        env.storage().persistent().extend_ttl(
            &key,
            PERSISTENT_RENEWAL_THRESHOLD,
            PERSISTENT_TARGET_TTL,
        );
    });

    account
}

/// An account with no principal and no settled reward is dropped from storage,
/// since reading it back yields the same zero record.
pub fn save_account(env: &Env, user: &Address, account: &Account) {
    let key = DataKey::Account(user.clone());
    if account.is_empty() {
        env.storage().persistent().remove(&key);
        return;
    }

    env.storage().persistent().set(&key, account);
    env.storage().persistent().extend_ttl(
        &key,
        PERSISTENT_RENEWAL_THRESHOLD,
        PERSISTENT_TARGET_TTL,
    );
}

pub fn init_total_reserve(env: &Env) {
    save_total_reserve(env, 0);
}

pub fn get_total_reserve(env: &Env) -> i128 {
    let total_reserve = env
        .storage()
        .persistent()
        .get(&DataKey::TotalReserve)
        .unwrap_or(0i128);
    env.storage().persistent().has(&DataKey::TotalReserve).then(|| {
        env.storage().persistent().extend_ttl(
            &DataKey::TotalReserve,
            PERSISTENT_RENEWAL_THRESHOLD,
            PERSISTENT_TARGET_TTL,
        )
    });

    total_reserve
}

pub fn save_total_reserve(env: &Env, total_reserve: i128) {
    env.storage()
        .persistent()
        .set(&DataKey::TotalReserve, &total_reserve);
    env.storage().persistent().extend_ttl(
        &DataKey::TotalReserve,
        PERSISTENT_RENEWAL_THRESHOLD,
        PERSISTENT_TARGET_TTL,
    );
}
