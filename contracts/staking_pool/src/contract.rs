use soroban_sdk::{contract, contractimpl, contractmeta, log, symbol_short, Address, Env};
use staking_common::{all_positive, utils::is_null_address};

use crate::{
    accrual::{reward_at, settle, MAX_APR, MIN_APR},
    error::ContractError,
    rate_source,
    storage::{
        get_account, get_config, get_total_reserve, init_total_reserve, is_initialized,
        save_account, save_config, save_total_reserve, set_initialized, Account, Config,
    },
    token_contract,
};

// Metadata that is added on to the WASM custom section
contractmeta!(
    key = "Description",
    val = "Collateral staking pool with fixed APR rewards"
);

#[contract]
pub struct StakingPool;

pub trait StakingPoolTrait {
    // rate_source: oracle converting staked units into reward units, `None` for a fixed rate of one
    // reward_funder: account that pre-approved this contract to pay rewards, `None` to pay from own balance
    fn initialize(
        env: Env,
        staked_token: Address,
        reward_token: Address,
        rate_source: Option<Address>,
        reward_funder: Option<Address>,
        apr: u32,
        min_stake: i128,
    ) -> Result<(), ContractError>;

    fn stake(env: Env, sender: Address, amount: i128) -> Result<(), ContractError>;

    // Credits staked tokens that reached the pool through a plain transfer
    // to `sender`. Returns the credited amount.
    // Any untracked balance goes to the first caller, so this must be invoked
    // in the same transaction as the transfer.
    fn stake_transferred(env: Env, sender: Address) -> Result<i128, ContractError>;

    fn withdraw(env: Env, sender: Address, amount: i128) -> Result<(), ContractError>;

    // Pays out the whole accrued reward converted at the current rate.
    // Returns the amount of reward tokens transferred.
    fn claim(env: Env, sender: Address) -> Result<i128, ContractError>;

    // QUERIES

    fn query_config(env: Env) -> Result<Config, ContractError>;

    fn query_account(env: Env, address: Address) -> Result<Account, ContractError>;

    fn query_balance(env: Env, address: Address) -> Result<i128, ContractError>;

    fn query_reward(env: Env, address: Address) -> Result<i128, ContractError>;

    fn query_total_reserve(env: Env) -> Result<i128, ContractError>;
}

#[contractimpl]
impl StakingPoolTrait for StakingPool {
    fn initialize(
        env: Env,
        staked_token: Address,
        reward_token: Address,
        rate_source: Option<Address>,
        reward_funder: Option<Address>,
        apr: u32,
        min_stake: i128,
    ) -> Result<(), ContractError> {
        if is_initialized(&env) {
            log!(
                &env,
                "Staking pool: Initialize: initializing contract twice is not allowed"
            );
            return Err(ContractError::AlreadyInitialized);
        }

        if is_null_address(&env, &staked_token) {
            log!(&env, "Staking pool: Initialize: Staked token address can not be zero");
            return Err(ContractError::InvalidConfig);
        }
        if is_null_address(&env, &reward_token) {
            log!(&env, "Staking pool: Initialize: Reward token address can not be zero");
            return Err(ContractError::InvalidConfig);
        }
        if staked_token == reward_token {
            log!(
                &env,
                "Staking pool: Initialize: Staked and reward token must be different"
            );
            return Err(ContractError::InvalidConfig);
        }
        if [&rate_source, &reward_funder]
            .into_iter()
            .flatten()
            .any(|address| is_null_address(&env, address))
        {
            log!(
                &env,
                "Staking pool: Initialize: Rate source and reward funder can not be zero"
            );
            return Err(ContractError::InvalidConfig);
        }
        if !(MIN_APR..=MAX_APR).contains(&apr) {
            log!(
                &env,
                "Staking pool: Initialize: APR must be between 1 and 100, got {}",
                apr
            );
            return Err(ContractError::InvalidConfig);
        }
        if !all_positive!(min_stake) {
            log!(
                &env,
                "Staking pool: Initialize: Minimum stake must be bigger than 0, got {}",
                min_stake
            );
            return Err(ContractError::InvalidConfig);
        }

        let config = Config {
            staked_token,
            reward_token,
            rate_source,
            reward_funder,
            apr,
            min_stake,
        };
        save_config(&env, &config);
        init_total_reserve(&env);
        set_initialized(&env);

        env.events().publish(
            (symbol_short!("init"), config.staked_token),
            config.reward_token,
        );

        Ok(())
    }

    fn stake(env: Env, sender: Address, amount: i128) -> Result<(), ContractError> {
        sender.require_auth();

        let config = get_config(&env)?;

        if amount < config.min_stake {
            log!(
                &env,
                "Staking pool: Stake: Trying to stake {} which is less than minimum {} required",
                amount,
                config.min_stake
            );
            return Err(ContractError::InvalidAmount);
        }

        // Pull the tokens before crediting anything
        transfer_tokens(
            &env,
            &config.staked_token,
            &sender,
            &env.current_contract_address(),
            amount,
        )?;

        credit_stake(&env, &config, &sender, amount)
    }

    fn stake_transferred(env: Env, sender: Address) -> Result<i128, ContractError> {
        sender.require_auth();

        let config = get_config(&env)?;

        let held = token_contract::Client::new(&env, &config.staked_token)
            .balance(&env.current_contract_address());
        let surplus = held
            .checked_sub(get_total_reserve(&env))
            .ok_or(ContractError::ContractMathError)?;

        if surplus < config.min_stake {
            log!(
                &env,
                "Staking pool: Stake transferred: Untracked balance {} is less than minimum {} required",
                surplus,
                config.min_stake
            );
            return Err(ContractError::InvalidAmount);
        }

        credit_stake(&env, &config, &sender, surplus)?;

        Ok(surplus)
    }

    fn withdraw(env: Env, sender: Address, amount: i128) -> Result<(), ContractError> {
        sender.require_auth();

        let config = get_config(&env)?;

        if amount <= 0 {
            log!(
                &env,
                "Staking pool: Withdraw: Withdraw amount can not be {}",
                amount
            );
            return Err(ContractError::InvalidAmount);
        }

        let account = get_account(&env, &sender);
        if amount > account.balance {
            log!(
                &env,
                "Staking pool: Withdraw: Trying to withdraw {} with a balance of {}",
                amount,
                account.balance
            );
            return Err(ContractError::InsufficientBalance);
        }

        let mut account = settle(&account, config.apr, env.ledger().timestamp())?;
        account.balance -= amount;
        let total_reserve = get_total_reserve(&env)
            .checked_sub(amount)
            .ok_or(ContractError::ContractMathError)?;

        transfer_tokens(
            &env,
            &config.staked_token,
            &env.current_contract_address(),
            &sender,
            amount,
        )?;

        save_account(&env, &sender, &account);
        save_total_reserve(&env, total_reserve);

        env.events()
            .publish((symbol_short!("withdrawn"), sender), amount);

        Ok(())
    }

    fn claim(env: Env, sender: Address) -> Result<i128, ContractError> {
        sender.require_auth();

        let config = get_config(&env)?;

        let mut account = settle(
            &get_account(&env, &sender),
            config.apr,
            env.ledger().timestamp(),
        )?;
        if account.settled_reward == 0 {
            log!(&env, "Staking pool: Claim: No reward to claim");
            return Err(ContractError::NoReward);
        }

        let rate = rate_source::current_rate(&env, &config.rate_source)?;
        let reward = account.settled_reward;
        let payout = rate
            .checked_mul_int(reward)
            .ok_or(ContractError::ContractMathError)?;
        if payout == 0 {
            log!(
                &env,
                "Staking pool: Claim: Reward {} is worth nothing at the current rate",
                reward
            );
            return Err(ContractError::NoReward);
        }

        account.settled_reward = 0;
        pay_reward(&env, &config, &sender, payout)?;
        save_account(&env, &sender, &account);

        env.events()
            .publish((symbol_short!("claimed"), sender), (reward, payout));

        Ok(payout)
    }

    // QUERIES

    fn query_config(env: Env) -> Result<Config, ContractError> {
        get_config(&env)
    }

    fn query_account(env: Env, address: Address) -> Result<Account, ContractError> {
        get_config(&env)?;
        Ok(get_account(&env, &address))
    }

    fn query_balance(env: Env, address: Address) -> Result<i128, ContractError> {
        get_config(&env)?;
        Ok(get_account(&env, &address).balance)
    }

    fn query_reward(env: Env, address: Address) -> Result<i128, ContractError> {
        let config = get_config(&env)?;
        reward_at(
            &get_account(&env, &address),
            config.apr,
            env.ledger().timestamp(),
        )
    }

    fn query_total_reserve(env: Env) -> Result<i128, ContractError> {
        get_config(&env)?;
        Ok(get_total_reserve(&env))
    }
}

// Settles the account under its old principal, then adds `amount` to it and to the reserve.
fn credit_stake(
    env: &Env,
    config: &Config,
    sender: &Address,
    amount: i128,
) -> Result<(), ContractError> {
    let mut account = settle(
        &get_account(env, sender),
        config.apr,
        env.ledger().timestamp(),
    )?;
    account.balance = account
        .balance
        .checked_add(amount)
        .ok_or(ContractError::ContractMathError)?;
    let total_reserve = get_total_reserve(env)
        .checked_add(amount)
        .ok_or(ContractError::ContractMathError)?;

    save_account(env, sender, &account);
    save_total_reserve(env, total_reserve);

    env.events()
        .publish((symbol_short!("staked"), sender.clone()), amount);

    Ok(())
}

fn transfer_tokens(
    env: &Env,
    token: &Address,
    from: &Address,
    to: &Address,
    amount: i128,
) -> Result<(), ContractError> {
    match token_contract::Client::new(env, token).try_transfer(from, to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => {
            log!(env, "Staking pool: Transfer of {} tokens failed", amount);
            Err(ContractError::TransferFailed)
        }
    }
}

fn pay_reward(
    env: &Env,
    config: &Config,
    recipient: &Address,
    payout: i128,
) -> Result<(), ContractError> {
    let pool = env.current_contract_address();
    let Some(funder) = &config.reward_funder else {
        return transfer_tokens(env, &config.reward_token, &pool, recipient, payout);
    };

    match token_contract::Client::new(env, &config.reward_token)
        .try_transfer_from(&pool, funder, recipient, &payout)
    {
        Ok(Ok(())) => Ok(()),
        _ => {
            log!(
                env,
                "Staking pool: Reward payout of {} from funder failed",
                payout
            );
            Err(ContractError::TransferFailed)
        }
    }
}
