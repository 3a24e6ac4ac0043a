use crate::{error::ContractError, storage::Account};

pub const SECONDS_PER_DAY: u64 = 24 * 60 * 60;
// Rewards accrue over a 360 day year.
pub const SECONDS_PER_YEAR: u64 = 360 * SECONDS_PER_DAY;

pub const MIN_APR: u32 = 1;
pub const MAX_APR: u32 = 100;

const PERCENT: i128 = 100;

/// Reward earned by `account.balance` between its checkpoint and `now`.
///
/// `floor(balance * apr * elapsed / (100 * SECONDS_PER_YEAR))`. The balance is
/// split into whole multiples of the divisor and a remainder, so the
/// intermediate products stay small and only a reward that does not fit an
/// `i128` fails.
pub fn pending_reward(account: &Account, apr: u32, now: u64) -> Result<i128, ContractError> {
    let elapsed = now.saturating_sub(account.checkpoint);
    if account.balance == 0 || elapsed == 0 {
        return Ok(0);
    }

    let divisor = PERCENT * SECONDS_PER_YEAR as i128;
    let rate_time = (apr as i128) * (elapsed as i128);
    let whole = account.balance / divisor;
    let remainder = account.balance % divisor;

    whole
        .checked_mul(rate_time)
        .zip(remainder.checked_mul(rate_time).map(|v| v / divisor))
        .and_then(|(whole, fraction)| whole.checked_add(fraction))
        .ok_or(ContractError::ContractMathError)
}

/// Locks the pending reward into `settled_reward` and moves the checkpoint to
/// `now`. Must run before the balance of the account changes.
pub fn settle(account: &Account, apr: u32, now: u64) -> Result<Account, ContractError> {
    let pending = pending_reward(account, apr, now)?;
    let settled_reward = account
        .settled_reward
        .checked_add(pending)
        .ok_or(ContractError::ContractMathError)?;

    Ok(Account {
        balance: account.balance,
        settled_reward,
        checkpoint: now.max(account.checkpoint),
    })
}

/// Total reward owed at `now` without touching the stored account.
pub fn reward_at(account: &Account, apr: u32, now: u64) -> Result<i128, ContractError> {
    Ok(settle(account, apr, now)?.settled_reward)
}
