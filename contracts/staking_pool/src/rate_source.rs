use soroban_sdk::{contractclient, log, Address, Env};
use staking_common::all_positive;
use staking_decimal::Decimal;

use crate::error::ContractError;

/// Oracle quoting how many reward-asset units one staked-asset unit is worth,
/// as `current_rate / 10^decimals`.
#[allow(dead_code)]
#[contractclient(name = "RateSourceClient")]
pub trait RateSource {
    fn current_rate(env: Env) -> i128;

    fn decimals(env: Env) -> u32;
}

/// Queries the configured oracle. Without one, staked and reward units are
/// exchanged one to one.
pub fn current_rate(env: &Env, rate_source: &Option<Address>) -> Result<Decimal, ContractError> {
    let Some(rate_source) = rate_source else {
        return Ok(Decimal::one());
    };
    let client = RateSourceClient::new(env, rate_source);

    let rate = match client.try_current_rate() {
        Ok(Ok(rate)) => rate,
        _ => {
            log!(env, "Staking pool: Rate query failed");
            return Err(ContractError::RateUnavailable);
        }
    };
    let decimals = match client.try_decimals() {
        Ok(Ok(decimals)) => decimals,
        _ => {
            log!(env, "Staking pool: Rate decimals query failed");
            return Err(ContractError::RateUnavailable);
        }
    };

    if !all_positive!(rate) {
        log!(env, "Staking pool: Rate source returned non positive rate {}", rate);
        return Err(ContractError::RateUnavailable);
    }

    Decimal::new(rate, decimals).ok_or_else(|| {
        log!(env, "Staking pool: Rate precision of {} decimals is not supported", decimals);
        ContractError::RateUnavailable
    })
}
