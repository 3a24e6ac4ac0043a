#![no_std]
mod accrual;
mod contract;
mod error;
mod rate_source;
mod storage;

pub mod token_contract {
    // Both the staked and the reward asset speak the standard token interface.
    pub use soroban_sdk::token::TokenClient as Client;
}
