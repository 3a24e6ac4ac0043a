use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    AlreadyInitialized = 600,
    InvalidConfig = 601,
    InvalidAmount = 602,
    InsufficientBalance = 603,
    NoReward = 604,
    TransferFailed = 605,
    RateUnavailable = 606,
    ContractMathError = 607,
    NotInitialized = 608,
}
