use soroban_sdk::{Address, Env, String};

/// Strkey of the ed25519 account whose public key is 32 zero bytes.
pub const NULL_ACCOUNT: &str = "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF";
/// Strkey of the contract id made of 32 zero bytes.
pub const NULL_CONTRACT: &str = "CAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAABSC4";

// Evaluates to `true` only when every integer argument is strictly positive.
// `None` values are skipped.
#[macro_export]
macro_rules! all_positive {
    ($($arg:expr),*) => {
        {
            let mut positive = true;
            $(
                let value: Option<i128> = Into::<Option<_>>::into($arg);
                if let Some(val) = value {
                    if val <= 0 {
                        positive = false;
                    }
                }
            )*
            positive
        }
    };
}

/// Addresses cannot be empty on Soroban, so the all-zero account and the
/// all-zero contract id play the role of the null identity.
pub fn is_null_address(env: &Env, address: &Address) -> bool {
    let null_account = Address::from_string(&String::from_str(env, NULL_ACCOUNT));
    let null_contract = Address::from_string(&String::from_str(env, NULL_CONTRACT));

    address == &null_account || address == &null_contract
}
