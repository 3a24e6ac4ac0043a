// Storage TTL is counted in ledgers; a ledger closes roughly every five seconds.
pub const DAY_IN_LEDGERS: u32 = 17280;

// Instance storage (config flags) is refreshed back to a week of ledgers
// once fewer than six days remain.
pub const INSTANCE_TARGET_TTL: u32 = 7 * DAY_IN_LEDGERS;
pub const INSTANCE_RENEWAL_THRESHOLD: u32 = INSTANCE_TARGET_TTL - DAY_IN_LEDGERS;

// Persistent storage (config, accounts, reserve) is refreshed back to thirty
// days of ledgers once fewer than twenty nine days remain.
pub const PERSISTENT_TARGET_TTL: u32 = 30 * DAY_IN_LEDGERS;
pub const PERSISTENT_RENEWAL_THRESHOLD: u32 = PERSISTENT_TARGET_TTL - DAY_IN_LEDGERS;
