//! Program-wide constants.

/// PDA seed for the per-mint locker state.
pub const LOCKER_SEED: &[u8] = b"locker";

/// PDA seed for the token vault holding escrowed funds.
pub const VAULT_SEED: &[u8] = b"vault";

/// PDA seed for the allocation table.
pub const ALLOCATIONS_SEED: &[u8] = b"allocations";

/// Max simultaneously active allocations per locker.
pub const MAX_ALLOCATIONS: usize = 64;

/// Seconds per day (UTC). Only test scenarios reason in days.
#[cfg(test)]
pub const SECONDS_PER_DAY: i64 = 86_400;
