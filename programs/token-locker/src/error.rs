use anchor_lang::prelude::*;

/// Custom error codes for the token locker program.
#[error_code]
pub enum LockerError {
    #[msg("Unauthorized: caller is not the admin")]
    Unauthorized,

    #[msg("Invalid admin: use renounce_admin to clear the admin")]
    InvalidAdmin,

    #[msg("Invalid beneficiary")]
    InvalidBeneficiary,

    #[msg("Invalid amount (must be > 0)")]
    InvalidAmount,

    #[msg("Allowance is less than amount")]
    InsufficientAllowance,

    #[msg("Client does not have allocation")]
    NoSuchAllocation,

    #[msg("Client already has an allocation")]
    DuplicateAllocation,

    #[msg("Allocation list is full")]
    AllocationListFull,

    #[msg("Client cannot claim with time lock")]
    TimeLockNotElapsed,

    #[msg("Locker does not have sufficient funds")]
    InsufficientFunds,

    #[msg("Invalid token mint")]
    InvalidTokenMint,

    #[msg("Invalid token account")]
    InvalidTokenAccount,

    #[msg("Math overflow")]
    MathOverflow,
}
