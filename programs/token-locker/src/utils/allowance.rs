//! SPL Token delegate checks standing in for an ERC20-style allowance.
//! The admin approves the locker PDA as delegate of their token account;
//! the delegated amount is the allowance.

use anchor_lang::prelude::*;

use crate::error::LockerError;

/// Allowance currently granted to `spender`. Zero when the account has no
/// delegate or delegates to someone else.
pub fn allowance_for(delegate: Option<Pubkey>, delegated_amount: u64, spender: &Pubkey) -> u64 {
    match delegate {
        Some(d) if d == *spender => delegated_amount,
        _ => 0,
    }
}

pub fn ensure_allowance(
    delegate: Option<Pubkey>,
    delegated_amount: u64,
    spender: &Pubkey,
    amount: u64,
) -> core::result::Result<(), LockerError> {
    if allowance_for(delegate, delegated_amount, spender) < amount {
        return Err(LockerError::InsufficientAllowance);
    }
    Ok(())
}
