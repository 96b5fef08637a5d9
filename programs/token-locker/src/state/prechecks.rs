//! Precondition sequences shared by the instruction handlers. Each runs
//! every check an instruction makes before it moves tokens, in the order
//! the errors are reported, and touches no state.

use anchor_lang::prelude::*;

use crate::error::LockerError;
use crate::state::{AllocationEntry, Allocations, Locker};
use crate::utils::allowance;
use crate::utils::token_account::TokenAccountView;

impl Locker {
    /// Checks for `add_allocation`. `locker_key` is the delegate the admin
    /// must have approved.
    pub fn precheck_add(
        &self,
        locker_key: &Pubkey,
        caller: &Pubkey,
        allocations: &Allocations,
        beneficiary: &Pubkey,
        amount: u64,
        source: &TokenAccountView,
    ) -> core::result::Result<(), LockerError> {
        self.assert_admin(caller)?;
        if amount == 0 {
            return Err(LockerError::InvalidAmount);
        }
        if *beneficiary == Pubkey::default() {
            return Err(LockerError::InvalidBeneficiary);
        }
        source.ensure_held_by(&self.mint, caller)?;
        allowance::ensure_allowance(
            source.delegate,
            source.delegated_amount,
            locker_key,
            amount,
        )?;
        allocations.ensure_vacant(beneficiary)
    }

    /// Checks for `remove_allocation`; returns the entry to refund.
    /// Cancellation ignores the time lock.
    pub fn precheck_remove(
        &self,
        caller: &Pubkey,
        allocations: &Allocations,
        beneficiary: &Pubkey,
        destination: &TokenAccountView,
        vault_balance: u64,
    ) -> core::result::Result<AllocationEntry, LockerError> {
        self.assert_admin(caller)?;
        destination.ensure_held_by(&self.mint, caller)?;
        let entry = *allocations
            .get(beneficiary)
            .ok_or(LockerError::NoSuchAllocation)?;
        if vault_balance < entry.amount {
            return Err(LockerError::InsufficientFunds);
        }
        Ok(entry)
    }

    /// Checks for `claim_allocation`; `caller` is the beneficiary.
    /// `vault_balance` must be read at claim time: it can shrink outside
    /// this program.
    pub fn precheck_claim(
        &self,
        caller: &Pubkey,
        allocations: &Allocations,
        destination: &TokenAccountView,
        now: i64,
        vault_balance: u64,
    ) -> core::result::Result<AllocationEntry, LockerError> {
        let entry = *allocations
            .get(caller)
            .ok_or(LockerError::NoSuchAllocation)?;
        entry.ensure_claimable(now, vault_balance)?;
        destination.ensure_held_by(&self.mint, caller)?;
        Ok(entry)
    }
}
