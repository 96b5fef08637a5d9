use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;

use crate::constants::{ALLOCATIONS_SEED, LOCKER_SEED, VAULT_SEED};
use crate::error::LockerError;
use crate::state::{Allocations, Locker};

pub fn handle_emit_allocation_quote(
    ctx: Context<EmitAllocationQuote>,
    beneficiary: Pubkey,
) -> Result<()> {
    let entry = ctx
        .accounts
        .allocations
        .get(&beneficiary)
        .ok_or(LockerError::NoSuchAllocation)?;

    let now = Clock::get()?.unix_timestamp;
    let claimable = entry
        .ensure_claimable(now, ctx.accounts.vault.amount)
        .is_ok();

    emit!(AllocationQuote {
        beneficiary,
        amount: entry.amount,
        unlock_ts: entry.unlock_ts,
        created_ts: entry.created_ts,
        now,
        claimable,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct EmitAllocationQuote<'info> {
    #[account(seeds = [LOCKER_SEED, locker.mint.as_ref()], bump = locker.bump)]
    pub locker: Account<'info, Locker>,

    #[account(
        seeds = [ALLOCATIONS_SEED, locker.key().as_ref()],
        bump
    )]
    pub allocations: Box<Account<'info, Allocations>>,

    #[account(
        seeds = [VAULT_SEED, locker.key().as_ref()],
        bump = locker.vault_bump
    )]
    pub vault: Account<'info, TokenAccount>,
}

#[event]
pub struct AllocationQuote {
    pub beneficiary: Pubkey,
    pub amount: u64,
    pub unlock_ts: i64,
    pub created_ts: i64,
    pub now: i64,
    pub claimable: bool,
}
