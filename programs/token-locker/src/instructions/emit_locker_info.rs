use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;

use crate::constants::{ALLOCATIONS_SEED, LOCKER_SEED, VAULT_SEED};
use crate::state::{Allocations, Locker};

pub fn handle_emit_locker_info(ctx: Context<EmitLockerInfo>) -> Result<()> {
    let st = &ctx.accounts.locker;
    let allocations = &ctx.accounts.allocations;

    emit!(LockerInfo {
        locker: st.key(),
        mint: st.mint,
        admin: st.admin,
        renounced: st.is_renounced(),
        vault: st.vault,
        vault_balance: ctx.accounts.vault.amount,
        allocation_count: allocations.entries.len() as u32,
        outstanding: allocations.outstanding()?,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct EmitLockerInfo<'info> {
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
pub struct LockerInfo {
    pub locker: Pubkey,
    pub mint: Pubkey,
    pub admin: Pubkey,
    pub renounced: bool,
    pub vault: Pubkey,
    pub vault_balance: u64,
    pub allocation_count: u32,
    pub outstanding: u64,
}
