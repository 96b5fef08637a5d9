use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::{ALLOCATIONS_SEED, LOCKER_SEED, VAULT_SEED};
use crate::error::LockerError;
use crate::state::{Allocations, Locker};
use crate::utils::token_account::TokenAccountView;

pub fn handle_remove_allocation(
    ctx: Context<RemoveAllocation>,
    beneficiary: Pubkey,
) -> Result<()> {
    let locker_ai = ctx.accounts.locker.to_account_info();
    let locker_key = ctx.accounts.locker.key();
    let st = &ctx.accounts.locker;

    let destination = TokenAccountView::from(&*ctx.accounts.admin_destination);
    let entry = st.precheck_remove(
        &ctx.accounts.admin.key(),
        &ctx.accounts.allocations,
        &beneficiary,
        &destination,
        ctx.accounts.vault.amount,
    )?;

    ctx.accounts.allocations.remove_entry(&beneficiary)?;

    let signer_seeds: &[&[&[u8]]] = &[&[LOCKER_SEED, st.mint.as_ref(), &[st.bump]]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.vault.to_account_info(),
                to: ctx.accounts.admin_destination.to_account_info(),
                authority: locker_ai,
            },
            signer_seeds,
        ),
        entry.amount,
    )?;

    emit!(AllocationRemoved {
        locker: locker_key,
        beneficiary,
        amount: entry.amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct RemoveAllocation<'info> {
    #[account(seeds = [LOCKER_SEED, locker.mint.as_ref()], bump = locker.bump)]
    pub locker: Account<'info, Locker>,

    #[account(
        mut,
        seeds = [ALLOCATIONS_SEED, locker.key().as_ref()],
        bump
    )]
    pub allocations: Box<Account<'info, Allocations>>,

    #[account(
        mut,
        seeds = [VAULT_SEED, locker.key().as_ref()],
        bump = locker.vault_bump,
        constraint = vault.mint == locker.mint @ LockerError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub admin_destination: Account<'info, TokenAccount>,

    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct AllocationRemoved {
    pub locker: Pubkey,
    pub beneficiary: Pubkey,
    pub amount: u64,
}
