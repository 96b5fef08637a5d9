use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::{ALLOCATIONS_SEED, LOCKER_SEED, VAULT_SEED};
use crate::error::LockerError;
use crate::state::{AllocationEntry, Allocations, Locker};
use crate::utils::token_account::TokenAccountView;

pub fn handle_add_allocation(
    ctx: Context<AddAllocation>,
    beneficiary: Pubkey,
    unlock_ts: i64,
    amount: u64,
) -> Result<()> {
    let locker_ai = ctx.accounts.locker.to_account_info();
    let locker_key = ctx.accounts.locker.key();
    let st = &ctx.accounts.locker;

    // Allowance is checked before anything moves.
    let source = TokenAccountView::from(&*ctx.accounts.admin_token_account);
    st.precheck_add(
        &locker_key,
        &ctx.accounts.admin.key(),
        &ctx.accounts.allocations,
        &beneficiary,
        amount,
        &source,
    )?;

    // Pull from the admin as delegate; the locker PDA signs.
    let mint_key = st.mint;
    let signer_seeds: &[&[&[u8]]] = &[&[LOCKER_SEED, mint_key.as_ref(), &[st.bump]]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.admin_token_account.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
                authority: locker_ai,
            },
            signer_seeds,
        ),
        amount,
    )?;

    let now = Clock::get()?.unix_timestamp;
    ctx.accounts.allocations.insert(AllocationEntry {
        beneficiary,
        amount,
        unlock_ts,
        created_ts: now,
    })?;

    if unlock_ts <= now {
        msg!("allocation for {} is claimable immediately", beneficiary);
    }

    emit!(AllocationAdded {
        locker: locker_key,
        beneficiary,
        amount,
        unlock_ts,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct AddAllocation<'info> {
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
    pub admin_token_account: Account<'info, TokenAccount>,

    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct AllocationAdded {
    pub locker: Pubkey,
    pub beneficiary: Pubkey,
    pub amount: u64,
    pub unlock_ts: i64,
}
