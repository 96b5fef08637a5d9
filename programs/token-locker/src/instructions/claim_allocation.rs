use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::{ALLOCATIONS_SEED, LOCKER_SEED, VAULT_SEED};
use crate::error::LockerError;
use crate::state::{Allocations, Locker};
use crate::utils::token_account::TokenAccountView;

/// The beneficiary is the signer; there is no beneficiary argument.
pub fn handle_claim_allocation(ctx: Context<ClaimAllocation>) -> Result<()> {
    let locker_ai = ctx.accounts.locker.to_account_info();
    let locker_key = ctx.accounts.locker.key();
    let st = &ctx.accounts.locker;
    let beneficiary = ctx.accounts.beneficiary.key();

    let now = Clock::get()?.unix_timestamp;
    let destination = TokenAccountView::from(&*ctx.accounts.beneficiary_token_account);
    let entry = match st.precheck_claim(
        &beneficiary,
        &ctx.accounts.allocations,
        &destination,
        now,
        ctx.accounts.vault.amount,
    ) {
        Ok(entry) => entry,
        Err(e) => {
            msg!(
                "claim rejected for {}: now={} vault={} ({})",
                beneficiary,
                now,
                ctx.accounts.vault.amount,
                e
            );
            return Err(e.into());
        }
    };

    ctx.accounts.allocations.remove_entry(&beneficiary)?;

    let signer_seeds: &[&[&[u8]]] = &[&[LOCKER_SEED, st.mint.as_ref(), &[st.bump]]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.vault.to_account_info(),
                to: ctx.accounts.beneficiary_token_account.to_account_info(),
                authority: locker_ai,
            },
            signer_seeds,
        ),
        entry.amount,
    )?;

    emit!(AllocationClaimed {
        locker: locker_key,
        beneficiary,
        amount: entry.amount,
        claimed_ts: now,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct ClaimAllocation<'info> {
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
    pub beneficiary_token_account: Account<'info, TokenAccount>,

    pub beneficiary: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct AllocationClaimed {
    pub locker: Pubkey,
    pub beneficiary: Pubkey,
    pub amount: u64,
    pub claimed_ts: i64,
}
