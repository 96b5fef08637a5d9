use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{ALLOCATIONS_SEED, LOCKER_SEED, VAULT_SEED};
use crate::state::{Allocations, Locker};

pub fn handle_initialize_locker(ctx: Context<InitializeLocker>) -> Result<()> {
    let locker_key = ctx.accounts.locker.key();

    let st = &mut ctx.accounts.locker;
    st.mint = ctx.accounts.mint.key();
    st.admin = ctx.accounts.admin.key();
    st.vault = ctx.accounts.vault.key();
    st.bump = ctx.bumps.locker;
    st.vault_bump = ctx.bumps.vault;

    let allocations = &mut ctx.accounts.allocations;
    allocations.locker = locker_key;
    allocations.entries = Vec::new();

    emit!(LockerInitialized {
        locker: locker_key,
        mint: st.mint,
        admin: st.admin,
        vault: st.vault,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct InitializeLocker<'info> {
    #[account(
        init,
        payer = admin,
        space = 8 + Locker::SIZE,
        seeds = [LOCKER_SEED, mint.key().as_ref()],
        bump
    )]
    pub locker: Account<'info, Locker>,

    #[account(
        init,
        payer = admin,
        space = Allocations::space(),
        seeds = [ALLOCATIONS_SEED, locker.key().as_ref()],
        bump
    )]
    pub allocations: Box<Account<'info, Allocations>>,

    #[account(
        init,
        payer = admin,
        token::mint = mint,
        token::authority = locker,
        seeds = [VAULT_SEED, locker.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[event]
pub struct LockerInitialized {
    pub locker: Pubkey,
    pub mint: Pubkey,
    pub admin: Pubkey,
    pub vault: Pubkey,
}
