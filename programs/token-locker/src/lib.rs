#![allow(unexpected_cfgs)]

use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;


pub use instructions::*;

declare_id!("HgVFmKmwgrMvfP8CDfbGFaXLTviL56RQuJ4Eyen8KrQh");

#[program]
pub mod token_locker {
    use super::*;

    pub fn initialize_locker(ctx: Context<InitializeLocker>) -> Result<()> {
        instructions::handle_initialize_locker(ctx)
    }

    pub fn transfer_admin(ctx: Context<TransferAdmin>, new_admin: Pubkey) -> Result<()> {
        instructions::handle_transfer_admin(ctx, new_admin)
    }

    pub fn renounce_admin(ctx: Context<RenounceAdmin>) -> Result<()> {
        instructions::handle_renounce_admin(ctx)
    }

    pub fn add_allocation(
        ctx: Context<AddAllocation>,
        beneficiary: Pubkey,
        unlock_ts: i64,
        amount: u64,
    ) -> Result<()> {
        instructions::handle_add_allocation(ctx, beneficiary, unlock_ts, amount)
    }

    pub fn remove_allocation(ctx: Context<RemoveAllocation>, beneficiary: Pubkey) -> Result<()> {
        instructions::handle_remove_allocation(ctx, beneficiary)
    }

    pub fn claim_allocation(ctx: Context<ClaimAllocation>) -> Result<()> {
        instructions::handle_claim_allocation(ctx)
    }

    pub fn emit_locker_info(ctx: Context<EmitLockerInfo>) -> Result<()> {
        instructions::handle_emit_locker_info(ctx)
    }

    pub fn emit_allocation_quote(
        ctx: Context<EmitAllocationQuote>,
        beneficiary: Pubkey,
    ) -> Result<()> {
        instructions::handle_emit_allocation_quote(ctx, beneficiary)
    }
}
