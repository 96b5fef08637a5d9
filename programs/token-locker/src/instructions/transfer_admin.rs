use anchor_lang::prelude::*;

use crate::constants::LOCKER_SEED;
use crate::state::Locker;

pub fn handle_transfer_admin(ctx: Context<TransferAdmin>, new_admin: Pubkey) -> Result<()> {
    let st = &mut ctx.accounts.locker;
    let old_admin = st.set_admin(&ctx.accounts.admin.key(), new_admin)?;

    emit!(AdminTransferred {
        locker: st.key(),
        old_admin,
        new_admin,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct TransferAdmin<'info> {
    #[account(mut, seeds = [LOCKER_SEED, locker.mint.as_ref()], bump = locker.bump)]
    pub locker: Account<'info, Locker>,

    pub admin: Signer<'info>,
}

#[event]
pub struct AdminTransferred {
    pub locker: Pubkey,
    pub old_admin: Pubkey,
    pub new_admin: Pubkey,
}
