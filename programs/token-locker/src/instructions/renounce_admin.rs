use anchor_lang::prelude::*;

use crate::constants::LOCKER_SEED;
use crate::state::Locker;

pub fn handle_renounce_admin(ctx: Context<RenounceAdmin>) -> Result<()> {
    let st = &mut ctx.accounts.locker;
    let old_admin = st.renounce(&ctx.accounts.admin.key())?;
    msg!("admin renounced: {}", old_admin);

    emit!(AdminRenounced {
        locker: st.key(),
        old_admin,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct RenounceAdmin<'info> {
    #[account(mut, seeds = [LOCKER_SEED, locker.mint.as_ref()], bump = locker.bump)]
    pub locker: Account<'info, Locker>,

    pub admin: Signer<'info>,
}

#[event]
pub struct AdminRenounced {
    pub locker: Pubkey,
    pub old_admin: Pubkey,
}
