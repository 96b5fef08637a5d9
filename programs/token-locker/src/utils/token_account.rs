//! Plain view of the SPL token account fields the locker inspects.

use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;

use crate::error::LockerError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TokenAccountView {
    pub mint: Pubkey,
    pub owner: Pubkey,
    pub amount: u64,
    pub delegate: Option<Pubkey>,
    pub delegated_amount: u64,
}

impl From<&TokenAccount> for TokenAccountView {
    fn from(account: &TokenAccount) -> Self {
        Self {
            mint: account.mint,
            owner: account.owner,
            amount: account.amount,
            delegate: account.delegate.into(),
            delegated_amount: account.delegated_amount,
        }
    }
}

impl TokenAccountView {
    /// Account must hold `mint` and belong to `owner`.
    pub fn ensure_held_by(
        &self,
        mint: &Pubkey,
        owner: &Pubkey,
    ) -> core::result::Result<(), LockerError> {
        if self.mint != *mint {
            return Err(LockerError::InvalidTokenMint);
        }
        if self.owner != *owner {
            return Err(LockerError::InvalidTokenAccount);
        }
        Ok(())
    }
}
