use anchor_lang::prelude::*;

use crate::error::LockerError;

/// Per-mint locker state PDA.
#[account]
pub struct Locker {
    /// Token mint this locker escrows.
    pub mint: Pubkey,
    /// Admin authority; `Pubkey::default()` once renounced.
    pub admin: Pubkey,
    /// Vault token account (PDA, authority = this locker).
    pub vault: Pubkey,
    /// Locker PDA bump.
    pub bump: u8,
    /// Vault PDA bump.
    pub vault_bump: u8,
}

impl Locker {
    pub const SIZE: usize =
        32 + // mint
        32 + // admin
        32 + // vault
        1 +  // bump
        1;   // vault_bump

    pub fn is_renounced(&self) -> bool {
        self.admin == Pubkey::default()
    }

    /// Gate for admin-only instructions. A renounced locker rejects everyone.
    pub fn assert_admin(&self, caller: &Pubkey) -> core::result::Result<(), LockerError> {
        if self.is_renounced() || *caller != self.admin {
            return Err(LockerError::Unauthorized);
        }
        Ok(())
    }

    /// Hand the admin role to `new_admin`, returning the previous admin.
    pub fn set_admin(
        &mut self,
        caller: &Pubkey,
        new_admin: Pubkey,
    ) -> core::result::Result<Pubkey, LockerError> {
        self.assert_admin(caller)?;
        if new_admin == Pubkey::default() {
            return Err(LockerError::InvalidAdmin);
        }
        let old = self.admin;
        self.admin = new_admin;
        Ok(old)
    }

    /// Clear the admin for good. Returns the admin that renounced.
    pub fn renounce(&mut self, caller: &Pubkey) -> core::result::Result<Pubkey, LockerError> {
        self.assert_admin(caller)?;
        let old = self.admin;
        self.admin = Pubkey::default();
        Ok(old)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(b: u8) -> Pubkey {
        Pubkey::new_from_array([b; 32])
    }

    fn locker(admin: Pubkey) -> Locker {
        Locker {
            mint: key(200),
            admin,
            vault: key(201),
            bump: 255,
            vault_bump: 254,
        }
    }

    #[test]
    fn only_admin_passes_gate() {
        let st = locker(key(1));
        assert!(st.assert_admin(&key(1)).is_ok());
        assert!(matches!(
            st.assert_admin(&key(9)),
            Err(LockerError::Unauthorized)
        ));
    }

    #[test]
    fn transfer_admin_moves_role() {
        let mut st = locker(key(1));
        assert!(matches!(
            st.set_admin(&key(9), key(9)),
            Err(LockerError::Unauthorized)
        ));
        assert_eq!(st.admin, key(1));

        assert_eq!(st.set_admin(&key(1), key(2)).unwrap(), key(1));
        assert_eq!(st.admin, key(2));
        // Old admin lost the role.
        assert!(matches!(
            st.assert_admin(&key(1)),
            Err(LockerError::Unauthorized)
        ));
    }

    #[test]
    fn transfer_to_self_is_noop() {
        let mut st = locker(key(1));
        st.set_admin(&key(1), key(1)).unwrap();
        assert_eq!(st.admin, key(1));
    }

    #[test]
    fn transfer_to_default_rejected() {
        let mut st = locker(key(1));
        assert!(matches!(
            st.set_admin(&key(1), Pubkey::default()),
            Err(LockerError::InvalidAdmin)
        ));
        assert_eq!(st.admin, key(1));
    }

    #[test]
    fn renounce_is_permanent() {
        let mut st = locker(key(1));
        assert!(matches!(st.renounce(&key(9)), Err(LockerError::Unauthorized)));

        st.renounce(&key(1)).unwrap();
        assert!(st.is_renounced());
        assert_eq!(st.admin, Pubkey::default());

        for caller in [key(1), key(9), Pubkey::default()] {
            assert!(matches!(
                st.assert_admin(&caller),
                Err(LockerError::Unauthorized)
            ));
            assert!(matches!(
                st.set_admin(&caller, key(3)),
                Err(LockerError::Unauthorized)
            ));
            assert!(matches!(st.renounce(&caller), Err(LockerError::Unauthorized)));
        }
    }
}
