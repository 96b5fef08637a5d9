use anchor_lang::prelude::*;

use crate::constants::MAX_ALLOCATIONS;
use crate::error::LockerError;

/// One escrowed allocation, keyed by beneficiary.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct AllocationEntry {
    pub beneficiary: Pubkey,
    pub amount: u64,
    /// Earliest unix timestamp at which the beneficiary may claim.
    pub unlock_ts: i64,
    pub created_ts: i64,
}

impl AllocationEntry {
    pub const SIZE: usize = 32 + 8 + 8 + 8;

    /// Inclusive at the boundary: claimable when `now == unlock_ts`.
    pub fn is_unlocked(&self, now: i64) -> bool {
        now >= self.unlock_ts
    }

    pub fn ensure_claimable(
        &self,
        now: i64,
        vault_balance: u64,
    ) -> core::result::Result<(), LockerError> {
        if !self.is_unlocked(now) {
            return Err(LockerError::TimeLockNotElapsed);
        }
        if vault_balance < self.amount {
            return Err(LockerError::InsufficientFunds);
        }
        Ok(())
    }
}

/// PDA holding the active allocations of a locker.
/// A beneficiary has an allocation iff it appears in `entries`.
#[account]
pub struct Allocations {
    pub locker: Pubkey,
    pub entries: Vec<AllocationEntry>,
}

impl Allocations {
    /// Space for discriminator + locker + vec header + max entries.
    pub const fn space() -> usize {
        8 + 32 + 4 + MAX_ALLOCATIONS * AllocationEntry::SIZE
    }

    pub fn get(&self, beneficiary: &Pubkey) -> Option<&AllocationEntry> {
        self.entries.iter().find(|e| e.beneficiary == *beneficiary)
    }

    pub fn contains(&self, beneficiary: &Pubkey) -> bool {
        self.get(beneficiary).is_some()
    }

    /// Checks that a new entry for `beneficiary` would be accepted.
    pub fn ensure_vacant(&self, beneficiary: &Pubkey) -> core::result::Result<(), LockerError> {
        if self.contains(beneficiary) {
            return Err(LockerError::DuplicateAllocation);
        }
        if self.entries.len() >= MAX_ALLOCATIONS {
            return Err(LockerError::AllocationListFull);
        }
        Ok(())
    }

    pub fn insert(&mut self, entry: AllocationEntry) -> core::result::Result<(), LockerError> {
        if entry.amount == 0 {
            return Err(LockerError::InvalidAmount);
        }
        if entry.beneficiary == Pubkey::default() {
            return Err(LockerError::InvalidBeneficiary);
        }
        self.ensure_vacant(&entry.beneficiary)?;
        self.entries.push(entry);
        Ok(())
    }

    /// Removes and returns the entry for `beneficiary`.
    pub fn remove_entry(
        &mut self,
        beneficiary: &Pubkey,
    ) -> core::result::Result<AllocationEntry, LockerError> {
        let idx = self
            .entries
            .iter()
            .position(|e| e.beneficiary == *beneficiary)
            .ok_or(LockerError::NoSuchAllocation)?;
        // Order carries no meaning.
        Ok(self.entries.swap_remove(idx))
    }

    /// Sum of all escrowed amounts.
    pub fn outstanding(&self) -> core::result::Result<u64, LockerError> {
        let mut sum: u64 = 0;
        for e in self.entries.iter() {
            sum = sum.checked_add(e.amount).ok_or(LockerError::MathOverflow)?;
        }
        Ok(sum)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SECONDS_PER_DAY;

    fn key(b: u8) -> Pubkey {
        Pubkey::new_from_array([b; 32])
    }

    fn entry(b: u8, amount: u64, unlock_ts: i64) -> AllocationEntry {
        AllocationEntry {
            beneficiary: key(b),
            amount,
            unlock_ts,
            created_ts: 0,
        }
    }

    fn empty() -> Allocations {
        Allocations {
            locker: key(100),
            entries: Vec::new(),
        }
    }

    #[test]
    fn insert_then_remove() {
        let mut book = empty();
        book.insert(entry(1, 10, 5)).unwrap();
        book.insert(entry(2, 20, 5)).unwrap();
        assert_eq!(book.outstanding().unwrap(), 30);

        let e = book.remove_entry(&key(1)).unwrap();
        assert_eq!(e.amount, 10);
        assert!(!book.contains(&key(1)));
        assert!(book.contains(&key(2)));
        assert_eq!(book.outstanding().unwrap(), 20);
    }

    #[test]
    fn remove_missing_fails() {
        let mut book = empty();
        assert!(matches!(
            book.remove_entry(&key(1)),
            Err(LockerError::NoSuchAllocation)
        ));

        book.insert(entry(1, 10, 5)).unwrap();
        book.remove_entry(&key(1)).unwrap();
        assert!(matches!(
            book.remove_entry(&key(1)),
            Err(LockerError::NoSuchAllocation)
        ));
    }

    #[test]
    fn duplicate_rejected_and_original_kept() {
        let mut book = empty();
        book.insert(entry(1, 10, 5)).unwrap();
        assert!(matches!(
            book.insert(entry(1, 99, 7)),
            Err(LockerError::DuplicateAllocation)
        ));
        assert_eq!(book.entries.len(), 1);
        assert_eq!(*book.get(&key(1)).unwrap(), entry(1, 10, 5));
    }

    #[test]
    fn zero_amount_and_default_beneficiary_rejected() {
        let mut book = empty();
        assert!(matches!(
            book.insert(entry(1, 0, 5)),
            Err(LockerError::InvalidAmount)
        ));
        assert!(matches!(
            book.insert(entry(0, 10, 5)),
            Err(LockerError::InvalidBeneficiary)
        ));
        assert!(book.entries.is_empty());
    }

    #[test]
    fn capacity_enforced() {
        let mut book = empty();
        for i in 0..MAX_ALLOCATIONS {
            let mut e = entry(1, 1, 0);
            let mut raw = [0u8; 32];
            raw[0] = 1;
            raw[1..9].copy_from_slice(&(i as u64).to_le_bytes());
            e.beneficiary = Pubkey::new_from_array(raw);
            book.insert(e).unwrap();
        }
        assert!(matches!(
            book.insert(entry(2, 1, 0)),
            Err(LockerError::AllocationListFull)
        ));
    }

    #[test]
    fn claim_window_inclusive() {
        let unlock = 1_000 + 5 * SECONDS_PER_DAY;
        let e = entry(1, 10, unlock);
        assert!(matches!(
            e.ensure_claimable(unlock - 1, 10),
            Err(LockerError::TimeLockNotElapsed)
        ));
        assert!(e.ensure_claimable(unlock, 10).is_ok());
        assert!(e.ensure_claimable(unlock + SECONDS_PER_DAY, 10).is_ok());
    }

    #[test]
    fn claim_needs_funds() {
        let e = entry(1, 10, 0);
        assert!(matches!(
            e.ensure_claimable(0, 9),
            Err(LockerError::InsufficientFunds)
        ));
        assert!(e.ensure_claimable(0, 10).is_ok());
    }

    #[test]
    fn time_lock_checked_before_funds() {
        let e = entry(1, 10, 100);
        assert!(matches!(
            e.ensure_claimable(99, 0),
            Err(LockerError::TimeLockNotElapsed)
        ));
    }

    #[test]
    fn past_unlock_immediately_claimable() {
        let e = entry(1, 10, -5);
        assert!(e.is_unlocked(0));
    }
}
