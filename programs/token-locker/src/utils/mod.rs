pub mod allowance;
pub mod token_account;
