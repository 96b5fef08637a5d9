pub mod initialize_locker;
pub mod transfer_admin;
pub mod renounce_admin;
pub mod add_allocation;
pub mod remove_allocation;
pub mod claim_allocation;
pub mod emit_locker_info;
pub mod emit_allocation_quote;

pub use initialize_locker::*;
pub use transfer_admin::*;
pub use renounce_admin::*;
pub use add_allocation::*;
pub use remove_allocation::*;
pub use claim_allocation::*;
pub use emit_locker_info::*;
pub use emit_allocation_quote::*;
