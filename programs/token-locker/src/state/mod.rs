pub mod allocations;
pub mod locker_state;
pub mod prechecks;

pub use allocations::*;
pub use locker_state::*;
