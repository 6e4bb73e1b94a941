pub mod initialize;
pub mod join;
pub mod leave;
pub mod distribute;

pub use initialize::*;
pub use join::*;
pub use leave::*;
pub use distribute::*;
