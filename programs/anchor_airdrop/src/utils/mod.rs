pub mod authority;
pub mod lamports;
pub mod token;

pub use authority::*;
pub use lamports::*;
pub use token::*;
