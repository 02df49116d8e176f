pub mod catalog;
pub mod user;

pub use catalog::*;
pub use user::*;
