/// Virtual card records and their nested types
pub mod card;
/// Card transaction records
pub mod transaction;
/// User records
pub mod user;

pub use card::*;
pub use transaction::*;
pub use user::*;
