/// Account operations
pub mod account;
/// Virtual card operations
pub mod virtual_card;

pub use account::AccountService;
pub use virtual_card::VirtualCardService;
