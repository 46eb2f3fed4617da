/// Client implementing every API operation on top of a session
pub mod client;
/// Operation traits
pub mod interfaces;
