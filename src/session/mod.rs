/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
/// Session manager: sign-in, background renewal and shutdown
pub mod auth;
/// Session lifecycle states
pub mod state;
/// Atomically swappable access token slot
pub mod token;
