/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
/// Request executor and HTTP client construction
pub mod http;
/// Query string builder for transaction listing
pub mod query;
/// Request models for API calls
pub mod requests;
/// Response models from API calls
pub mod responses;
