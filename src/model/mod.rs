/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
/// HTTP transport abstraction and the per-call request capability
pub mod http;
/// Page-index pagination over list endpoints
pub mod paging;
/// Request bodies sent to the server
pub mod requests;
/// Response bodies read by the client itself
pub mod responses;
