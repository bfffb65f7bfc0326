/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use serde::Deserialize;

/// Fields of the `users/login` response body the session needs
///
/// Both fields are optional here so that a body missing either one can be
/// reported as an authentication failure instead of a decode error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginResponse {
    /// Id of the logged-in user
    #[serde(default)]
    pub id: Option<String>,
    /// Username of the logged-in user
    #[serde(default)]
    pub username: Option<String>,
}
