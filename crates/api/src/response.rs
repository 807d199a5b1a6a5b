//! Response bodies that are not plain records or record lists.
//!
//! Records, arrays and the paginated listing are serialized bare, as the web
//! client expects.

use serde::Serialize;

/// `{ "message": "..." }` acknowledgement.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
