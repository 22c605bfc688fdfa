//! Shared response envelope types for API handlers.
//!
//! Collection reads use the `{ "data": [...] }` envelope. Single actions
//! return their result object directly.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
///
/// ```ignore
/// Ok(Json(DataResponse { data: items }))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
