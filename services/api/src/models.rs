//! API models for request and response payloads

use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

pub mod facility;
pub mod finance;
pub mod rent;
pub mod report;
pub mod room;
pub mod room_type;
pub mod tenant;
pub mod user;

pub use facility::*;
pub use finance::*;
pub use rent::*;
pub use report::*;
pub use room::*;
pub use room_type::*;
pub use tenant::*;
pub use user::*;

/// Acknowledgement returned by every delete endpoint
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct DeleteResponse {
    pub id: Uuid,
    pub message: String,
}

impl DeleteResponse {
    pub fn new(id: Uuid, resource: &str) -> Self {
        Self {
            id,
            message: format!("{} successfully deleted", resource),
        }
    }
}
