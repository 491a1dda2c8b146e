//! Typed request contracts for the CRUD form posts.
//!
//! Field presence is checked once here at the boundary; handlers only
//! see payloads that already passed `validate()`. Fields are `Option` so
//! an absent field and an empty field both surface as the same
//! validation failure instead of a deserialization error.

use rolodex_db::models::record::{NewRecord, RecordPatch};
use serde::Deserialize;
use validator::Validate;

/// Payload for `POST /create-a-db-record`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateRecordForm {
    #[validate(required, length(min = 1))]
    pub name: Option<String>,
    #[validate(required, length(min = 1))]
    pub email: Option<String>,
    #[validate(required, length(min = 1))]
    pub phone: Option<String>,
}

impl CreateRecordForm {
    /// The insert payload. Meaningful only after `validate()` has passed.
    pub fn into_new_record(self) -> NewRecord {
        NewRecord {
            name: self.name.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            phone: self.phone.unwrap_or_default(),
        }
    }
}

/// Payload for `POST /update-a-db-record`. All four fields are required.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateRecordForm {
    #[validate(required, length(min = 1))]
    pub id: Option<String>,
    #[validate(required, length(min = 1))]
    pub name: Option<String>,
    #[validate(required, length(min = 1))]
    pub email: Option<String>,
    #[validate(required, length(min = 1))]
    pub phone: Option<String>,
}

impl UpdateRecordForm {
    /// The update payload. Meaningful only after `validate()` has passed.
    pub fn into_patch(self) -> RecordPatch {
        RecordPatch {
            name: self.name.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            phone: self.phone.unwrap_or_default(),
        }
    }
}

/// Payload for `POST /delete-a-db-record`. Deletion is keyed on `name`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct DeleteRecordForm {
    #[validate(required, length(min = 1))]
    pub name: Option<String>,
}
