/*
[INPUT]:  Backend response wrapper shape
[OUTPUT]: Generic `{ "data": ... }` envelope
[POS]:    Data layer - response envelope shared by all endpoints
[UPDATE]: When the backend changes its success body layout
*/

use serde::{Deserialize, Serialize};

/// Success body wrapper used by every backend endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub data: T,
}

impl<T> ApiEnvelope<T> {
    pub fn into_data(self) -> T {
        self.data
    }
}
