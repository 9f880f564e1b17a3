//! Wire body sent to the form service.
//!
//! DESIGN
//! ======
//! The service accepts a flat JSON object, so form values and UTM keys are
//! flattened side by side rather than nested.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::Serialize;

use crate::state::lead_form::FormValues;
use crate::util::utm::UtmParams;

/// One lead submission.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LeadPayload {
    #[serde(flatten)]
    pub values: FormValues,
    /// Only present keys are serialized.
    #[serde(flatten)]
    pub utm: UtmParams,
}

impl LeadPayload {
    pub fn new(values: FormValues, utm: UtmParams) -> Self {
        Self { values, utm }
    }

    /// Serialize to the JSON request body.
    ///
    /// # Errors
    ///
    /// Returns the serializer error; not expected for string-only fields.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
