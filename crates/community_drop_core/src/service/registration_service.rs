//! Hub registration submission.

use crate::model::hub::HubKind;
use crate::model::registration::{HubRegistration, RegistrationValidationError};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Confirmation message shown after a successful submission.
pub const REGISTRATION_ACK_MESSAGE: &str =
    "We'll review your application and get back to you within 48 hours.";

/// Accepted registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationReceipt {
    pub application_id: Uuid,
    pub hub_name: String,
    pub hub_type: HubKind,
    pub capacity: u32,
    pub message: String,
}

/// Validates `form` and issues a receipt. Nothing is persisted.
pub fn submit_registration(
    form: &HubRegistration,
) -> Result<RegistrationReceipt, RegistrationValidationError> {
    let capacity = match form.validate() {
        Ok(capacity) => capacity,
        Err(err) => {
            warn!(
                "event=hub_registration module=registration status=rejected field={}",
                err.field()
            );
            return Err(err);
        }
    };

    let receipt = RegistrationReceipt {
        application_id: Uuid::new_v4(),
        hub_name: form.hub_name.trim().to_string(),
        hub_type: form.hub_type,
        capacity,
        message: REGISTRATION_ACK_MESSAGE.to_string(),
    };
    info!(
        "event=hub_registration module=registration status=ok application_id={} hub_type={}",
        receipt.application_id,
        receipt.hub_type.as_str()
    );
    Ok(receipt)
}
