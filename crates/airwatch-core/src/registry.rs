//! Ward registry screen: collection, composition form, CRUD commands

use std::sync::Arc;

use airwatch_model::{FacilityField, FacilityType, RegistryForm, Ward};

use crate::client::AirQualityApi;
use crate::notice::{Notice, NoticeQueue};
use crate::{AirwatchError, Result};

const NOTICE_CAPACITY: usize = 16;

/// Initial-load progress of the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    Idle,
    Loading,
    Ready,
}

/// Controller owning all state of the ward registry screen.
///
/// CRUD commands are one-shot: local state changes only after the
/// request resolves, and a failed request leaves it untouched.
pub struct WardRegistry {
    api: Arc<dyn AirQualityApi>,
    pub wards: Vec<Ward>,
    pub form: RegistryForm,
    pub phase: LoadPhase,
    pub notices: NoticeQueue,
}

impl std::fmt::Debug for WardRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WardRegistry")
            .field("wards", &self.wards.len())
            .field("phase", &self.phase)
            .finish()
    }
}

impl WardRegistry {
    pub fn new(api: Arc<dyn AirQualityApi>) -> Self {
        Self {
            api,
            wards: Vec::new(),
            form: RegistryForm::new(),
            phase: LoadPhase::Idle,
            notices: NoticeQueue::new(NOTICE_CAPACITY),
        }
    }

    /// Fetch all wards once, on screen activation
    pub async fn load(&mut self) {
        self.phase = LoadPhase::Loading;
        match self.api.list_wards().await {
            Ok(wards) => {
                tracing::debug!("Loaded {} wards", wards.len());
                self.wards = wards;
            }
            Err(e) => {
                tracing::warn!("Failed to fetch wards: {}", e);
                self.notices.push(Notice::error("Failed to fetch wards"));
            }
        }
        self.phase = LoadPhase::Ready;
    }

    /// Select or deselect a facility type in the draft. Local only.
    pub fn toggle_facility(&mut self, facility_type: FacilityType) {
        self.form.toggle_facility(facility_type);
    }

    /// Edit a selected facility's name or link in the draft. Local only.
    pub fn update_facility_field(
        &mut self,
        facility_type: FacilityType,
        field: FacilityField,
        value: &str,
    ) {
        self.form.update_facility_field(facility_type, field, value);
    }

    /// Validate the draft and POST it.
    ///
    /// Validation failure never reaches the network. On success the
    /// server's ward is appended and the form resets; on failure the
    /// form is preserved so the user can retry.
    pub async fn create_ward(&mut self) -> Result<()> {
        let payload = match self.form.validate() {
            Ok(payload) => payload,
            Err(e) => {
                self.notices.push(Notice::error(e.message()));
                return Err(AirwatchError::InvalidForm(e.message()));
            }
        };

        match self.api.create_ward(&payload).await {
            Ok(created) => {
                tracing::debug!("Created ward '{}' with id {}", created.name, created.id);
                self.wards.push(created);
                self.form.reset();
                self.notices.push(Notice::success("Ward created successfully"));
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Failed to create ward: {}", e);
                let message = match &e {
                    AirwatchError::Api { message, .. } => {
                        format!("Failed to create ward: {}", message)
                    }
                    _ => "Failed to create ward".to_string(),
                };
                self.notices.push(Notice::error(message));
                Err(e)
            }
        }
    }

    /// DELETE a ward by id, removing it locally only after the server
    /// confirms.
    pub async fn delete_ward(&mut self, id: &str) -> Result<()> {
        match self.api.delete_ward(id).await {
            Ok(()) => {
                tracing::debug!("Deleted ward {}", id);
                self.wards.retain(|w| w.id != id);
                self.notices.push(Notice::success("Ward deleted successfully"));
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Failed to delete ward {}: {}", id, e);
                self.notices.push(Notice::error("Failed to delete ward"));
                Err(e)
            }
        }
    }
}
