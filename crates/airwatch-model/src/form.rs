//! Ward composition form state
//!
//! Pure local draft of a ward before submission. The registry controller
//! and the front-end both drive this; nothing here touches the network.

use serde::{Deserialize, Serialize};

use crate::ward::{Facility, FacilityType, NewWard};

/// Per-type name/link pair pending submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacilityDraft {
    pub facility_type: FacilityType,
    pub name: String,
    pub link: String,
}

/// Which text field of a facility draft is being edited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FacilityField {
    Name,
    Link,
}

/// Why a submission was rejected before reaching the network
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormError {
    MissingName,
    NoFacilities,
}

impl FormError {
    /// One combined message covers both cases in the UI
    pub fn message(&self) -> &'static str {
        "Ward name and at least one facility are required"
    }
}

/// In-memory draft of a new ward
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegistryForm {
    pub name: String,
    pub link: String,
    pub facilities: Vec<FacilityDraft>,
}

impl RegistryForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `facility_type` is currently selected
    pub fn is_selected(&self, facility_type: FacilityType) -> bool {
        self.facilities
            .iter()
            .any(|f| f.facility_type == facility_type)
    }

    /// Select or deselect a facility type.
    ///
    /// Deselecting discards whatever name/link was typed for that type;
    /// selecting appends an empty draft. One state transition per call,
    /// so calling twice restores the prior selection.
    pub fn toggle_facility(&mut self, facility_type: FacilityType) {
        if self.is_selected(facility_type) {
            self.facilities.retain(|f| f.facility_type != facility_type);
        } else {
            self.facilities.push(FacilityDraft {
                facility_type,
                name: String::new(),
                link: String::new(),
            });
        }
    }

    /// Edit the name or link of an already-selected facility.
    ///
    /// Ignored when the type is not selected; only drafts matching the
    /// selected type are touched.
    pub fn update_facility_field(
        &mut self,
        facility_type: FacilityType,
        field: FacilityField,
        value: &str,
    ) {
        for draft in self
            .facilities
            .iter_mut()
            .filter(|f| f.facility_type == facility_type)
        {
            match field {
                FacilityField::Name => draft.name = value.to_string(),
                FacilityField::Link => draft.link = value.to_string(),
            }
        }
    }

    /// Build the POST payload, or report why the form is not submittable
    pub fn validate(&self) -> Result<NewWard, FormError> {
        if self.name.trim().is_empty() {
            return Err(FormError::MissingName);
        }
        if self.facilities.is_empty() {
            return Err(FormError::NoFacilities);
        }
        Ok(NewWard {
            name: self.name.clone(),
            link: self.link.clone(),
            facilities: self
                .facilities
                .iter()
                .map(|f| Facility {
                    facility_type: f.facility_type,
                    name: f.name.clone(),
                    link: f.link.clone(),
                })
                .collect(),
        })
    }

    /// Clear name, link, and facility selection
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
