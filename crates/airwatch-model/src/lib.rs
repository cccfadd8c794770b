//! Airwatch shared data types
//!
//! Wire types for the air quality API plus the ward composition form.
//! Pure serde, no I/O, so both the native controllers and the wasm
//! front-end can depend on this crate.

pub mod form;
pub mod reading;
pub mod ward;

pub use form::{FacilityDraft, FacilityField, FormError, RegistryForm};
pub use reading::Reading;
pub use ward::{ErrorBody, Facility, FacilityType, NewWard, Ward};
