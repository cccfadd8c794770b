//! Airwatch core - screen controllers and REST client
//!
//! The two screens of the app live here as explicit state owners: the
//! live readings screen with its fixed-interval poll loop, and the ward
//! registry with its CRUD operations. Rendering layers subscribe to the
//! state these controllers own; nothing here draws anything.

pub mod client;
pub mod config;
pub mod error;
pub mod io;
pub mod notice;
pub mod readings;
pub mod registry;

pub use client::{AirQualityApi, RestClient};
pub use config::Config;
pub use error::{AirwatchError, Result};
pub use notice::{Notice, NoticeLevel, NoticeQueue};
pub use readings::{new_readings_handle, poll_loop, poll_once, ReadingsHandle, ReadingsScreen};
pub use registry::{LoadPhase, WardRegistry};
