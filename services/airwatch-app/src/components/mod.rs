pub mod facility_badge;
pub mod readings_screen;
pub mod ward_screen;
