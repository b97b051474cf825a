pub mod guidelines;
pub mod presets;
pub mod session;
pub mod titles;
