pub mod build;
pub mod clean;
pub mod plan;
pub mod preflight;
