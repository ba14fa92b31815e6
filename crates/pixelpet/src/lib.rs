//! Headless host for PixelPet
//!
//! - Layered configuration (defaults, `pixelpet.ron`, `PIXELPET_` env vars)
//! - A session tying the life simulator to the body renderer
//! - Scripted player input for unattended runs

pub mod config;
pub mod script;
pub mod session;

pub use config::PetConfig;
pub use script::{Command, Script};
pub use session::Session;
