#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::unnecessary_literal_bound,
    clippy::module_name_repetitions,
    clippy::struct_field_names,
    clippy::must_use_candidate,
    clippy::new_without_default,
    clippy::return_self_not_must_use
)]

pub mod brand;
pub mod composer;
pub mod config;
pub mod contracts;
pub mod error;
pub mod evaluator;
pub mod gateway;
pub mod guidance;
pub mod layers;
pub mod library;
pub mod orchestrator;
pub mod retrieval;

pub use composer::Composer;
pub use config::Config;
pub use error::{AguiError, Result};
