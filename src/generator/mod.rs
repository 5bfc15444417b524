//! Code generation component.
//!
//! Produces one random code per call, uniformly drawn from either a numeric
//! or an uppercase-alphanumeric alphabet, using the OS CSPRNG.

mod config;
mod service;

pub use config::{GeneratorConfig, GeneratorOptions, DEFAULT_CODE_LENGTH};
pub use service::CodeGenerator;
