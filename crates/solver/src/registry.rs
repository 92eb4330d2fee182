//! Engine selection by configuration string.
//!
//! The interchangeable strategies all satisfy the `Engine` trait; callers
//! pick one by name at startup rather than linking against a concrete type.

use thiserror::Error;

use chess_core::Engine;
use classical_engine::ClassicalEngine;
use external_engine::ExternalEngine;
use random_engine::RandomEngine;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("unknown engine '{0}' (expected classical, random, or external:<path>)")]
    UnknownEngine(String),
    #[error("engine spec '{0}' needs a path, e.g. external:./engines/ktybx")]
    MissingPath(String),
}

/// Look up a search strategy:
/// - `classical`: the in-process iterative alpha-beta driver (default)
/// - `random`: uniform random baseline
/// - `external:<path>`: subprocess adapter around the binary at `<path>`
///
/// Unknown names are an error, never a silent fallback.
pub fn create_engine(spec: &str) -> Result<Box<dyn Engine>, RegistryError> {
    let (kind, arg) = match spec.split_once(':') {
        Some((kind, arg)) => (kind, Some(arg)),
        None => (spec, None),
    };

    match kind.to_lowercase().as_str() {
        "classical" | "classic" => Ok(Box::new(ClassicalEngine::new())),
        "random" => Ok(Box::new(RandomEngine::new())),
        "external" => match arg {
            Some(path) if !path.is_empty() => Ok(Box::new(ExternalEngine::new(path))),
            _ => Err(RegistryError::MissingPath(spec.to_string())),
        },
        _ => Err(RegistryError::UnknownEngine(spec.to_string())),
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod registry_tests;
