use thiserror::Error;

use crate::manifest::Str;

/// A generation request that is missing a required field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("name must be specified")]
    MissingName,

    #[error("image must be specified")]
    MissingImage,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(
        "generator `{generator}` is not supported, supported generators: {}",
        .supported.join(", ")
    )]
    UnsupportedGenerator {
        generator: Str,
        supported: Box<[&'static str]>,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
