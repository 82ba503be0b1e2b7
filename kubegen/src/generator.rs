mod pod;
mod registry;

pub use self::pod::PodGeneratorV1;
pub use self::registry::{GeneratorFactory, GeneratorRegistry};

use crate::{error::Result, manifest::Str, resource::Resource};

/// Inputs gathered from the command line for a single generation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GenerationRequest {
    pub name: Str,
    pub images: Box<[Str]>,
}

impl GenerationRequest {
    pub fn new(name: impl Into<Str>, images: impl IntoIterator<Item = impl Into<Str>>) -> Self {
        Self {
            name: name.into(),
            images: images.into_iter().map(Into::into).collect(),
        }
    }
}

/// A generator that is configured at construction and outputs a complete object.
pub trait StructuredGenerator: Send + Sync {
    fn generate(&self) -> Result<Resource>;
}
