pub mod cmd;
pub mod error;
pub mod generator;
pub mod image;
pub mod logging;
pub mod manifest;
pub mod resource;
pub mod submit;

pub use self::cmd::Cli;
pub use self::error::{Error, Result, ValidationError};
pub use self::generator::{
    GenerationRequest, GeneratorFactory, GeneratorRegistry, PodGeneratorV1, StructuredGenerator,
};
pub use self::resource::{Container, Pod, Resource};

/// Generates a pod with the builtin generator registered under `generator`.
pub fn generate_pod(generator: &str, request: GenerationRequest) -> Result<Resource> {
    let factory = GeneratorRegistry::pods().resolve(generator)?;
    factory(request).generate()
}
