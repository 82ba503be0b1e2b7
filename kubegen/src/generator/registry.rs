use std::{fmt, sync::LazyLock};

use indexmap::IndexMap;

use crate::error::{Error, Result};

use super::{GenerationRequest, PodGeneratorV1, StructuredGenerator};

pub type GeneratorFactory = fn(GenerationRequest) -> Box<dyn StructuredGenerator>;

/// Maps generator names, as passed to `--generator`, to the generators they construct.
#[derive(Default)]
pub struct GeneratorRegistry {
    factories: IndexMap<&'static str, GeneratorFactory>,
}

impl GeneratorRegistry {
    pub const POD_V1: &'static str = "v1";

    /// The registry of generators for `create pod`.
    pub fn pods() -> &'static Self {
        static PODS: LazyLock<GeneratorRegistry> = LazyLock::new(|| {
            let mut registry = GeneratorRegistry::default();
            registry.register(GeneratorRegistry::POD_V1, PodGeneratorV1::factory);
            registry
        });
        &PODS
    }

    /// Registers `factory` under `name`, replacing any previous registration.
    pub fn register(&mut self, name: &'static str, factory: GeneratorFactory) {
        self.factories.insert(name, factory);
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.factories.keys().copied()
    }

    pub fn resolve(&self, name: &str) -> Result<GeneratorFactory> {
        self.factories
            .get(name)
            .copied()
            .ok_or_else(|| Error::UnsupportedGenerator {
                generator: name.into(),
                supported: self.names().collect(),
            })
    }
}

impl fmt::Debug for GeneratorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.names()).finish()
    }
}
