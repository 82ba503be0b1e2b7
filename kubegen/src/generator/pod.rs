
use indexmap::IndexMap;

use crate::{
    error::{Result, ValidationError},
    image,
    resource::{Container, Metadata, Pod, PodSpec, Resource},
};

use super::{GenerationRequest, StructuredGenerator};

/// Stable generation of a pod running one container per image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PodGeneratorV1 {
    request: GenerationRequest,
}

impl PodGeneratorV1 {
    pub fn new(request: GenerationRequest) -> Self {
        Self { request }
    }

    pub fn factory(request: GenerationRequest) -> Box<dyn StructuredGenerator> {
        Box::new(Self::new(request))
    }

    /// Checks that the fields required for generation are set.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.request.name.is_empty() {
            return Err(ValidationError::MissingName);
        }

        if self.request.images.is_empty() {
            return Err(ValidationError::MissingImage);
        }

        Ok(())
    }

    fn build_pod_spec(&self) -> PodSpec {
        let containers = self
            .request
            .images
            .iter()
            .map(|image| Container {
                name: image::container_name(image).into(),
                image: image.clone(),
            })
            .collect();

        PodSpec { containers }
    }
}

impl StructuredGenerator for PodGeneratorV1 {
    #[tracing::instrument(
        skip_all,
        name = "generate_pod",
        fields(name = %self.request.name, images = self.request.images.len())
    )]
    fn generate(&self) -> Result<Resource> {
        self.validate()?;

        let metadata = Metadata {
            name: self.request.name.clone(),
            labels: IndexMap::from_iter([("app".into(), self.request.name.clone())]),
            ..Default::default()
        };

        let pod = Pod::new(metadata, self.build_pod_spec());
        tracing::debug!(containers = pod.containers().len(), "generated pod");
        Ok(pod.into())
    }
}
