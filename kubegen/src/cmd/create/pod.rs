use clap::Args;

use crate::{
    generator::{GenerationRequest, GeneratorRegistry, StructuredGenerator},
    manifest::Str,
    submit::{Submit, SubmitOptions},
};

use super::CreateFlags;

#[derive(Debug, Clone, Args)]
pub struct CreatePodArgs {
    /// Name of the pod.
    pub name: String,

    /// Image to run, may be repeated or comma separated.
    #[arg(long = "image", value_name = "IMAGE[,IMAGE...]")]
    pub images: Vec<String>,

    /// Name of the generator to use.
    #[arg(long, default_value = GeneratorRegistry::POD_V1)]
    pub generator: String,

    #[command(flatten)]
    pub flags: CreateFlags,
}

impl CreatePodArgs {
    /// Image references in command line order.
    ///
    /// An empty `--image=` contributes nothing, while empty entries inside a comma separated
    /// list are kept, so `--image=a,,b` yields three references.
    pub fn image_refs(&self) -> impl Iterator<Item = &str> {
        self.images
            .iter()
            .filter(|value| !value.is_empty())
            .flat_map(|value| value.split(','))
    }
}

/// A completed `create pod` invocation, ready to generate and submit.
pub struct PodOptions {
    generator: Box<dyn StructuredGenerator>,
    options: SubmitOptions,
}

impl PodOptions {
    #[tracing::instrument(skip_all, fields(name = %args.name, generator = %args.generator))]
    pub fn complete(args: CreatePodArgs) -> anyhow::Result<Self> {
        let factory = GeneratorRegistry::pods().resolve(&args.generator)?;

        let images = args.image_refs().map(Str::from).collect::<Vec<_>>();
        let request = GenerationRequest::new(args.name, images);
        tracing::debug!(images = ?request.images, "completed pod request");

        Ok(Self {
            generator: factory(request),
            options: args.flags.submit_options(),
        })
    }

    pub async fn run(self, submitter: &mut (dyn Submit + Send)) -> anyhow::Result<()> {
        let resource = self.generator.generate()?;
        submitter.submit(resource, &self.options).await
    }
}
