//! The boundary between generation and whatever consumes generated objects.

use std::io::Write;

use crate::{manifest::Str, resource::Resource};

/// Annotation recording the configuration an object was created with, for later applies.
pub const LAST_APPLIED_CONFIG_ANNOTATION: &str = "kubectl.kubernetes.io/last-applied-configuration";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum DryRun {
    #[default]
    None,
    Client,
    Server,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
    Name,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitOptions {
    pub dry_run: DryRun,
    pub validate: bool,
    pub save_config: bool,
}

impl Default for SubmitOptions {
    fn default() -> Self {
        Self {
            dry_run: DryRun::None,
            validate: true,
            save_config: false,
        }
    }
}

#[async_trait::async_trait]
pub trait Submit {
    async fn submit(&mut self, resource: Resource, options: &SubmitOptions) -> anyhow::Result<()>;
}

/// Writes submitted objects to `out` instead of sending them to a cluster.
pub struct Printer<W> {
    out: W,
    format: OutputFormat,
}

impl<W: Write + Send> Printer<W> {
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self { out, format }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn print(&mut self, resource: &Resource, options: &SubmitOptions) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Yaml => serde_yaml::to_writer(&mut self.out, resource)?,
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut self.out, resource)?;
                writeln!(self.out)?;
            }
            OutputFormat::Name => {
                let operation = match options.dry_run {
                    DryRun::None => "created",
                    DryRun::Client => "created (dry run)",
                    DryRun::Server => "created (server dry run)",
                };
                writeln!(self.out, "{} {operation}", resource.id())?;
            }
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl<W: Write + Send> Submit for Printer<W> {
    #[tracing::instrument(
        skip_all,
        fields(id = %resource.id(), dry_run = ?options.dry_run, validate = options.validate)
    )]
    async fn submit(&mut self, mut resource: Resource, options: &SubmitOptions) -> anyhow::Result<()> {
        if options.save_config {
            let config = Str::from(serde_json::to_string(&resource)?);
            resource
                .metadata_mut()
                .annotations
                .insert(LAST_APPLIED_CONFIG_ANNOTATION.into(), config);
        }

        self.print(&resource, options)?;
        self.out.flush()?;
        tracing::debug!(format = ?self.format, "printed resource");
        Ok(())
    }
}
