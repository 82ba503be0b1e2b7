mod create;

pub use self::create::{Create, CreateFlags, CreatePodArgs, PodOptions};

use std::io::Write;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "kubegen", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create a resource from command line arguments.
    #[command(subcommand)]
    Create(Create),
}

impl Cli {
    pub async fn run(self, out: &mut (dyn Write + Send)) -> anyhow::Result<()> {
        match self.command {
            Command::Create(create) => create.run(out).await,
        }
    }
}
