mod pod;

pub use self::pod::{CreatePodArgs, PodOptions};

use std::io::Write;

use clap::{ArgAction, Args, Subcommand};

use crate::submit::{DryRun, OutputFormat, Printer, SubmitOptions};

#[derive(Debug, Subcommand)]
pub enum Create {
    /// Create a pod with the specified name.
    #[command(
        visible_alias = "po",
        after_help = "Examples:\n  # Create a new pod named my-pod that runs the busybox image.\n  kubegen create pod my-pod --image=busybox"
    )]
    Pod(CreatePodArgs),
}

impl Create {
    pub async fn run(self, out: &mut (dyn Write + Send)) -> anyhow::Result<()> {
        match self {
            Create::Pod(args) => {
                let mut printer = Printer::new(out, args.flags.output);
                PodOptions::complete(args)?.run(&mut printer).await
            }
        }
    }
}

/// Flags shared by the `create` subcommands.
#[derive(Debug, Clone, Args)]
pub struct CreateFlags {
    /// Only print the object that would be sent, without sending it.
    #[arg(
        long,
        value_enum,
        default_value_t,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "client"
    )]
    pub dry_run: DryRun,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t)]
    pub output: OutputFormat,

    /// Validate the object against its schema before sending it.
    #[arg(
        long,
        action = ArgAction::Set,
        default_value_t = true,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub validate: bool,

    /// Record the object's configuration in an annotation so later applies can diff against it.
    #[arg(long)]
    pub save_config: bool,
}

impl CreateFlags {
    pub fn submit_options(&self) -> SubmitOptions {
        SubmitOptions {
            dry_run: self.dry_run,
            validate: self.validate,
            save_config: self.save_config,
        }
    }
}
