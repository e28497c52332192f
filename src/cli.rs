use clap::{ArgGroup, Args, Parser, Subcommand};

use crate::migrations::DowngradeTarget;

#[derive(Parser, Debug)]
#[command(
    name = "tron-energy-db",
    version,
    about = "Schema migrations and order maintenance for the TRON energy bot",
    after_help = "Examples:\n  \
    tron-energy-db upgrade\n  \
    tron-energy-db downgrade --steps 1\n  \
    tron-energy-db downgrade --to baseline\n  \
    tron-energy-db history --json"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Apply pending migrations
    Upgrade {
        /// Stop after this revision instead of applying everything
        #[arg(long, value_name = "REVISION")]
        to: Option<String>,
    },
    /// Revert applied migrations
    Downgrade(DowngradeArgs),
    /// Print the applied revisions
    Current,
    /// Print every known revision with its parent
    History {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Expire overdue TRX exchange orders once
    Sweep,
    /// Run the expiry service until Ctrl+C
    Serve,
}

#[derive(Args, Debug, Clone)]
#[command(
    group(
        ArgGroup::new("target")
            .args(&["steps", "to", "all"])
            .required(true)
            .multiple(false)
    )
)]
pub struct DowngradeArgs {
    /// Number of revisions to revert
    #[arg(long, value_name = "N")]
    pub steps: Option<usize>,

    /// Revert everything applied after this revision
    #[arg(long, value_name = "REVISION")]
    pub to: Option<String>,

    /// Revert every revision
    #[arg(long)]
    pub all: bool,
}

impl DowngradeArgs {
    pub fn target(&self) -> DowngradeTarget {
        match (&self.steps, &self.to) {
            (Some(steps), _) => DowngradeTarget::Steps(*steps),
            (None, Some(revision)) => DowngradeTarget::Revision(revision.clone()),
            (None, None) => DowngradeTarget::All,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn downgrade_by_steps() {
        let cli = Cli::try_parse_from(["tron-energy-db", "downgrade", "--steps", "2"]).unwrap();
        match cli.command {
            Command::Downgrade(args) => assert_eq!(args.target(), DowngradeTarget::Steps(2)),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn downgrade_to_revision() {
        let cli = Cli::try_parse_from(["tron-energy-db", "downgrade", "--to", "baseline"]).unwrap();
        match cli.command {
            Command::Downgrade(args) => assert_eq!(
                args.target(),
                DowngradeTarget::Revision("baseline".to_string())
            ),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn downgrade_requires_exactly_one_target() {
        assert!(Cli::try_parse_from(["tron-energy-db", "downgrade"]).is_err());
        assert!(
            Cli::try_parse_from(["tron-energy-db", "downgrade", "--all", "--steps", "1"]).is_err()
        );
    }

    #[test]
    fn upgrade_target_is_optional() {
        let cli = Cli::try_parse_from(["tron-energy-db", "upgrade"]).unwrap();
        assert!(matches!(cli.command, Command::Upgrade { to: None }));
    }
}
