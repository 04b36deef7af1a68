mod account_command;
mod client_args;
mod identity_command;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::{
    account_command::{account_command, AccountCommand},
    client_args::ClientArgs,
    identity_command::{identity_command, IdentityCommand},
};

/// Find out which AWS account your current credentials belong to
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    #[command(flatten)]
    client_args: ClientArgs,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the account id
    Account(AccountCommand),
    /// Print the account id, ARN and user id
    Identity(IdentityCommand),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let Cli {
        client_args,
        command,
    } = Cli::parse();
    let sts_client = client_args.load_client().await?;
    match command {
        Command::Account(command) => account_command(command, &sts_client).await?,
        Command::Identity(command) => identity_command(command, &sts_client).await?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::Cli;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "sts-account",
            "account",
            "--json",
            "--region",
            "us-west-2",
        ]);
        assert!(cli.is_ok());
    }

    #[test]
    fn subcommand_is_required() {
        assert!(Cli::try_parse_from(["sts-account", "--region", "us-west-2"]).is_err());
    }
}
