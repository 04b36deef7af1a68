use anyhow::Context;
use clap::Parser;
use serde::Serialize;
use sts_account::{
    caller_identity::CallerIdentity,
    get_account_id::{get_caller_identity_details, CallerIdentityDetails},
};
use tabled::{Table, Tabled};

#[derive(Debug, Parser)]
pub struct IdentityCommand {
    /// Print JSON instead of a table
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize, Tabled)]
struct IdentityRow<'a> {
    #[tabled(rename = "Account")]
    account_id: &'a str,
    #[tabled(rename = "ARN", display_with = "display_optional")]
    arn: Option<&'a str>,
    #[tabled(rename = "User ID", display_with = "display_optional")]
    user_id: Option<&'a str>,
}

fn display_optional(value: &Option<&str>) -> String {
    value.unwrap_or("-").to_owned()
}

impl<'a> From<&'a CallerIdentityDetails> for IdentityRow<'a> {
    fn from(details: &'a CallerIdentityDetails) -> Self {
        Self {
            account_id: &details.account_id,
            arn: details.arn.as_deref(),
            user_id: details.user_id.as_deref(),
        }
    }
}

pub async fn identity_command<C>(
    IdentityCommand { json }: IdentityCommand,
    client: &C,
) -> anyhow::Result<()>
where
    C: CallerIdentity,
    C::Error: std::error::Error + Send + Sync + 'static,
{
    let details = get_caller_identity_details(client)
        .await
        .context("Failed to get caller identity")?;
    println!("{}", format_identity(&details, json)?);
    Ok(())
}

fn format_identity(details: &CallerIdentityDetails, json: bool) -> anyhow::Result<String> {
    let row = IdentityRow::from(details);
    Ok(if json {
        serde_json::to_string_pretty(&row)?
    } else {
        Table::new([row]).to_string()
    })
}
