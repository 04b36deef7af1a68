use anyhow::Context;
use clap::Parser;
use serde_json::json;
use sts_account::{caller_identity::CallerIdentity, get_account_id::get_account_id};

#[derive(Debug, Parser)]
pub struct AccountCommand {
    /// Print `{"account_id": "..."}` instead of just the id
    #[arg(long)]
    json: bool,
}

pub async fn account_command<C>(
    AccountCommand { json }: AccountCommand,
    client: &C,
) -> anyhow::Result<()>
where
    C: CallerIdentity,
    C::Error: std::error::Error + Send + Sync + 'static,
{
    let account_id = get_account_id(client)
        .await
        .context("Failed to get AWS account id")?;
    println!("{}", format_account_id(&account_id, json)?);
    Ok(())
}

fn format_account_id(account_id: &str, json: bool) -> anyhow::Result<String> {
    Ok(if json {
        serde_json::to_string_pretty(&json!({ "account_id": account_id }))?
    } else {
        account_id.to_owned()
    })
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::format_account_id;

    #[test]
    fn plain_output_is_just_the_id() {
        assert_eq!(
            format_account_id("123456789012", false).unwrap(),
            "123456789012"
        );
    }

    #[test]
    fn json_output() {
        let output = format_account_id("123456789012", true).unwrap();
        let value = serde_json::from_str::<Value>(&output).unwrap();
        assert_eq!(value["account_id"], "123456789012");
    }
}
