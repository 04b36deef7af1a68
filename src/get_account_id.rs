use thiserror::Error;

use crate::caller_identity::CallerIdentity;

#[derive(Debug, Error)]
pub enum GetAccountIdError<E> {
    /// The request to the identity service failed. The error is passed through untouched.
    #[error(transparent)]
    Transport(E),
    #[error("unable to determine account ID")]
    MissingAccountId,
}

/// A missing field and an empty one mean the same thing here.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.is_empty())
}

pub async fn get_account_id<C: CallerIdentity>(
    client: &C,
) -> Result<String, GetAccountIdError<C::Error>> {
    let output = client
        .get_caller_identity()
        .await
        .map_err(GetAccountIdError::Transport)?;
    non_empty(output.account).ok_or(GetAccountIdError::MissingAccountId)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallerIdentityDetails {
    pub account_id: String,
    pub arn: Option<String>,
    pub user_id: Option<String>,
}

/// Like [`get_account_id`], but also keeps the ARN and user id for display.
pub async fn get_caller_identity_details<C: CallerIdentity>(
    client: &C,
) -> Result<CallerIdentityDetails, GetAccountIdError<C::Error>> {
    let output = client
        .get_caller_identity()
        .await
        .map_err(GetAccountIdError::Transport)?;
    Ok(CallerIdentityDetails {
        account_id: non_empty(output.account).ok_or(GetAccountIdError::MissingAccountId)?,
        arn: non_empty(output.arn),
        user_id: non_empty(output.user_id),
    })
}
