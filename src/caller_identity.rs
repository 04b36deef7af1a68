use std::future::Future;

use aws_sdk_sts::config::http::HttpResponse;
use aws_sdk_sts::error::SdkError;
use aws_sdk_sts::operation::get_caller_identity::{
    GetCallerIdentityError, GetCallerIdentityOutput,
};

/// What the identity service says about the credentials in use.
/// Fields are copied as-is from the response, so any of them can be missing or empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallerIdentityOutput {
    pub account: Option<String>,
    pub arn: Option<String>,
    pub user_id: Option<String>,
}

impl From<GetCallerIdentityOutput> for CallerIdentityOutput {
    fn from(output: GetCallerIdentityOutput) -> Self {
        Self {
            account: output.account,
            arn: output.arn,
            user_id: output.user_id,
        }
    }
}

/// Anything that can ask "who am I?" with the credentials it was built with.
pub trait CallerIdentity {
    type Error;

    fn get_caller_identity(
        &self,
    ) -> impl Future<Output = Result<CallerIdentityOutput, Self::Error>> + Send;
}

impl CallerIdentity for aws_sdk_sts::Client {
    type Error = SdkError<GetCallerIdentityError, HttpResponse>;

    async fn get_caller_identity(&self) -> Result<CallerIdentityOutput, Self::Error> {
        Ok(self.get_caller_identity().send().await?.into())
    }
}
