pub mod caller_identity;
pub mod get_account_id;
pub mod sts_client;
