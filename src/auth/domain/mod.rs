pub(crate) mod authenticator;
pub(crate) mod iam_token;
