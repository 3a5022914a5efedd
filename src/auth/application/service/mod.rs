pub(crate) mod authenticator_factory;
pub(crate) mod iam_authenticator;
pub(crate) mod iam_token_service;
