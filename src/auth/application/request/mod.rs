pub(crate) mod iam_token_request;
