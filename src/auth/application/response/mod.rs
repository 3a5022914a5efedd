pub(crate) mod iam_token_response;
