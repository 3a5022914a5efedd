pub(crate) mod api_client;
pub mod config;
pub(crate) mod request_builder;
pub(crate) mod response_decoder;
pub mod retry;
