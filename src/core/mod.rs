pub mod domain;
pub(crate) mod infrastructure;
