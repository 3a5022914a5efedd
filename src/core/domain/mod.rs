pub mod error;
pub mod model;
pub mod options;
pub mod value_object;
