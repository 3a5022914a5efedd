mod path_segment;
mod service_name;
mod service_url;

pub mod serde_helpers;

pub use path_segment::PathSegment;
pub use service_name::{DEFAULT_SERVICE_NAME, ServiceName};
pub use service_url::{
    DEFAULT_SERVICE_URL, PARAMETERIZED_SERVICE_URL, ServiceUrl, construct_service_url,
    region_service_url,
};

// Re-export validation functions for internal use
pub(crate) use path_segment::validate_path_segment;
pub(crate) use service_name::validate_service_name;
pub(crate) use service_url::validate_service_url;
