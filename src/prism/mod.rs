pub mod http_client;
pub mod types;

pub use http_client::{ClientConstructor, PrismV3Client, V3ClientConstructor};
pub use types::{ClientOption, Credentials};
