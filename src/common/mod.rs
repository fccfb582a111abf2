pub mod environment;
pub mod kubernetes;
pub mod logger;
