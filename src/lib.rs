pub mod ca_bundle;
pub mod client;
pub mod common;
pub mod error;
pub mod prism;

pub use client::{client, client_with, ClientOptions};
pub use error::Error;

pub const PROVIDER_NAME: &str = "nutanix";

/// Default name for the OpenShift infrastructure object
pub const GLOBAL_INFRASTRUCTURE_NAME: &str = "cluster";

// Managed kube cloud config, where OpenShift publishes the merged cloud CA bundle
pub const KUBE_CLOUD_CONFIG_NAMESPACE: &str = "openshift-config-managed";
pub const KUBE_CLOUD_CONFIG_NAME: &str = "kube-cloud-config";
pub const CLOUD_CA_BUNDLE_KEY: &str = "ca-bundle.pem";

// User provided CA bundle, this is the one the client factory reads
pub const USER_CA_CONFIGMAP_NAMESPACE: &str = "openshift-config";
pub const USER_CA_CONFIGMAP_NAME: &str = "user-ca-bundle";
pub const USER_CA_BUNDLE_KEY: &str = "ca-bundle.crt";

// Prism Central credential env vars
pub const NUTANIX_ENDPOINT_KEY: &str = "NUTANIX_PRISM_CENTRAL_ENDPOINT";
pub const NUTANIX_PORT_KEY: &str = "NUTANIX_PRISM_CENTRAL_PORT";
pub const NUTANIX_USER_KEY: &str = "NUTANIX_PRISM_CENTRAL_USER";
pub const NUTANIX_PASSWORD_KEY: &str = "NUTANIX_PRISM_CENTRAL_PASSWORD";
