#![allow(dead_code)]

use std::collections::{BTreeMap, HashMap};

use prism_client_rs::{
  common::kubernetes::ConfigMapStore,
  prism::{ClientConstructor, ClientOption, Credentials},
  Error, USER_CA_BUNDLE_KEY, USER_CA_CONFIGMAP_NAME,
  USER_CA_CONFIGMAP_NAMESPACE,
};

pub const CERT_AU: &str = include_str!("../fixtures/ca_au.pem");
pub const CERT_DE: &str = include_str!("../fixtures/ca_de.pem");
pub const PUBLIC_KEY: &str = include_str!("../fixtures/public_key.pem");

/// Configmaps kept in memory, keyed by (namespace, name)
#[derive(Default)]
pub struct FakeConfigMapStore {
  configmaps: HashMap<(String, String), BTreeMap<String, String>>,
}

impl FakeConfigMapStore {
  pub fn empty() -> Self {
    Self::default()
  }

  pub fn with_configmap(
    mut self,
    namespace: &str,
    name: &str,
    data: BTreeMap<String, String>,
  ) -> Self {
    self
      .configmaps
      .insert((namespace.to_string(), name.to_string()), data);
    self
  }

  /// Store holding a `user-ca-bundle` configmap with `ca_bundle` as its
  /// `ca-bundle.crt`
  pub fn with_ca_bundle(ca_bundle: &str) -> Self {
    Self::default().with_configmap(
      USER_CA_CONFIGMAP_NAMESPACE,
      USER_CA_CONFIGMAP_NAME,
      BTreeMap::from([(USER_CA_BUNDLE_KEY.to_string(), ca_bundle.to_string())]),
    )
  }
}

impl ConfigMapStore for FakeConfigMapStore {
  async fn get_configmap_data(
    &self,
    namespace: &str,
    configmap_name: &str,
  ) -> Result<Option<BTreeMap<String, String>>, Error> {
    Ok(
      self
        .configmaps
        .get(&(namespace.to_string(), configmap_name.to_string()))
        .cloned(),
    )
  }
}

/// Store whose API server is not reachable
pub struct FailingConfigMapStore;

impl ConfigMapStore for FailingConfigMapStore {
  async fn get_configmap_data(
    &self,
    _namespace: &str,
    _configmap_name: &str,
  ) -> Result<Option<BTreeMap<String, String>>, Error> {
    Err(Error::K8sError("connection refused".to_string()))
  }
}

/// Store that never answers
pub struct HangingConfigMapStore;

impl ConfigMapStore for HangingConfigMapStore {
  async fn get_configmap_data(
    &self,
    _namespace: &str,
    _configmap_name: &str,
  ) -> Result<Option<BTreeMap<String, String>>, Error> {
    std::future::pending().await
  }
}

/// What a [`RecordingConstructor`] was called with
#[derive(Debug)]
pub struct RecordedClient {
  pub credentials: Credentials,
  pub options: Vec<ClientOption>,
}

impl RecordedClient {
  pub fn certificate_subjects(&self) -> Vec<String> {
    self
      .options
      .iter()
      .filter_map(|option| match option {
        ClientOption::Certificate(certificate) => {
          Some(certificate.subject().to_string())
        }
        _ => None,
      })
      .collect()
  }

  pub fn logger_count(&self) -> usize {
    self
      .options
      .iter()
      .filter(|option| matches!(option, ClientOption::Logger(_)))
      .count()
  }
}

pub struct RecordingConstructor;

impl ClientConstructor for RecordingConstructor {
  type Client = RecordedClient;

  fn new_client(
    &self,
    credentials: Credentials,
    options: Vec<ClientOption>,
  ) -> Result<RecordedClient, Error> {
    Ok(RecordedClient {
      credentials,
      options,
    })
  }
}

pub struct RejectingConstructor;

impl ClientConstructor for RejectingConstructor {
  type Client = RecordedClient;

  fn new_client(
    &self,
    _credentials: Credentials,
    _options: Vec<ClientOption>,
  ) -> Result<RecordedClient, Error> {
    Err(Error::ClientConstructionError("prism said no".to_string()))
  }
}
