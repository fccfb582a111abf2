use secrecy::SecretString;

use crate::{
  ca_bundle::Certificate,
  common::{environment::Environment, logger::Logger},
  NUTANIX_ENDPOINT_KEY, NUTANIX_PASSWORD_KEY, NUTANIX_PORT_KEY,
  NUTANIX_USER_KEY,
};

/// Prism Central credentials.
///
/// `url` is the address the client connects to. When empty it is derived from
/// `endpoint` and `port`, see [`Credentials::normalize`].
#[derive(Debug)]
pub struct Credentials {
  pub url: String,
  pub endpoint: String,
  pub port: String,
  pub username: String,
  pub password: SecretString,
}

impl Credentials {
  pub fn new(
    username: &str,
    password: &str,
    endpoint: &str,
    port: &str,
  ) -> Self {
    Self {
      url: String::new(),
      endpoint: endpoint.to_string(),
      port: port.to_string(),
      username: username.to_string(),
      password: SecretString::from(password.to_string()),
    }
  }

  pub fn with_url(mut self, url: &str) -> Self {
    self.url = url.to_string();
    self
  }

  /// Read credentials from the `NUTANIX_PRISM_CENTRAL_*` variables. Variables
  /// not set are left as empty strings, rejecting them is up to the client.
  pub fn from_environment<E: Environment>(env: &E) -> Self {
    Self::new(
      &env.get_or_empty(NUTANIX_USER_KEY),
      &env.get_or_empty(NUTANIX_PASSWORD_KEY),
      &env.get_or_empty(NUTANIX_ENDPOINT_KEY),
      &env.get_or_empty(NUTANIX_PORT_KEY),
    )
  }

  /// Set `url` to `<endpoint>:<port>` if it is empty. No scheme is added.
  pub fn normalize(&mut self) {
    if self.url.is_empty() {
      self.url = format!("{}:{}", self.endpoint, self.port);
    }
  }
}

/// Options understood by a Prism client constructor
#[derive(Debug, Clone)]
pub enum ClientOption {
  Logger(Logger),
  /// Extra trust anchor for the Prism Central TLS certificate
  Certificate(Certificate),
}
