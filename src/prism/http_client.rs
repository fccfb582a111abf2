use secrecy::{ExposeSecret, SecretString};

use super::types::{ClientOption, Credentials};
use crate::{
  common::{
    environment::{Environment, ProcessEnvironment},
    logger::Logger,
  },
  error::Error,
};

const V3_API_PATH: &str = "api/nutanix/v3/";
const SOCKS5_KEY: &str = "SOCKS5";

/// Builds a Prism Central client out of credentials and a list of options.
///
/// Options are applied in the order they are given.
pub trait ClientConstructor {
  type Client;

  fn new_client(
    &self,
    credentials: Credentials,
    options: Vec<ClientOption>,
  ) -> Result<Self::Client, Error>;
}

/// Constructor for [`PrismV3Client`].
///
/// The client goes through the SOCKS5 proxy named by the `SOCKS5` variable of
/// `env`, if set.
#[derive(Debug, Default, Clone, Copy)]
pub struct V3ClientConstructor<E = ProcessEnvironment> {
  env: E,
}

impl V3ClientConstructor<ProcessEnvironment> {
  pub fn new() -> Self {
    Self {
      env: ProcessEnvironment,
    }
  }
}

impl<E: Environment> V3ClientConstructor<E> {
  pub fn with_environment(env: E) -> Self {
    Self { env }
  }
}

impl<E: Environment> ClientConstructor for V3ClientConstructor<E> {
  type Client = PrismV3Client;

  fn new_client(
    &self,
    credentials: Credentials,
    options: Vec<ClientOption>,
  ) -> Result<PrismV3Client, Error> {
    if credentials.url.is_empty() {
      return Err(Error::ClientConstructionError(
        "Prism Central URL is required".to_string(),
      ));
    }

    if credentials.username.is_empty()
      || credentials.password.expose_secret().is_empty()
    {
      return Err(Error::ClientConstructionError(
        "username and password are required".to_string(),
      ));
    }

    let mut client_builder = reqwest::Client::builder();
    let mut logger_opt = None;
    let mut trust_anchor_count = 0;

    for option in options {
      match option {
        ClientOption::Logger(logger) => logger_opt = Some(logger),
        ClientOption::Certificate(certificate) => {
          client_builder = client_builder.add_root_certificate(
            reqwest::Certificate::from_der(certificate.der())?,
          );
          trust_anchor_count += 1;
        }
      }
    }

    // Build client
    let client = if let Some(socks5_address) = self.env.lookup(SOCKS5_KEY) {
      // socks5 proxy
      if let Some(logger) = &logger_opt {
        logger.debug(format_args!("SOCKS5 enabled: {}", socks5_address));
      }
      let socks5proxy = reqwest::Proxy::all(socks5_address)?;
      client_builder.proxy(socks5proxy).build()?
    } else {
      client_builder.build()?
    };

    Ok(PrismV3Client {
      base_url: v3_base_url(&credentials.url),
      username: credentials.username,
      password: credentials.password,
      logger_opt,
      trust_anchor_count,
      client,
    })
  }
}

/// Handle to the Prism Central v3 API
pub struct PrismV3Client {
  base_url: String,
  username: String,
  password: SecretString,
  logger_opt: Option<Logger>,
  trust_anchor_count: usize,
  client: reqwest::Client,
}

impl PrismV3Client {
  pub fn base_url(&self) -> &str {
    &self.base_url
  }

  pub fn username(&self) -> &str {
    &self.username
  }

  pub fn logger(&self) -> Option<&Logger> {
    self.logger_opt.as_ref()
  }

  /// Number of CA certificates trusted on top of the system roots
  pub fn trust_anchor_count(&self) -> usize {
    self.trust_anchor_count
  }

  /// Authenticated request against a v3 API path, eg `clusters/list`
  pub fn request(
    &self,
    method: reqwest::Method,
    path: &str,
  ) -> reqwest::RequestBuilder {
    let api_url = self.base_url.clone() + path.trim_start_matches('/');

    if let Some(logger) = &self.logger_opt {
      logger.debug(format_args!("Prism v3 request {} {}", method, api_url));
    }

    self
      .client
      .request(method, api_url)
      .basic_auth(&self.username, Some(self.password.expose_secret()))
  }
}

impl std::fmt::Debug for PrismV3Client {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("PrismV3Client")
      .field("base_url", &self.base_url)
      .field("username", &self.username)
      .field("trust_anchor_count", &self.trust_anchor_count)
      .finish()
  }
}

// A bare `host:port` is reached over https
fn v3_base_url(url: &str) -> String {
  let url = url.trim_end_matches('/');

  if url.contains("://") {
    format!("{}/{}", url, V3_API_PATH)
  } else {
    format!("https://{}/{}", url, V3_API_PATH)
  }
}
