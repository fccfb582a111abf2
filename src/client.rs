use tokio_util::sync::CancellationToken;

use crate::{
  ca_bundle::get_ca_certificates,
  common::{
    environment::{Environment, ProcessEnvironment},
    kubernetes::ConfigMapStore,
    logger::Logger,
  },
  error::Error,
  prism::{
    ClientConstructor, ClientOption, Credentials, PrismV3Client,
    V3ClientConstructor,
  },
};

/// Inputs of the client factory.
///
/// The config store is borrowed for the duration of the factory call only.
pub struct ClientOptions<'a, S = kube::Client> {
  /// When `None`, credentials are read from the `NUTANIX_PRISM_CENTRAL_*`
  /// environment variables
  pub credentials: Option<Credentials>,
  pub debug: bool,
  pub config_store: Option<&'a S>,
  /// Aborts the `user-ca-bundle` fetch, the client is then built without
  /// custom CA certificates
  pub cancellation_token: Option<CancellationToken>,
}

impl ClientOptions<'_, kube::Client> {
  pub fn new() -> Self {
    Self {
      credentials: None,
      debug: false,
      config_store: None,
      cancellation_token: None,
    }
  }
}

impl Default for ClientOptions<'_, kube::Client> {
  fn default() -> Self {
    Self::new()
  }
}

impl<'a, S> ClientOptions<'a, S> {
  pub fn with_credentials(mut self, credentials: Credentials) -> Self {
    self.credentials = Some(credentials);
    self
  }

  pub fn with_debug(mut self, debug: bool) -> Self {
    self.debug = debug;
    self
  }

  pub fn with_config_store<T: ConfigMapStore>(
    self,
    config_store: &'a T,
  ) -> ClientOptions<'a, T> {
    ClientOptions {
      credentials: self.credentials,
      debug: self.debug,
      config_store: Some(config_store),
      cancellation_token: self.cancellation_token,
    }
  }

  pub fn with_cancellation_token(
    mut self,
    cancellation_token: CancellationToken,
  ) -> Self {
    self.cancellation_token = Some(cancellation_token);
    self
  }
}

/// Create a Prism Central v3 client, reading missing credentials from the
/// process environment.
pub async fn client<S: ConfigMapStore>(
  options: ClientOptions<'_, S>,
) -> Result<PrismV3Client, Error> {
  client_with(options, &ProcessEnvironment, &V3ClientConstructor::new()).await
}

/// Same as [`client`] with the environment and the client constructor
/// provided by the caller.
///
/// Only a logger that cannot be built or an error from `constructor` make
/// this fail, the latter is returned as is. Problems with the
/// `user-ca-bundle` configmap only mean no custom CA certificates are used.
pub async fn client_with<S, E, C>(
  options: ClientOptions<'_, S>,
  env: &E,
  constructor: &C,
) -> Result<C::Client, Error>
where
  S: ConfigMapStore,
  E: Environment,
  C: ClientConstructor,
{
  let ClientOptions {
    credentials,
    debug,
    config_store,
    cancellation_token,
  } = options;

  let mut credentials =
    credentials.unwrap_or_else(|| Credentials::from_environment(env));

  credentials.normalize();

  let logger = Logger::new(debug)?;

  let mut client_option_vec = vec![ClientOption::Logger(logger.clone())];

  if let Some(certificate_vec) =
    get_ca_certificates(config_store, cancellation_token.as_ref(), &logger)
      .await
  {
    logger.debug(format_args!("Using custom CA certificate"));
    client_option_vec
      .extend(certificate_vec.into_iter().map(ClientOption::Certificate));
  }

  logger.debug(format_args!(
    "Creating new v3 client, endpoint: {}",
    credentials.url
  ));

  constructor
    .new_client(credentials, client_option_vec)
    .map_err(|error| {
      logger.error(format_args!(
        "failed to create the nutanix v3 client: {}",
        error
      ));
      error
    })
}
