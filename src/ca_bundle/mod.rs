pub mod types;
pub mod utils;

use tokio_util::sync::CancellationToken;

use crate::{
  common::{kubernetes::ConfigMapStore, logger::Logger},
  error::Error,
  USER_CA_BUNDLE_KEY, USER_CA_CONFIGMAP_NAME, USER_CA_CONFIGMAP_NAMESPACE,
};

pub use types::Certificate;

/// Get the CA certificates from the `user-ca-bundle` configmap.
///
/// Returns `None` when there is nothing to trust on top of the defaults: no
/// store, configmap or key, a fetch error or cancellation, or a bundle
/// without usable certificates. A corrupted `CERTIFICATE` block ends the
/// bundle, only the certificates before it are returned. None of these are
/// errors for the caller, they are only logged.
pub async fn get_ca_certificates<S: ConfigMapStore>(
  config_store_opt: Option<&S>,
  cancellation_token_opt: Option<&CancellationToken>,
  logger: &Logger,
) -> Option<Vec<Certificate>> {
  let Some(config_store) = config_store_opt else {
    logger.info(format_args!(
      "no cluster config store available, skipping user-ca-bundle"
    ));
    return None;
  };

  logger.debug(format_args!(
    "Fetching configmap '{}' in namespace '{}'",
    USER_CA_CONFIGMAP_NAME, USER_CA_CONFIGMAP_NAMESPACE
  ));

  let fetch = config_store
    .get_configmap_data(USER_CA_CONFIGMAP_NAMESPACE, USER_CA_CONFIGMAP_NAME);

  let configmap_rslt = match cancellation_token_opt {
    Some(cancellation_token) => tokio::select! {
      _ = cancellation_token.cancelled() => Err(Error::Cancelled),
      rslt = fetch => rslt,
    },
    None => fetch.await,
  };

  let configmap_data = match configmap_rslt {
    Ok(Some(configmap_data)) => configmap_data,
    Ok(None) => {
      logger.info(format_args!(
        "failed to get user-ca-bundle configmap: configmap '{}' not found in namespace '{}'",
        USER_CA_CONFIGMAP_NAME, USER_CA_CONFIGMAP_NAMESPACE
      ));
      return None;
    }
    Err(error) => {
      logger.info(format_args!(
        "failed to get user-ca-bundle configmap: {}",
        error
      ));
      return None;
    }
  };

  let Some(ca_bundle) = configmap_data.get(USER_CA_BUNDLE_KEY) else {
    logger.info(format_args!(
      "failed to get cloud CA bundle from configmap: key '{}' missing",
      USER_CA_BUNDLE_KEY
    ));
    return None;
  };

  let certificate_vec = utils::parse_certificates(ca_bundle.as_bytes(), logger);

  if certificate_vec.is_empty() {
    logger.info(format_args!(
      "failed to parse any certificates from user-ca-bundle"
    ));
    return None;
  }

  Some(certificate_vec)
}
