use std::{collections::BTreeMap, future::Future};

use k8s_openapi::api::core::v1::ConfigMap;

use crate::error::Error;

/// Capability to read the data of a configmap.
///
/// Returns `Ok(None)` when the configmap does not exist. A configmap without
/// a `data` section is returned as an empty map.
pub trait ConfigMapStore {
  fn get_configmap_data(
    &self,
    namespace: &str,
    configmap_name: &str,
  ) -> impl Future<Output = Result<Option<BTreeMap<String, String>>, Error>> + Send;
}

impl ConfigMapStore for kube::Client {
  async fn get_configmap_data(
    &self,
    namespace: &str,
    configmap_name: &str,
  ) -> Result<Option<BTreeMap<String, String>>, Error> {
    let configmap_api: kube::Api<ConfigMap> =
      kube::Api::namespaced(self.clone(), namespace);

    let configmap_opt = configmap_api
      .get_opt(configmap_name)
      .await
      .map_err(Error::K8sExecError)?;

    Ok(configmap_opt.map(|configmap| configmap.data.unwrap_or_default()))
  }
}
