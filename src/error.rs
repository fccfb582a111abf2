#[derive(thiserror::Error, Debug)]
pub enum Error {
  #[error("PRISM-CLIENT > Logger: {0}")]
  LoggerInitError(String),
  #[error("PRISM-CLIENT > Prism v3 client: {0}")]
  ClientConstructionError(String),
  #[error("PRISM-CLIENT > Net: {0}")]
  NetError(#[from] reqwest::Error),
  #[error("PRISM-CLIENT > K8s: {0}")]
  K8sError(String),
  #[error("PRISM-CLIENT > K8s: {0}")]
  K8sExecError(#[from] kube::Error),
  #[error("PRISM-CLIENT > Certificate: {0}")]
  CertificateParseError(String),
  #[error("PRISM-CLIENT > Operation cancelled")]
  Cancelled,
}
