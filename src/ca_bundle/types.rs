use std::fmt;

use x509_parser::prelude::*;

use crate::error::Error;

/// X.509 certificate used as an extra trust anchor when talking to Prism
/// Central. Only built from DER that parses as a certificate.
#[derive(Clone, PartialEq, Eq)]
pub struct Certificate {
  der: Vec<u8>,
  subject: String,
  serial: String,
}

impl Certificate {
  pub fn from_der(der: &[u8]) -> Result<Self, Error> {
    let (rest, cert) = X509Certificate::from_der(der)
      .map_err(|e| Error::CertificateParseError(e.to_string()))?;

    if !rest.is_empty() {
      return Err(Error::CertificateParseError(format!(
        "{} trailing bytes after certificate",
        rest.len()
      )));
    }

    Ok(Self {
      der: der.to_vec(),
      subject: cert.subject().to_string(),
      serial: cert.raw_serial_as_string(),
    })
  }

  pub fn der(&self) -> &[u8] {
    &self.der
  }

  pub fn subject(&self) -> &str {
    &self.subject
  }

  pub fn serial(&self) -> &str {
    &self.serial
  }
}

impl fmt::Debug for Certificate {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Certificate")
      .field("subject", &self.subject)
      .field("serial", &self.serial)
      .finish()
  }
}
