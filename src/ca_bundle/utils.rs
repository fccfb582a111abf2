use super::types::Certificate;
use crate::common::logger::Logger;

const PEM_BEGIN: &[u8] = b"-----BEGIN";

/// Walk a PEM stream and collect its certificates, in stream order.
///
/// Blocks of any other type (public keys, private keys, CRLs...) are skipped.
/// A block that cannot be decoded is skipped as well and scanning resumes
/// after its BEGIN line. A `CERTIFICATE` block whose body is not a valid X.509
/// certificate stops the scan: the certificates found before it are returned,
/// the blocks after it are not read.
pub fn parse_certificates(
  pem_bundle: &[u8],
  logger: &Logger,
) -> Vec<Certificate> {
  let mut reader = pem_bundle;
  let mut certificate_vec = Vec::new();

  loop {
    let remaining = reader;

    let item = match rustls_pemfile::read_one(&mut reader) {
      Ok(Some(item)) => item,
      Ok(None) => break,
      Err(e) => {
        logger.debug(format_args!(
          "skipping CA bundle PEM block that could not be decoded: {}",
          e
        ));

        match skip_rejected_block(remaining) {
          Some(rest) => {
            reader = rest;
            continue;
          }
          None => break,
        }
      }
    };

    if let rustls_pemfile::Item::X509Certificate(der) = item {
      let certificate = match Certificate::from_der(&der) {
        Ok(certificate) => certificate,
        Err(e) => {
          logger.error(format_args!("failed to parse certificate: {}", e));
          break;
        }
      };

      logger.debug(format_args!(
        "CA bundle certificate found: subject '{}' serial '{}'",
        certificate.subject(),
        certificate.serial()
      ));

      certificate_vec.push(certificate);
    }
  }

  certificate_vec
}

/// Input left after the first BEGIN line of `input`, `None` if there is no
/// BEGIN line at all.
fn skip_rejected_block(input: &[u8]) -> Option<&[u8]> {
  let begin = input
    .windows(PEM_BEGIN.len())
    .position(|window| window == PEM_BEGIN)?;

  let from_begin = &input[begin..];

  let rest: &[u8] = match from_begin.iter().position(|byte| *byte == b'\n') {
    Some(end_of_line) => &from_begin[end_of_line + 1..],
    None => &[],
  };

  Some(rest)
}
