use std::collections::HashMap;

/// Read-only access to environment variables.
///
/// The client factory only reads credentials through this trait so callers
/// (and tests) can hand it something other than the process environment.
pub trait Environment {
  fn lookup(&self, key: &str) -> Option<String>;

  /// Value of `key`, or an empty string when the variable is not set
  fn get_or_empty(&self, key: &str) -> String {
    self.lookup(key).unwrap_or_default()
  }
}

/// The environment of the running process
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnvironment;

impl Environment for ProcessEnvironment {
  fn lookup(&self, key: &str) -> Option<String> {
    std::env::var(key).ok()
  }
}

impl Environment for HashMap<String, String> {
  fn lookup(&self, key: &str) -> Option<String> {
    self.get(key).cloned()
  }
}

impl<E: Environment + ?Sized> Environment for &E {
  fn lookup(&self, key: &str) -> Option<String> {
    (**self).lookup(key)
  }
}
