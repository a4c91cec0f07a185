use std::ops::{Deref, DerefMut};

/// The single error kind of configuration assembly. A misconfigured build
/// must halt before the external bundler is ever invoked, so these are never
/// recovered from or defaulted away.
#[derive(Debug)]
pub struct ConfigurationError(pub Vec<anyhow::Error>);

impl Deref for ConfigurationError {
  type Target = Vec<anyhow::Error>;

  fn deref(&self) -> &Self::Target {
    &self.0
  }
}

impl DerefMut for ConfigurationError {
  fn deref_mut(&mut self) -> &mut Self::Target {
    &mut self.0
  }
}

impl From<anyhow::Error> for ConfigurationError {
  fn from(error: anyhow::Error) -> Self {
    Self(vec![error])
  }
}

impl From<Vec<anyhow::Error>> for ConfigurationError {
  fn from(errors: Vec<anyhow::Error>) -> Self {
    Self(errors)
  }
}

pub type ConfigResult<T> = anyhow::Result<T, ConfigurationError>;
