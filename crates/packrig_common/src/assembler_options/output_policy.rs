use std::path::PathBuf;

use serde::Serialize;

use crate::FilenameTemplate;

/// Where emitted assets land and how they are named and referenced.
#[derive(Debug, Clone, Serialize)]
pub struct OutputPolicy {
  /// Absolute output directory.
  pub dir: PathBuf,
  pub filename: FilenameTemplate,
  /// Base path prepended when emitted assets are referenced from pages.
  pub public_path: String,
}
