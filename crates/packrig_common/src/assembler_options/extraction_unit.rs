use arcstr::ArcStr;
use serde::Serialize;

use crate::FilenameTemplate;

/// A named aggregator that collects style output from every module routed to
/// it into standalone files instead of inlining it into script chunks.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractionUnit {
  pub name: ArcStr,
  pub filename: FilenameTemplate,
  /// When disabled, routed styles fall back to the rule's fallback tool.
  pub disabled: bool,
  /// Collect from every chunk, not only the entry chunks.
  pub all_chunks: bool,
}

impl ExtractionUnit {
  pub fn new(name: impl Into<ArcStr>, filename: impl Into<FilenameTemplate>) -> Self {
    Self { name: name.into(), filename: filename.into(), disabled: false, all_chunks: true }
  }
}
