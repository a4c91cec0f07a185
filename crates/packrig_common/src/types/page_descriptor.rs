use std::fmt::Display;
use std::path::PathBuf;

use arcstr::ArcStr;
use serde::Serialize;

/// The reserved shared-chunk name. Third-party modules are split into this
/// chunk, every generated page references it, and no page is ever derived
/// for it.
pub static VENDORS_CHUNK_NAME: &str = "vendors";

/// One generated HTML page, derived from an entry and the title lookup.
/// A pure function of those two inputs; no other state influences it.
#[derive(Debug, Clone, Serialize)]
pub struct PageDescriptor {
  pub entry: ArcStr,
  pub title: ArcStr,
  pub template: PathBuf,
  /// `"{entry}.html"`, relative to the output directory.
  pub filename: String,
  /// Exactly `[entry, "vendors"]`, in that order.
  pub chunks: Vec<ArcStr>,
  pub inject: InjectPosition,
}

/// Where generated script references are injected into the page template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum InjectPosition {
  Head,
  Body,
}

impl Display for InjectPosition {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Head => write!(f, "head"),
      Self::Body => write!(f, "body"),
    }
  }
}
