use serde::Serialize;

use crate::{
  EntryItem, ExtractionUnit, OutputPolicy, PageDescriptor, PluginDirective, SourceMapMode,
  ToolchainRule,
};

/// The fully-assembled, immutable configuration handed whole to the external
/// bundling engine. Unlike [`crate::AssemblerOptions`], nothing in here is
/// optional: defaults are resolved and all inputs validated before this record
/// exists, and it is never mutated afterwards.
#[derive(Debug, Serialize)]
pub struct ConfigurationRecord {
  pub source_map: SourceMapMode,
  pub resolve_extensions: Vec<String>,
  pub entries: Vec<EntryItem>,
  pub output: OutputPolicy,
  pub rules: Vec<ToolchainRule>,
  pub extraction_units: Vec<ExtractionUnit>,
  /// Caller-supplied directives first, then one `HtmlPage` per derived page
  /// descriptor in entry order.
  pub plugins: Vec<PluginDirective>,
  pub pages: Vec<PageDescriptor>,
}
