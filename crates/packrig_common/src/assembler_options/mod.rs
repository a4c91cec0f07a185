pub mod configuration_record;
pub mod entry_item;
pub mod extraction_unit;
pub mod filename_template;
pub mod output_policy;
pub mod plugin_directive;
pub mod source_map_mode;
pub mod toolchain_rule;

use std::path::PathBuf;

use arcstr::ArcStr;
use packrig_utils::indexmap::FxIndexMap;

use crate::{EntryItem, ExtractionUnit, PluginDirective, SourceMapMode, ToolchainRule};

/// Raw assembler inputs. Every field is optional; assembly fills in defaults
/// and validates before anything is handed to the external engine.
#[derive(Default, Debug, Clone)]
pub struct AssemblerOptions {
  // --- Input
  pub entries: Option<Vec<EntryItem>>,
  pub cwd: Option<PathBuf>,
  pub resolve_extensions: Option<Vec<String>>,

  // --- Output
  pub dir: Option<String>,
  pub filename: Option<String>,
  pub public_path: Option<String>,
  pub source_map: Option<SourceMapMode>,

  // --- Transforms
  pub rules: Option<Vec<ToolchainRule>>,
  pub extraction_units: Option<Vec<ExtractionUnit>>,
  pub plugins: Option<Vec<PluginDirective>>,

  // --- Page generation
  pub template: Option<PathBuf>,
  pub page_titles: Option<FxIndexMap<ArcStr, ArcStr>>,
}
