use std::path::{Path, PathBuf};

use arcstr::ArcStr;
use packrig_common::{
  AssemblerOptions, EntryItem, ExtractionUnit, FilenameTemplate, OutputPolicy, PluginDirective,
  SourceMapMode, ToolchainRule,
};
use packrig_error::ConfigResult;
use packrig_utils::indexmap::{FxIndexMap, FxIndexSet};
use sugar_path::SugarPath;

#[derive(Debug)]
pub struct NormalizeOptionsReturn {
  pub entries: Vec<EntryItem>,
  pub source_map: SourceMapMode,
  pub resolve_extensions: Vec<String>,
  pub output: OutputPolicy,
  pub rules: Vec<ToolchainRule>,
  pub extraction_units: Vec<ExtractionUnit>,
  pub plugins: Vec<PluginDirective>,
  pub template: PathBuf,
  pub page_titles: FxIndexMap<ArcStr, ArcStr>,
}

pub fn normalize_options(raw_options: AssemblerOptions) -> ConfigResult<NormalizeOptionsReturn> {
  let entries = raw_options.entries.unwrap_or_default();
  if entries.is_empty() {
    return Err(anyhow::anyhow!("At least one entry is required.").into());
  }
  let mut seen = FxIndexSet::default();
  if let Some(duplicate) = entries.iter().find(|entry| !seen.insert(entry.name.as_str())) {
    return Err(
      anyhow::anyhow!("Entry name \"{}\" is declared more than once.", duplicate.name).into(),
    );
  }
  if let Some(empty) = entries.iter().find(|entry| entry.imports.is_empty()) {
    return Err(anyhow::anyhow!("Entry \"{}\" has no source modules.", empty.name).into());
  }

  let cwd = raw_options
    .cwd
    .unwrap_or_else(|| std::env::current_dir().expect("Failed to get current dir"));

  let output = OutputPolicy {
    dir: Path::new(&raw_options.dir.unwrap_or_else(|| "dist".to_string())).absolutize_with(&cwd),
    filename: FilenameTemplate::new(
      raw_options.filename.unwrap_or_else(|| "[name].[hash].bundle.js".to_string()),
    ),
    public_path: raw_options.public_path.unwrap_or_else(|| "./".to_string()),
  };

  let template = raw_options
    .template
    .unwrap_or_else(|| PathBuf::from("templates/layout.html"))
    .absolutize_with(&cwd);

  Ok(NormalizeOptionsReturn {
    entries,
    source_map: raw_options.source_map.unwrap_or(SourceMapMode::File),
    resolve_extensions: raw_options.resolve_extensions.unwrap_or_else(|| {
      vec![".js".to_string(), ".jsx".to_string(), ".css".to_string(), ".scss".to_string()]
    }),
    output,
    rules: raw_options.rules.unwrap_or_default(),
    extraction_units: raw_options.extraction_units.unwrap_or_default(),
    plugins: raw_options.plugins.unwrap_or_default(),
    template,
    page_titles: raw_options.page_titles.unwrap_or_default(),
  })
}

#[cfg(test)]
fn base_options() -> AssemblerOptions {
  AssemblerOptions {
    entries: Some(vec![EntryItem::from(("index", "./examples/index.js"))]),
    cwd: Some(PathBuf::from("/workspace")),
    ..AssemblerOptions::default()
  }
}

#[test]
fn test_defaults() {
  let normalized = normalize_options(base_options()).unwrap();
  assert_eq!(normalized.output.dir, PathBuf::from("/workspace/dist"));
  assert_eq!(normalized.output.filename.template(), "[name].[hash].bundle.js");
  assert_eq!(normalized.output.public_path, "./");
  assert_eq!(normalized.source_map, SourceMapMode::File);
  assert_eq!(normalized.resolve_extensions, [".js", ".jsx", ".css", ".scss"]);
  assert_eq!(normalized.template, PathBuf::from("/workspace/templates/layout.html"));
}

#[test]
fn test_empty_entries_is_an_error() {
  let err = normalize_options(AssemblerOptions::default()).unwrap_err();
  assert!(err[0].to_string().contains("At least one entry"));
}

#[test]
fn test_duplicate_entry_name_is_an_error() {
  let mut options = base_options();
  options.entries = Some(vec![
    EntryItem::from(("index", "./examples/index.js")),
    EntryItem::from(("index", "./examples/other.js")),
  ]);
  let err = normalize_options(options).unwrap_err();
  assert!(err[0].to_string().contains("\"index\""));
}

#[test]
fn test_entry_without_sources_is_an_error() {
  let mut options = base_options();
  options.entries = Some(vec![EntryItem::new("simple", Vec::<String>::new())]);
  let err = normalize_options(options).unwrap_err();
  assert!(err[0].to_string().contains("no source modules"));
}
