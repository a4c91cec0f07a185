use arcstr::ArcStr;
use packrig_utils::indexmap::FxIndexMap;
use serde::Serialize;

use crate::{ExtractionUnit, PageDescriptor};

/// One opaque build-time transform directive. The assembler never interprets
/// these; they are carried verbatim, in order, to the external engine.
#[derive(Debug, Clone, Serialize)]
pub enum PluginDirective {
  /// Merge chunks with near-identical content.
  AggressiveMerging,
  /// Abort emission when any transform reports an error.
  FailOnEmitError,
  StyleExtraction(ExtractionUnit),
  /// Compile-time environment substitution, name to literal value.
  DefineEnv(FxIndexMap<ArcStr, String>),
  Minify(MinifyDirective),
  LoaderOptions(LoaderOptionsDirective),
  /// One generated HTML page; appended by the assembler, one per
  /// non-reserved entry.
  HtmlPage(PageDescriptor),
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct MinifyDirective {
  pub source_map: bool,
  pub compress_warnings: bool,
  /// Identifiers exempt from mangling.
  pub mangle_except: Vec<String>,
}

/// Shared option payload for the external loader chain, including the named
/// style-transform packs that `pack=<name>` option strings select from.
#[derive(Debug, Clone, Default, Serialize)]
pub struct LoaderOptionsDirective {
  pub minimize: bool,
  pub style_packs: FxIndexMap<ArcStr, Vec<StyleTransform>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StyleTransform {
  pub name: ArcStr,
  pub options: Option<String>,
}

impl From<&str> for StyleTransform {
  fn from(value: &str) -> Self {
    match value.split_once('?') {
      Some((name, options)) => {
        Self { name: ArcStr::from(name), options: Some(options.to_string()) }
      }
      None => Self { name: ArcStr::from(value), options: None },
    }
  }
}
