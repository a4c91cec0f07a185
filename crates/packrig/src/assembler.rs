use std::path::Path;

use arcstr::ArcStr;
use packrig_common::{
  AssemblerOptions, ConfigurationRecord, EntryItem, InjectPosition, PageDescriptor,
  PluginDirective, VENDORS_CHUNK_NAME,
};
use packrig_error::ConfigResult;
use packrig_utils::indexmap::FxIndexMap;

use crate::utils::normalize_options::{normalize_options, NormalizeOptionsReturn};

/// Assembles one immutable [`ConfigurationRecord`] from raw options: defaults
/// are resolved, inputs validated, and one page descriptor derived per
/// non-reserved entry. Pure construction; no filesystem or network access.
pub fn assemble(options: AssemblerOptions) -> ConfigResult<ConfigurationRecord> {
  let NormalizeOptionsReturn {
    entries,
    source_map,
    resolve_extensions,
    output,
    rules,
    extraction_units,
    mut plugins,
    template,
    page_titles,
  } = normalize_options(options)?;

  let pages = derive_page_descriptors(&entries, &page_titles, &template)?;
  plugins.extend(pages.iter().cloned().map(PluginDirective::HtmlPage));

  Ok(ConfigurationRecord {
    source_map,
    resolve_extensions,
    entries,
    output,
    rules,
    extraction_units,
    plugins,
    pages,
  })
}

/// One descriptor per entry, in input order, skipping the reserved shared
/// chunk. A missing title signals a misconfigured build and aborts assembly;
/// no page is ever emitted with a defaulted title.
fn derive_page_descriptors(
  entries: &[EntryItem],
  page_titles: &FxIndexMap<ArcStr, ArcStr>,
  template: &Path,
) -> ConfigResult<Vec<PageDescriptor>> {
  entries
    .iter()
    .filter(|entry| entry.name != VENDORS_CHUNK_NAME)
    .map(|entry| {
      let title = page_titles
        .get(&entry.name)
        .ok_or_else(|| anyhow::anyhow!("Missing page title for entry \"{}\".", entry.name))?;
      Ok(PageDescriptor {
        entry: entry.name.clone(),
        title: title.clone(),
        template: template.to_path_buf(),
        filename: format!("{}.html", entry.name),
        chunks: vec![entry.name.clone(), ArcStr::from(VENDORS_CHUNK_NAME)],
        inject: InjectPosition::Body,
      })
    })
    .collect()
}

#[cfg(test)]
fn example_options() -> AssemblerOptions {
  let mut page_titles = FxIndexMap::default();
  page_titles.insert(arcstr::literal!("index"), arcstr::literal!("Example List"));
  page_titles.insert(arcstr::literal!("simple"), arcstr::literal!("Getting Started"));

  AssemblerOptions {
    entries: Some(vec![
      EntryItem::from(("index", "./examples/index.js")),
      EntryItem::from(("simple", "./examples/simple.js")),
    ]),
    cwd: Some(std::path::PathBuf::from("/workspace")),
    page_titles: Some(page_titles),
    ..AssemblerOptions::default()
  }
}

#[test]
fn test_assemble_derives_one_page_per_entry() {
  let record = assemble(example_options()).unwrap();
  assert_eq!(record.pages.len(), 2);

  let index = &record.pages[0];
  assert_eq!(index.entry, "index");
  assert_eq!(index.title, "Example List");
  assert_eq!(index.filename, "index.html");
  assert_eq!(index.chunks, ["index", "vendors"]);
  assert_eq!(index.inject, InjectPosition::Body);
  assert_eq!(index.template, std::path::PathBuf::from("/workspace/templates/layout.html"));

  let simple = &record.pages[1];
  assert_eq!(simple.entry, "simple");
  assert_eq!(simple.title, "Getting Started");
  assert_eq!(simple.filename, "simple.html");
  assert_eq!(simple.chunks, ["simple", "vendors"]);
}

#[test]
fn test_missing_title_aborts_assembly() {
  let mut options = example_options();
  options.page_titles = None;
  let err = assemble(options).unwrap_err();
  assert!(err[0].to_string().contains("\"index\""));
}

#[test]
fn test_vendors_entry_never_yields_a_page() {
  let mut options = example_options();
  options.entries.as_mut().unwrap().push(EntryItem::from(("vendors", "./examples/vendor.js")));
  // A stray title for the reserved chunk must be ignored, not paged.
  options
    .page_titles
    .as_mut()
    .unwrap()
    .insert(arcstr::literal!("vendors"), arcstr::literal!("Vendors"));

  let record = assemble(options).unwrap();
  assert_eq!(record.pages.len(), 2);
  assert!(record.pages.iter().all(|page| page.entry != "vendors"));
}

#[test]
fn test_html_page_directives_follow_caller_plugins() {
  let mut options = example_options();
  options.plugins =
    Some(vec![PluginDirective::AggressiveMerging, PluginDirective::FailOnEmitError]);

  let record = assemble(options).unwrap();
  assert_eq!(record.plugins.len(), 4);
  assert!(matches!(record.plugins[0], PluginDirective::AggressiveMerging));
  assert!(matches!(record.plugins[1], PluginDirective::FailOnEmitError));
  match (&record.plugins[2], &record.plugins[3]) {
    (PluginDirective::HtmlPage(first), PluginDirective::HtmlPage(second)) => {
      assert_eq!(first.entry, "index");
      assert_eq!(second.entry, "simple");
    }
    _ => panic!("expected trailing HtmlPage directives"),
  }
}

#[test]
fn test_full_production_configuration() {
  use packrig_common::{
    ExtractionBinding, ExtractionUnit, LoaderOptionsDirective, MinifyDirective, StyleTransform,
    ToolInvocation, ToolchainRule,
  };

  let extract_css = ExtractionUnit::new("extract-css", "css/[name].css.[chunkhash].css");
  let extract_sass = ExtractionUnit::new("extract-sass", "css/[name].[chunkhash].css");

  let rules = vec![
    ToolchainRule::new("**/*.js", [ToolInvocation::from("babel")])
      .with_exclude("**/node_modules/**"),
    ToolchainRule::new(
      "**/*.css",
      [ToolInvocation::from("css"), ToolInvocation::from("postcss?pack=cleaner")],
    )
    .with_extraction(ExtractionBinding {
      unit: extract_css.name.clone(),
      fallback: ToolInvocation::from("style"),
      public_path: Some("/dist".to_string()),
    }),
    ToolchainRule::new(
      "**/*.scss",
      [
        ToolInvocation::from("css"),
        ToolInvocation::from("postcss?pack=cleaner"),
        ToolInvocation::from("sass?outputStyle=expanded"),
      ],
    )
    .with_extraction(ExtractionBinding {
      unit: extract_sass.name.clone(),
      fallback: ToolInvocation::from("style"),
      public_path: Some("/dist".to_string()),
    }),
  ];

  let mut env = FxIndexMap::default();
  env.insert(arcstr::literal!("NODE_ENV"), "\"production\"".to_string());

  let mut style_packs = FxIndexMap::default();
  style_packs.insert(
    arcstr::literal!("defaults"),
    vec![StyleTransform::from("precss"), StyleTransform::from("autoprefixer")],
  );
  style_packs.insert(
    arcstr::literal!("cleaner"),
    vec![StyleTransform::from(
      "autoprefixer?flexbox=no-2009&browsers=Chrome >= 35,Firefox >= 38,Android >= 4.3,iOS >=8,Safari >= 8",
    )],
  );

  let mut options = example_options();
  options.rules = Some(rules);
  options.extraction_units = Some(vec![extract_css.clone(), extract_sass.clone()]);
  options.plugins = Some(vec![
    PluginDirective::AggressiveMerging,
    PluginDirective::FailOnEmitError,
    PluginDirective::StyleExtraction(extract_css),
    PluginDirective::StyleExtraction(extract_sass),
    PluginDirective::DefineEnv(env),
    PluginDirective::Minify(MinifyDirective {
      source_map: true,
      compress_warnings: true,
      mangle_except: vec![],
    }),
    PluginDirective::LoaderOptions(LoaderOptionsDirective { minimize: true, style_packs }),
  ]);

  let record = assemble(options).unwrap();
  assert_eq!(record.rules.len(), 3);
  assert!(record.rules[0].matches("examples/index.js"));
  assert!(!record.rules[0].matches("node_modules/react/index.js"));
  assert!(record.rules[2].matches("examples/theme.scss"));
  // 7 caller directives plus one page per non-reserved entry.
  assert_eq!(record.plugins.len(), 9);
  assert!(matches!(record.plugins[8], PluginDirective::HtmlPage(_)));
  match &record.plugins[6] {
    PluginDirective::LoaderOptions(directive) => {
      let cleaner = &directive.style_packs["cleaner"][0];
      assert_eq!(cleaner.name, "autoprefixer");
      assert!(cleaner.options.as_deref().unwrap().contains("browsers=Chrome >= 35"));
    }
    _ => panic!("expected a LoaderOptions directive"),
  }
}

#[test]
fn test_record_serializes_for_the_external_engine() {
  let record = assemble(example_options()).unwrap();
  let json = serde_json::to_value(&record).unwrap();
  assert_eq!(json["pages"][0]["filename"], "index.html");
  assert_eq!(json["pages"][1]["chunks"][1], "vendors");
  assert_eq!(json["output"]["public_path"], "./");
}
