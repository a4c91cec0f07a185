mod assembler_options;
mod types;

pub use assembler_options::{
  AssemblerOptions, configuration_record::ConfigurationRecord, entry_item::EntryItem,
  extraction_unit::ExtractionUnit, filename_template::FilenameTemplate,
  output_policy::OutputPolicy,
  plugin_directive::{LoaderOptionsDirective, MinifyDirective, PluginDirective, StyleTransform},
  source_map_mode::SourceMapMode,
  toolchain_rule::{ExtractionBinding, ToolInvocation, ToolchainRule},
};

pub use crate::types::page_descriptor::{InjectPosition, PageDescriptor, VENDORS_CHUNK_NAME};
