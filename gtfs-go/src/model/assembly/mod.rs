mod assembled_features;
mod assembly_options;
mod feature_assembler;
mod stop_mapping_row;

pub use assembled_features::AssembledFeatures;
pub use assembly_options::AssemblyOptions;
pub use feature_assembler::FeatureAssembler;
pub use stop_mapping_row::StopMappingRow;
