//! Registration of the built-in processors.

use super::builder::ProcessorRegistryBuilder;
use crate::core::{DataConfig, Result};
use crate::processor::{
    DirectionValueProcessor, DirectionalDataProcessor, DoublePlantDataProcessor,
    DoublePlantTypeValueProcessor, PortionDataProcessor, PortionValueProcessor, SignDataProcessor,
    SignLinesValueProcessor, VelocityDataProcessor, VelocityValueProcessor,
};

/// Register every built-in value and manipulator processor.
///
/// Collaborators may register their own processors on the same builder
/// before or after this call. A conflict with an earlier registration
/// aborts with `RegistrationConflict`.
pub fn register_defaults(builder: &mut ProcessorRegistryBuilder, config: &DataConfig) -> Result<()> {
    builder.register_value_processor(VelocityValueProcessor::new(config))?;
    builder.register_value_processor(SignLinesValueProcessor::new(config))?;
    builder.register_value_processor(PortionValueProcessor)?;
    builder.register_value_processor(DirectionValueProcessor)?;
    builder.register_value_processor(DoublePlantTypeValueProcessor)?;

    builder.register_manipulator_processor(VelocityDataProcessor::new(config))?;
    builder.register_manipulator_processor(SignDataProcessor::new(config))?;
    builder.register_manipulator_processor(PortionDataProcessor)?;
    builder.register_manipulator_processor(DirectionalDataProcessor)?;
    builder.register_manipulator_processor(DoublePlantDataProcessor)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_twice_conflict() {
        let config = DataConfig::default();
        let mut builder = ProcessorRegistryBuilder::new();
        register_defaults(&mut builder, &config).unwrap();

        let error = register_defaults(&mut builder, &config).unwrap_err();
        assert!(error.is_conflict());
        assert_eq!(builder.value_processor_count(), 5);
    }
}
