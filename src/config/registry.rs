//! Registry actor configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Settings for the family member actor
#[derive(Debug, Clone, Deserialize)]
pub struct RegistryConfig {
    /// Capacity of the request channel in front of the actor
    #[serde(default = "default_channel_capacity")]
    pub channel_capacity: usize,

    /// Start with the ten seeded family members instead of an empty registry
    #[serde(default = "default_seed")]
    pub seed: bool,
}

impl RegistryConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.channel_capacity == 0 {
            return Err(ValidationError::InvalidChannelCapacity);
        }
        Ok(())
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            channel_capacity: default_channel_capacity(),
            seed: default_seed(),
        }
    }
}

fn default_channel_capacity() -> usize {
    32
}

fn default_seed() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_config_defaults() {
        let config = RegistryConfig::default();
        assert_eq!(config.channel_capacity, 32);
        assert!(config.seed);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let config = RegistryConfig {
            channel_capacity: 0,
            seed: false,
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidChannelCapacity)
        );
    }
}
