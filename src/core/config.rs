//! Per-request generation settings.

use crate::api::GenerationConfig;

/// Output-length cap sent with every request.
pub const MAX_OUTPUT_TOKENS: u32 = 2048;

pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Step used by the temperature keybindings.
pub const TEMPERATURE_STEP: f32 = 0.1;

#[derive(Clone, Copy, Debug)]
pub struct GenerationSettings {
    temperature: f32,
}

impl GenerationSettings {
    pub fn new(temperature: f32) -> Self {
        GenerationSettings {
            temperature: temperature.clamp(0.0, 1.0),
        }
    }

    pub fn temperature(&self) -> f32 {
        self.temperature
    }

    /// Set the temperature exactly; values outside [0, 1] are rejected.
    pub fn set_temperature(&mut self, value: f32) -> Result<(), String> {
        if !(0.0..=1.0).contains(&value) {
            return Err(format!(
                "Temperature must be between 0.0 and 1.0 (got {value})"
            ));
        }
        self.temperature = value;
        Ok(())
    }

    /// Nudge the temperature by `delta`, clamping to [0, 1].
    pub fn adjust_temperature(&mut self, delta: f32) {
        self.temperature = (self.temperature + delta).clamp(0.0, 1.0);
    }

    pub fn generation_config(&self) -> GenerationConfig {
        GenerationConfig {
            temperature: self.temperature,
            max_output_tokens: MAX_OUTPUT_TOKENS,
        }
    }
}

impl Default for GenerationSettings {
    fn default() -> Self {
        GenerationSettings::new(DEFAULT_TEMPERATURE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_temperature_rejects_out_of_range() {
        let mut settings = GenerationSettings::default();
        assert!(settings.set_temperature(1.5).is_err());
        assert!(settings.set_temperature(-0.1).is_err());
        assert!(settings.set_temperature(f32::NAN).is_err());
        assert_eq!(settings.temperature(), DEFAULT_TEMPERATURE);
    }

    #[test]
    fn adjust_temperature_clamps() {
        let mut settings = GenerationSettings::new(0.95);
        settings.adjust_temperature(TEMPERATURE_STEP);
        assert_eq!(settings.temperature(), 1.0);

        let mut settings = GenerationSettings::new(0.05);
        settings.adjust_temperature(-TEMPERATURE_STEP);
        assert_eq!(settings.temperature(), 0.0);
    }

    #[test]
    fn generation_config_carries_fixed_token_cap() {
        let config = GenerationSettings::new(0.3).generation_config();
        assert_eq!(config.max_output_tokens, MAX_OUTPUT_TOKENS);
        assert_eq!(config.temperature, 0.3);
    }
}
