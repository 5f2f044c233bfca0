use crate::core::error::ApiFailure;
use async_trait::async_trait;

pub mod base_client;
pub mod huggingface;

pub const MAX_LENGTH_RANGE: std::ops::RangeInclusive<u32> = 50..=500;
pub const TEMPERATURE_RANGE: std::ops::RangeInclusive<f64> = 0.1..=2.0;

/// Sampling parameters for one request. Supplied per call, never stored in
/// the session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationParams {
    pub max_length: u32,
    pub temperature: f64,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            max_length: 200,
            temperature: 0.7,
        }
    }
}

impl GenerationParams {
    pub fn set_max_length(&mut self, max_length: u32) -> Result<(), String> {
        if !MAX_LENGTH_RANGE.contains(&max_length) {
            return Err(format!(
                "max length must be between {} and {}",
                MAX_LENGTH_RANGE.start(),
                MAX_LENGTH_RANGE.end()
            ));
        }
        self.max_length = max_length;
        Ok(())
    }

    pub fn set_temperature(&mut self, temperature: f64) -> Result<(), String> {
        if !TEMPERATURE_RANGE.contains(&temperature) {
            return Err(format!(
                "temperature must be between {} and {}",
                TEMPERATURE_RANGE.start(),
                TEMPERATURE_RANGE.end()
            ));
        }
        self.temperature = temperature;
        Ok(())
    }
}

/// Seam to the hosted text-generation service. The chat flow only sees this
/// trait, so tests swap in a scripted provider.
#[async_trait]
pub trait TextGenProvider: Send + Sync {
    /// Send one prompt and return the generated text, or the classified
    /// failure. Implementations never retry.
    async fn generate(
        &self,
        model_id: &str,
        token: &str,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<String, ApiFailure>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn params_reject_out_of_range_values() {
        let mut params = GenerationParams::default();
        assert!(params.set_max_length(49).is_err());
        assert!(params.set_max_length(501).is_err());
        assert!(params.set_max_length(500).is_ok());
        assert_eq!(params.max_length, 500);

        assert!(params.set_temperature(0.0).is_err());
        assert!(params.set_temperature(2.5).is_err());
        assert!(params.set_temperature(1.3).is_ok());
        assert_eq!(params.temperature, 1.3);
    }
}
