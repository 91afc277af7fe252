//! Simulation configuration.
//!
//! A `SimulationConfig` fully describes one sweep run: transmit powers,
//! user geometry, power split, decoding thresholds, the SNR operating
//! points and the Monte Carlo sample count. The default value is the
//! canonical two-user scenario; runs can also be described in YAML and
//! loaded with [`load_config`].
//!
//! "Far" and "near" are configuration labels tied to the power split: the
//! far-designated user receives the `power_split` fraction of the total
//! power and is decoded first under SIC. The labels make no claim about
//! which user is physically closer.

use std::fs::File;
use std::path::Path;

use serde::Deserialize;

use crate::error::SimulationError;

#[derive(Debug, Clone, Deserialize)]
pub struct SimulationConfig {
    /// Total transmit power shared by both users (normalized).
    pub total_power: f64,
    /// Base noise normalization; the per-point noise power is derived from
    /// the nominal SNR instead, this is kept as the reference floor.
    pub noise_floor_reference: f64,
    /// Base-station distance of the far-designated user (m).
    pub distance_far: f64,
    /// Base-station distance of the near-designated user (m).
    pub distance_near: f64,
    /// Path-loss exponent (2.0 urban free-space up to ~4.0 rural).
    pub path_loss_exponent: f64,
    /// Fraction of `total_power` allocated to the far-designated user.
    pub power_split: f64,
    /// Minimum decodable SINR for the far user (dB).
    pub threshold_far_db: f64,
    /// Minimum decodable SINR for the near user (dB).
    pub threshold_near_db: f64,
    /// Nominal SNR operating points (dB), evaluated in this order.
    pub snr_sweep_db: Vec<f64>,
    /// Monte Carlo realizations per SNR point.
    pub num_realizations: usize,
    /// Master RNG seed; `None` draws from OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            total_power: 1.0,
            noise_floor_reference: 1e-9,
            distance_far: 50.0,
            distance_near: 150.0,
            path_loss_exponent: 3.0,
            power_split: 0.7,
            threshold_far_db: 5.0,
            threshold_near_db: 10.0,
            snr_sweep_db: vec![0.0, 5.0, 10.0, 15.0, 20.0, 25.0, 30.0],
            num_realizations: 100_000,
            seed: None,
        }
    }
}

impl SimulationConfig {
    /// Power allocated to the far-designated user.
    pub fn power_far(&self) -> f64 {
        self.power_split * self.total_power
    }

    /// Power allocated to the near-designated user.
    pub fn power_near(&self) -> f64 {
        (1.0 - self.power_split) * self.total_power
    }

    /// Fail-fast parameter check, run before any sampling.
    pub fn validate(&self) -> Result<(), SimulationError> {
        if !(self.total_power > 0.0) {
            return Err(SimulationError::invalid(format!(
                "total_power must be positive, got {}",
                self.total_power
            )));
        }
        if !(self.noise_floor_reference > 0.0) {
            return Err(SimulationError::invalid(format!(
                "noise_floor_reference must be positive, got {}",
                self.noise_floor_reference
            )));
        }
        if !(self.distance_far > 0.0) || !(self.distance_near > 0.0) {
            return Err(SimulationError::invalid(format!(
                "user distances must be positive, got far={} near={}",
                self.distance_far, self.distance_near
            )));
        }
        if !self.path_loss_exponent.is_finite() || self.path_loss_exponent <= 0.0 {
            return Err(SimulationError::invalid(format!(
                "path_loss_exponent must be finite and positive, got {}",
                self.path_loss_exponent
            )));
        }
        if !(self.power_split > 0.0 && self.power_split < 1.0) {
            return Err(SimulationError::invalid(format!(
                "power_split must lie in (0, 1), got {}",
                self.power_split
            )));
        }
        if self.snr_sweep_db.is_empty() {
            return Err(SimulationError::invalid("snr_sweep_db must not be empty"));
        }
        if self.num_realizations == 0 {
            return Err(SimulationError::invalid(
                "num_realizations must be positive",
            ));
        }
        Ok(())
    }
}

/// Load and validate a configuration from a YAML file.
pub fn load_config(path: impl AsRef<Path>) -> Result<SimulationConfig, SimulationError> {
    let file = File::open(path)?;
    let config: SimulationConfig = serde_yaml::from_reader(file)?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(SimulationConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_degenerate_parameters() {
        let cases: Vec<(&str, Box<dyn Fn(&mut SimulationConfig)>)> = vec![
            ("zero power", Box::new(|c| c.total_power = 0.0)),
            ("negative distance", Box::new(|c| c.distance_far = -50.0)),
            ("zero distance", Box::new(|c| c.distance_near = 0.0)),
            ("split at zero", Box::new(|c| c.power_split = 0.0)),
            ("split at one", Box::new(|c| c.power_split = 1.0)),
            ("split above one", Box::new(|c| c.power_split = 1.3)),
            ("empty sweep", Box::new(|c| c.snr_sweep_db.clear())),
            ("zero realizations", Box::new(|c| c.num_realizations = 0)),
            ("nan exponent", Box::new(|c| c.path_loss_exponent = f64::NAN)),
        ];

        for (label, mutate) in cases {
            let mut config = SimulationConfig::default();
            mutate(&mut config);
            let result = config.validate();
            assert!(
                matches!(result, Err(SimulationError::InvalidParameter(_))),
                "expected InvalidParameter for case: {label}"
            );
        }
    }

    #[test]
    fn loads_yaml_configuration() {
        let yaml = "\
total_power: 2.0
noise_floor_reference: 1.0e-9
distance_far: 100.0
distance_near: 300.0
path_loss_exponent: 3.5
power_split: 0.8
threshold_far_db: 4.0
threshold_near_db: 8.0
snr_sweep_db: [0.0, 10.0, 20.0]
num_realizations: 5000
seed: 7
";
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(yaml.as_bytes()).unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.total_power, 2.0);
        assert_eq!(config.power_split, 0.8);
        assert_eq!(config.snr_sweep_db, vec![0.0, 10.0, 20.0]);
        assert_eq!(config.num_realizations, 5000);
        assert_eq!(config.seed, Some(7));
        assert!((config.power_far() - 1.6).abs() < 1e-12);
        assert!((config.power_near() - 0.4).abs() < 1e-12);
    }

    #[test]
    fn seed_is_optional_in_yaml() {
        let yaml = "\
total_power: 1.0
noise_floor_reference: 1.0e-9
distance_far: 50.0
distance_near: 150.0
path_loss_exponent: 3.0
power_split: 0.7
threshold_far_db: 5.0
threshold_near_db: 10.0
snr_sweep_db: [0.0]
num_realizations: 100
";
        let config: SimulationConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.seed, None);
    }

    #[test]
    fn invalid_yaml_config_is_rejected_on_load() {
        let yaml = "\
total_power: 1.0
noise_floor_reference: 1.0e-9
distance_far: 50.0
distance_near: 150.0
path_loss_exponent: 3.0
power_split: 0.7
threshold_far_db: 5.0
threshold_near_db: 10.0
snr_sweep_db: [0.0]
num_realizations: 0
";
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(yaml.as_bytes()).unwrap();

        assert!(matches!(
            load_config(file.path()),
            Err(SimulationError::InvalidParameter(_))
        ));
    }
}
