//! TOML-based scenario configuration and preset definitions.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::devices::{Battery, Consumer, Device, Generator};
use crate::sim::circuit::Circuit;

/// Top-level scenario configuration parsed from TOML.
///
/// Devices are declared as an ordered `[[devices]]` array; their order in
/// the file is the registration order on the circuit and therefore the
/// consumer priority order. Load from TOML with
/// [`ScenarioConfig::from_toml_file`] or use a built-in preset.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScenarioConfig {
    /// Simulation run parameters.
    #[serde(default)]
    pub simulation: SimulationConfig,
    /// Ordered device declarations.
    #[serde(default)]
    pub devices: Vec<DeviceConfig>,
}

/// Simulation run parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationConfig {
    /// Number of ticks to run (must be > 0).
    pub ticks: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self { ticks: 24 }
    }
}

/// One device declaration, tagged by `kind`.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DeviceConfig {
    /// Fixed power source.
    Generator {
        /// Power available each tick.
        power_production: f32,
    },
    /// Fixed power demand.
    Consumer {
        /// Power demanded each tick.
        power_consumption: f32,
    },
    /// Rate- and capacity-capped energy buffer.
    Battery {
        /// Symmetric per-tick charge/discharge cap.
        max_power_rate: f32,
        /// Maximum stored energy.
        max_capacity: f32,
        /// Initial stored energy.
        #[serde(default)]
        stored_power: f32,
        /// Whether the battery participates in ticks.
        #[serde(default = "default_on")]
        is_on: bool,
    },
}

fn default_on() -> bool {
    true
}

/// Configuration error with field path and constraint description.
#[derive(Debug)]
pub struct ConfigError {
    /// Dotted field path (e.g., `"devices[2].max_power_rate"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "config error: {} — {}", self.field, self.message)
    }
}

impl ScenarioConfig {
    /// Returns the baseline scenario: two generators, three consumers in
    /// priority order, and two batteries buffering the surplus.
    pub fn baseline() -> Self {
        Self {
            simulation: SimulationConfig::default(),
            devices: vec![
                DeviceConfig::Generator {
                    power_production: 6.0,
                },
                DeviceConfig::Generator {
                    power_production: 4.0,
                },
                DeviceConfig::Consumer {
                    power_consumption: 3.0,
                },
                DeviceConfig::Consumer {
                    power_consumption: 2.5,
                },
                DeviceConfig::Consumer {
                    power_consumption: 1.5,
                },
                DeviceConfig::Battery {
                    max_power_rate: 5.0,
                    max_capacity: 50.0,
                    stored_power: 10.0,
                    is_on: true,
                },
                DeviceConfig::Battery {
                    max_power_rate: 3.0,
                    max_capacity: 30.0,
                    stored_power: 0.0,
                    is_on: true,
                },
            ],
        }
    }

    /// Returns the shortfall preset: demand outstrips generation, batteries
    /// drain over the run and low-priority consumers brown out.
    pub fn shortfall() -> Self {
        Self {
            simulation: SimulationConfig { ticks: 48 },
            devices: vec![
                DeviceConfig::Generator {
                    power_production: 4.0,
                },
                DeviceConfig::Consumer {
                    power_consumption: 5.0,
                },
                DeviceConfig::Consumer {
                    power_consumption: 2.0,
                },
                DeviceConfig::Battery {
                    max_power_rate: 4.0,
                    max_capacity: 40.0,
                    stored_power: 40.0,
                    is_on: true,
                },
            ],
        }
    }

    /// Returns the storage preset: generation surplus with no consumers,
    /// charging a bank of batteries at equal rates.
    pub fn storage() -> Self {
        Self {
            simulation: SimulationConfig { ticks: 12 },
            devices: vec![
                DeviceConfig::Generator {
                    power_production: 9.0,
                },
                DeviceConfig::Battery {
                    max_power_rate: 5.0,
                    max_capacity: 50.0,
                    stored_power: 0.0,
                    is_on: true,
                },
                DeviceConfig::Battery {
                    max_power_rate: 5.0,
                    max_capacity: 50.0,
                    stored_power: 45.0,
                    is_on: true,
                },
                DeviceConfig::Battery {
                    max_power_rate: 5.0,
                    max_capacity: 50.0,
                    stored_power: 0.0,
                    is_on: true,
                },
            ],
        }
    }

    /// Available preset names.
    pub const PRESETS: &[&str] = &["baseline", "shortfall", "storage"];

    /// Loads a scenario from a named preset.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the preset name is unknown.
    pub fn from_preset(name: &str) -> Result<Self, ConfigError> {
        match name {
            "baseline" => Ok(Self::baseline()),
            "shortfall" => Ok(Self::shortfall()),
            "storage" => Ok(Self::storage()),
            _ => Err(ConfigError {
                field: "preset".to_string(),
                message: format!(
                    "unknown preset \"{name}\", available: {}",
                    Self::PRESETS.join(", ")
                ),
            }),
        }
    }

    /// Parses a scenario from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is
    /// invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError {
            field: "scenario".to_string(),
            message: format!("cannot read \"{}\": {e}", path.display()),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a scenario from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError {
            field: "toml".to_string(),
            message: e.to_string(),
        })
    }

    /// Validates all fields and returns a list of errors.
    ///
    /// Returns an empty vector if the configuration is valid. The numeric
    /// core does not validate devices itself; this is the boundary where
    /// malformed declarations are caught before registration.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if self.simulation.ticks == 0 {
            errors.push(ConfigError {
                field: "simulation.ticks".into(),
                message: "must be > 0".into(),
            });
        }

        for (i, device) in self.devices.iter().enumerate() {
            match device {
                DeviceConfig::Generator { power_production } => {
                    if !power_production.is_finite() || *power_production < 0.0 {
                        errors.push(ConfigError {
                            field: format!("devices[{i}].power_production"),
                            message: "must be finite and >= 0".into(),
                        });
                    }
                }
                DeviceConfig::Consumer { power_consumption } => {
                    if !power_consumption.is_finite() || *power_consumption < 0.0 {
                        errors.push(ConfigError {
                            field: format!("devices[{i}].power_consumption"),
                            message: "must be finite and >= 0".into(),
                        });
                    }
                }
                DeviceConfig::Battery {
                    max_power_rate,
                    max_capacity,
                    stored_power,
                    ..
                } => {
                    if !max_power_rate.is_finite() || *max_power_rate <= 0.0 {
                        errors.push(ConfigError {
                            field: format!("devices[{i}].max_power_rate"),
                            message: "must be finite and > 0".into(),
                        });
                    }
                    if !max_capacity.is_finite() || *max_capacity < 0.0 {
                        errors.push(ConfigError {
                            field: format!("devices[{i}].max_capacity"),
                            message: "must be finite and >= 0".into(),
                        });
                    }
                    if !stored_power.is_finite()
                        || *stored_power < 0.0
                        || *stored_power > *max_capacity
                    {
                        errors.push(ConfigError {
                            field: format!("devices[{i}].stored_power"),
                            message: "must be within [0, max_capacity]".into(),
                        });
                    }
                }
            }
        }

        errors
    }

    /// Builds a circuit with the declared devices registered in order.
    pub fn build_circuit(&self) -> Circuit {
        let mut circuit = Circuit::new("MainCircuit");
        for device in &self.devices {
            match device {
                DeviceConfig::Generator { power_production } => {
                    circuit.add_device(Device::Generator(Generator::new(*power_production)));
                }
                DeviceConfig::Consumer { power_consumption } => {
                    circuit.add_device(Device::Consumer(Consumer::new(*power_consumption)));
                }
                DeviceConfig::Battery {
                    max_power_rate,
                    max_capacity,
                    stored_power,
                    is_on,
                } => {
                    let mut battery = Battery::new(*max_power_rate, *max_capacity, *stored_power);
                    battery.set_on(*is_on);
                    circuit.add_device(Device::Battery(battery));
                }
            }
        }
        circuit
    }
}
