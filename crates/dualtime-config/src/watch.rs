use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use dualtime_core::battery::{BatterySource, FixedBattery};
use dualtime_core::clock::TickUnit;
use dualtime_core::sysfs::{SysfsBattery, DEFAULT_POWER_SUPPLY_ROOT};

/// Watchface configuration loaded from `config.toml`.
///
/// Every section and field is optional; an empty file yields the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WatchConfig {
    #[serde(default)]
    pub clock: ClockConfig,
    #[serde(default)]
    pub battery: BatteryConfig,
}

/// Tick timer subscription.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClockConfig {
    #[serde(default)]
    pub tick_unit: TickUnitSetting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TickUnitSetting {
    #[default]
    Second,
    Minute,
    Hour,
}

impl From<TickUnitSetting> for TickUnit {
    fn from(setting: TickUnitSetting) -> Self {
        match setting {
            TickUnitSetting::Second => TickUnit::Second,
            TickUnitSetting::Minute => TickUnit::Minute,
            TickUnitSetting::Hour => TickUnit::Hour,
        }
    }
}

/// Which battery the watchface reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BatterySourceKind {
    /// Use the first sysfs battery if one exists, otherwise the fixed values.
    #[default]
    Auto,
    Sysfs,
    Fixed,
}

/// Battery service settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BatteryConfig {
    #[serde(default)]
    pub source: BatterySourceKind,
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
    #[serde(default = "default_sysfs_root")]
    pub sysfs_root: String,
    #[serde(default = "default_fixed_percent")]
    pub fixed_percent: u8,
    #[serde(default)]
    pub fixed_charging: bool,
}

fn default_poll_interval_ms() -> u64 {
    1000
}

fn default_sysfs_root() -> String {
    DEFAULT_POWER_SUPPLY_ROOT.to_string()
}

fn default_fixed_percent() -> u8 {
    100
}

impl Default for BatteryConfig {
    fn default() -> Self {
        Self {
            source: BatterySourceKind::default(),
            poll_interval_ms: default_poll_interval_ms(),
            sysfs_root: default_sysfs_root(),
            fixed_percent: default_fixed_percent(),
            fixed_charging: false,
        }
    }
}

impl BatteryConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    fn fixed(&self) -> FixedBattery {
        FixedBattery::new(self.fixed_percent, self.fixed_charging)
    }

    /// Build the configured battery source.
    ///
    /// `sysfs` fails when no battery is found under `sysfs_root`; `auto`
    /// falls back to the fixed values instead.
    pub fn open_source(&self) -> Result<Box<dyn BatterySource>> {
        let root = Path::new(&self.sysfs_root);
        match self.source {
            BatterySourceKind::Fixed => Ok(Box::new(self.fixed())),
            BatterySourceKind::Sysfs => match SysfsBattery::discover(root) {
                Some(bat) => Ok(Box::new(bat)),
                None => bail!("no battery found under {}", root.display()),
            },
            BatterySourceKind::Auto => match SysfsBattery::discover(root) {
                Some(bat) => Ok(Box::new(bat)),
                None => Ok(Box::new(self.fixed())),
            },
        }
    }
}

impl WatchConfig {
    /// Parse and validate config TOML.
    pub fn from_toml_str(input: &str) -> Result<Self> {
        let config: Self = toml::from_str(input).context("failed to parse config TOML")?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config file from disk.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config at {}", path.display()))?;

        Self::from_toml_str(&raw).with_context(|| format!("invalid config at {}", path.display()))
    }

    /// Load the config from [`config_path`], or defaults if no file exists.
    pub fn load() -> Result<Self> {
        match config_path() {
            Some(path) if path.exists() => Self::from_path(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Validate semantic constraints serde cannot express.
    pub fn validate(&self) -> Result<()> {
        if self.battery.poll_interval_ms == 0 {
            bail!("battery.poll_interval_ms must be greater than zero");
        }
        if self.battery.fixed_percent > 100 {
            bail!(
                "battery.fixed_percent must be at most 100, got {}",
                self.battery.fixed_percent
            );
        }
        if self.battery.sysfs_root.trim().is_empty() {
            bail!("battery.sysfs_root must not be empty");
        }
        Ok(())
    }
}

/// Return the config file path.
///
/// Precedence: `DUALTIME_CONFIG` env var > `<config dir>/dualtime/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("DUALTIME_CONFIG") {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir().map(|dir| dir.join("dualtime").join("config.toml"))
}
