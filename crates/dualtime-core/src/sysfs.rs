//! Battery readings from the Linux `power_supply` class.
//!
//! Each supply is a directory (e.g. `/sys/class/power_supply/BAT0`) holding
//! one small text file per attribute. Only `type`, `capacity` and `status`
//! are used here.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::battery::{BatterySource, BatteryState};

/// Default location of the power supply class on Linux.
pub const DEFAULT_POWER_SUPPLY_ROOT: &str = "/sys/class/power_supply";

/// A battery exposed through a `power_supply` directory.
#[derive(Debug, Clone)]
pub struct SysfsBattery {
    dir: PathBuf,
}

impl SysfsBattery {
    /// Use a specific supply directory.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Find the first supply under `root` whose `type` is `Battery`.
    ///
    /// Entries are visited in name order so `BAT0` wins over `BAT1`. Returns
    /// `None` when `root` is missing or holds no battery.
    pub fn discover(root: &Path) -> Option<Self> {
        let mut dirs: Vec<PathBuf> = fs::read_dir(root)
            .ok()?
            .flatten()
            .map(|entry| entry.path())
            .collect();
        dirs.sort();

        dirs.into_iter()
            .find(|dir| {
                read_attr(dir, "type")
                    .map(|kind| kind.eq_ignore_ascii_case("battery"))
                    .unwrap_or(false)
            })
            .map(Self::new)
    }

    /// The supply directory this battery reads from.
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl BatterySource for SysfsBattery {
    fn name(&self) -> &str {
        "sysfs"
    }

    fn read(&mut self) -> Result<BatteryState> {
        let raw = read_attr(&self.dir, "capacity")?;
        let capacity: u32 = raw.parse().with_context(|| {
            format!(
                "invalid battery capacity {:?} in {}",
                raw,
                self.dir.display()
            )
        })?;
        let status = read_attr(&self.dir, "status")?;

        Ok(BatteryState {
            charge_percent: capacity.min(100) as u8,
            is_charging: status == "Charging",
        })
    }
}

/// Read one attribute file and trim the trailing newline.
fn read_attr(dir: &Path, attr: &str) -> Result<String> {
    let path = dir.join(attr);
    let raw = fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    Ok(raw.trim().to_string())
}
