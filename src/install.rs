//! One-shot acquisition of the PNG backend

use crate::error::{Error, Result};
use crate::render::RASTER_FEATURE;
use std::process::Command;

/// Acquires the imaging capability for a later run
pub trait Installer {
    /// The command a user would run by hand to do the same thing
    fn command_line(&self) -> String;

    fn install(&self) -> Result<()>;
}

/// Reinstalls this tool through `cargo install` with the raster feature on
#[derive(Debug, Clone)]
pub struct CargoInstaller {
    pub package: String,
    pub feature: String,
}

impl Default for CargoInstaller {
    fn default() -> Self {
        Self {
            package: env!("CARGO_PKG_NAME").to_string(),
            feature: RASTER_FEATURE.to_string(),
        }
    }
}

impl CargoInstaller {
    fn args(&self) -> [&str; 4] {
        ["install", self.package.as_str(), "--features", self.feature.as_str()]
    }
}

impl Installer for CargoInstaller {
    fn command_line(&self) -> String {
        format!("cargo {}", self.args().join(" "))
    }

    fn install(&self) -> Result<()> {
        let command = self.command_line();
        log::info!("running {command}");

        let status = Command::new("cargo")
            .args(self.args())
            .status()
            .map_err(|err| Error::InstallFailure {
                command: command.clone(),
                reason: err.to_string(),
            })?;

        if !status.success() {
            return Err(Error::InstallFailure {
                command,
                reason: format!("exited with {status}"),
            });
        }

        Ok(())
    }
}
