use crate::ports::outbound::{CommandRunner, WwnResolver};
use crate::shared::error::RaidError;
use crate::shared::Result;
use crate::wwn_resolution::domain::{BusLocation, UnitInfo};

/// Controller management CLI shipped with 3ware controllers
const TW_CLI: &str = "tw-cli";

/// ThreeWareHandler - WWN resolution through the 3ware tw-cli utility
///
/// State-free, two-step protocol:
/// 1. `tw-cli /c<controller>/u<unit> show` lists the unit; the unit must be
///    of type SINGLE (a pass-through single disk). WWN resolution is defined
///    only for non-RAID pass-through units; a RAID-striped unit has no
///    single underlying disk to name.
/// 2. `tw-cli /c<controller>/<vport> show wwn` answers with one
///    `key=value` line whose value is the WWN.
pub struct ThreeWareHandler<R: CommandRunner> {
    runner: R,
}

impl<R: CommandRunner> ThreeWareHandler<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    /// Lists the units of the addressed controller/unit pair
    fn show_units(&self, location: BusLocation, businfo: &str) -> Result<Vec<UnitInfo>> {
        let target = format!("/c{}/u{}", location.controller, location.unit);
        let output = self.runner.run(TW_CLI, &[&target, "show"])?;

        let units = UnitInfo::parse_listing(&output)?;
        if units.is_empty() {
            return Err(RaidError::WwnNotResolved {
                businfo: businfo.to_string(),
            }
            .into());
        }
        Ok(units)
    }

    /// Fetches the WWN for a virtual port and parses the `key=value` reply
    fn show_wwn(&self, location: BusLocation, vport: &str) -> Result<String> {
        let target = format!("/c{}/{}", location.controller, vport);
        let output = self.runner.run(TW_CLI, &[&target, "show", "wwn"])?;

        let line = output.trim();
        let (_, value) = line.split_once('=').ok_or_else(|| RaidError::UnitListingParse {
            line: line.to_string(),
        })?;
        Ok(value.trim().to_string())
    }
}

impl<R: CommandRunner> WwnResolver for ThreeWareHandler<R> {
    fn resolve_wwn(&self, businfo: &str) -> Result<String> {
        let location = BusLocation::parse(businfo)?;

        let units = self.show_units(location, businfo)?;
        let unit = &units[0];
        if unit.unit_type != "SINGLE" {
            return Err(RaidError::RaidedDevice {
                unit_type: unit.unit_type.clone(),
            }
            .into());
        }

        self.show_wwn(location, &unit.vport)
    }
}
