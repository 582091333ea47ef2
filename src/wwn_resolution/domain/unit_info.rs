use once_cell::sync::Lazy;
use regex::Regex;

use crate::shared::error::RaidError;
use crate::shared::Result;

/// Number of whitespace-separated columns in a tw-cli unit listing row
const UNIT_INFO_FIELDS: usize = 8;

/// Blank lines and `----` separator rules between header and data
static SEPARATOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\s\-]*$").expect("valid separator regex"));

/// One parsed row of a tw-cli unit-status listing.
///
/// The listing header is:
///   `Unit  UnitType  Status  %RCmpl  %V/I/M  VPort  Stripe  Size(GB)`
///
/// Only `unit_type` (SINGLE vs a RAID level) and `vport` (the virtual port
/// a WWN query is routed to) are consumed; the remaining columns are kept
/// so a row with the wrong shape is rejected instead of silently truncated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitInfo {
    pub unit: String,
    pub unit_type: String,
    pub status: String,
    pub rcmpl: String,
    pub vim: String,
    pub vport: String,
    pub stripe: String,
    pub size: String,
}

impl UnitInfo {
    /// Parses one data row of the unit listing
    ///
    /// # Errors
    /// Returns `RaidError::UnitListingParse` if the row does not split into
    /// exactly the expected column count.
    pub fn parse_row(line: &str) -> Result<Self> {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != UNIT_INFO_FIELDS {
            return Err(RaidError::UnitListingParse {
                line: line.trim().to_string(),
            }
            .into());
        }

        Ok(Self {
            unit: fields[0].to_string(),
            unit_type: fields[1].to_string(),
            status: fields[2].to_string(),
            rcmpl: fields[3].to_string(),
            vim: fields[4].to_string(),
            vport: fields[5].to_string(),
            stripe: fields[6].to_string(),
            size: fields[7].to_string(),
        })
    }

    /// Parses a full unit listing: header line, separator lines, data rows
    ///
    /// Blank lines, all-dash separator lines, and the header line (any line
    /// starting with "Unit") are skipped; every remaining line must be a
    /// well-formed data row.
    ///
    /// # Errors
    /// Returns `RaidError::UnitListingParse` for a malformed data row. An
    /// empty result (zero data rows) is not an error here; callers decide
    /// what an empty listing means.
    pub fn parse_listing(output: &str) -> Result<Vec<Self>> {
        output
            .lines()
            .filter(|line| !SEPARATOR_RE.is_match(line) && !line.starts_with("Unit"))
            .map(Self::parse_row)
            .collect()
    }
}
