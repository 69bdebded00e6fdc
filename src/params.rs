//! User-facing parameters of the pattern generator.
//!
//! The field names used for (de)serialization are the parameter ids that the
//! host application shows to the user.

use std::ops::RangeInclusive;

use crate::Error;

/// The allowed number of patches (i.e. of sampled sites).
pub const PATCH_RANGE: RangeInclusive<u32> = 3..=500;

/// What gets cut.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum CutMode {
    /// Cut along the cell boundaries, cutting each shared boundary only once.
    #[default]
    Branches,
    /// Cut each cell out as its own closed patch.
    Patches,
}

/// Parameters for a single run of the generator.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Parameters {
    /// How many sites to scatter, and so roughly how many cells to make.
    #[serde(rename = "Patches")]
    pub patches: u32,
    /// Whether to emit closed patches or the deduplicated branch network.
    #[serde(rename = "Cut")]
    pub cut: CutMode,
    /// Branch width, as a multiple of the bit diameter.
    ///
    /// Only its truthiness matters: a zero (or NaN) branch size turns off
    /// deduplication in branch mode, and every other value behaves the same.
    #[serde(rename = "Branch Size (x bit dia.)")]
    pub branch_size: f64,
}

impl Default for Parameters {
    fn default() -> Self {
        Parameters {
            patches: 10,
            cut: CutMode::Branches,
            branch_size: 1.0,
        }
    }
}

impl Parameters {
    /// Checks that the parameters are in range.
    pub fn validate(&self) -> Result<(), Error> {
        if !PATCH_RANGE.contains(&self.patches) {
            return Err(Error::PatchCount(self.patches));
        }
        Ok(())
    }

    /// Should the generated cells go through edge deduplication?
    pub fn removes_coincident_edges(&self) -> bool {
        self.cut == CutMode::Branches && self.branch_size != 0.0 && !self.branch_size.is_nan()
    }
}
