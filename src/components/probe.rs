//! Measurement probes.

use super::DcModel;

/// An oscilloscope is an infinite-impedance probe and is never stamped.
pub fn oscilloscope_model() -> DcModel {
    DcModel::Open
}
