//! Power sources.

use super::DcModel;

/// DC model of an ideal power source.
///
/// The source enforces `V(terminal 1) - V(terminal 0) = volts` and needs an
/// extra row/column in the MNA matrix for its branch current.
pub fn power_source_model(volts: f64) -> DcModel {
    DcModel::Branch { emf: volts }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_power_source_is_branch() {
        let model = power_source_model(12.0);
        assert!(model.is_branch());
        assert_eq!(model, DcModel::Branch { emf: 12.0 });
    }
}
