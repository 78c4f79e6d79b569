use rust_decimal::Decimal;

use finsight_domain::ScenarioParameters;

use crate::CoreError;

/// Rejects parameters that would produce degenerate projections.
pub fn validate_parameters(
    parameters: &ScenarioParameters,
    max_months_to_project: u32,
) -> Result<(), CoreError> {
    for (name, value) in parameters.multipliers() {
        if value <= Decimal::ZERO {
            return Err(CoreError::InvalidParameters(format!(
                "{name} must be positive, got {value}"
            )));
        }
    }
    if parameters.months_to_project == 0 {
        return Err(CoreError::InvalidParameters(
            "months_to_project must be at least 1".into(),
        ));
    }
    if parameters.months_to_project > max_months_to_project {
        return Err(CoreError::InvalidParameters(format!(
            "months_to_project must not exceed {max_months_to_project}, got {}",
            parameters.months_to_project
        )));
    }
    Ok(())
}
