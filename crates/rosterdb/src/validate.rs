use crate::gateway::GatewayError;

/// Trim a required text field, rejecting blank values.
pub(crate) fn require_text(
    entity: &'static str,
    field: &'static str,
    value: &str,
) -> Result<String, GatewayError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(GatewayError::MissingField { entity, field });
    }

    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(require_text("user", "name", "  Ana  ").unwrap(), "Ana");
    }

    #[test]
    fn rejects_blank_values() {
        let err = require_text("user", "email", "   ").unwrap_err();
        assert!(matches!(
            err,
            GatewayError::MissingField {
                entity: "user",
                field: "email"
            }
        ));
    }
}
