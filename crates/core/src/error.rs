/// Errors from the few fallible engine operations: settings updates and
/// project import. Calculators themselves never fail.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Import failed: {0}")]
    Import(String),
}

impl From<validator::ValidationErrors> for CoreError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<String> = errors
            .field_errors()
            .into_iter()
            .map(|(field, errs)| {
                let reasons: Vec<String> = errs
                    .iter()
                    .map(|e| {
                        e.message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| e.code.to_string())
                    })
                    .collect();
                format!("{field}: {}", reasons.join(", "))
            })
            .collect();
        fields.sort();
        CoreError::Validation(fields.join("; "))
    }
}
