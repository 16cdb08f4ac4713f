use std::fmt;

/// Fatal grounding errors.
///
/// Every variant aborts grounding of the offending clause; none is
/// retryable. Absent evidence tuples and unsatisfiable substitutions are
/// not errors, they simply produce no output.
#[derive(Debug, Clone, PartialEq)]
pub enum GroundError {
    /// Clause constructed with no literals.
    EmptyClause,
    /// Clause constructed with a NaN weight.
    InvalidWeight { weight: f64 },
    /// A term mentioned a variable the substitution does not bind.
    UnboundVariable { variable: String },
    /// A clause variable ranges over a domain the evidence does not define.
    UnknownDomain { variable: String, domain: String },
    /// A function term's signature was never registered.
    UnknownFunction { function: String, arity: usize },
}

impl fmt::Display for GroundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroundError::EmptyClause => write!(f, "Clause has no literals"),
            GroundError::InvalidWeight { weight } => {
                write!(f, "Clause weight is not a number: {}", weight)
            }
            GroundError::UnboundVariable { variable } => {
                write!(f, "Variable '{}' is not bound by the substitution", variable)
            }
            GroundError::UnknownDomain { variable, domain } => {
                write!(
                    f,
                    "Variable '{}' ranges over unknown domain '{}'",
                    variable, domain
                )
            }
            GroundError::UnknownFunction { function, arity } => {
                write!(f, "Unknown function '{}'/{}", function, arity)
            }
        }
    }
}

impl std::error::Error for GroundError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_symbols() {
        let err = GroundError::UnknownDomain {
            variable: "x".to_string(),
            domain: "person".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("'x'"), "Message should name the variable: {}", text);
        assert!(text.contains("'person'"), "Message should name the domain: {}", text);
    }

    #[test]
    fn function_errors_show_signature() {
        let err = GroundError::UnknownFunction {
            function: "motherOf".to_string(),
            arity: 1,
        };
        assert_eq!(err.to_string(), "Unknown function 'motherOf'/1");
    }
}
