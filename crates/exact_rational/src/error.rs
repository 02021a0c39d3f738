/// Failures surfaced by construction, division, parsing and narrowing
/// conversions. Every operation either yields a canonical [`crate::Rational`]
/// or one of these; there are no sentinel values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RationalError {
    #[error("division by zero")]
    DivideByZero,
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("cannot parse `{input}` as a rational: {reason}")]
    Parse { input: String, reason: String },
    #[error("value is not an integer")]
    NotAnInteger,
    #[error("value does not fit in {target}")]
    OutOfRange { target: &'static str },
}

impl RationalError {
    pub(crate) fn parse(input: &str, reason: impl Into<String>) -> Self {
        let reason = reason.into();
        tracing::debug!(input, reason = reason.as_str(), "rejected rational literal");
        RationalError::Parse {
            input: input.to_string(),
            reason,
        }
    }
}

pub type Result<T, E = RationalError> = std::result::Result<T, E>;
