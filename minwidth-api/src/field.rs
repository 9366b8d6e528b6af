use std::fmt;

/// A validated input field of a [`Request`](crate::Request).
///
/// The formula fields are absent on purpose: formulas are not pre-validated,
/// so a bad formula surfaces as
/// [`Failure::InvalidFunction`](crate::Failure::InvalidFunction) when first
/// evaluated rather than as a field error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Field {
    Start,
    End,
    Sigma,
    DecimalPlaces,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Start => "interval start",
            Self::End => "interval end",
            Self::Sigma => "tolerance",
            Self::DecimalPlaces => "decimal places",
        };
        f.write_str(name)
    }
}
