use minwidth_eval::Formula;
use minwidth_solvers::width::{self, Config, Solution};

use crate::{Failure, Field};

/// The raw inputs of one width computation, as entered by a caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Request {
    /// Lower interval bound, as text.
    pub start: String,

    /// Upper interval bound, as text.
    pub end: String,

    /// Relative tolerance, as text.
    pub sigma: String,

    /// The function f to approximate, over the variable `x`.
    pub function: String,

    /// An antiderivative F of f, over the variable `x`.
    pub primitive: String,

    /// Number of fractional digits in the output, as text.
    pub decimal_places: String,
}

impl Request {
    /// Validates the text fields and runs the width search.
    ///
    /// Fields are checked in order: start, end, the bounds comparison, sigma,
    /// then decimal places; the first failing field is reported. Formulas are
    /// not pre-validated and fail as [`Failure::InvalidFunction`] when first
    /// evaluated.
    ///
    /// # Errors
    ///
    /// Returns a [`Failure`] naming the offending input, or the search's own
    /// bounds/function/no-solution outcome.
    pub fn run(&self) -> Result<Solution, Failure> {
        let start = parse_number(&self.start, Field::Start)?;
        let end = parse_number(&self.end, Field::End)?;
        if start > end {
            return Err(Failure::InvalidBounds);
        }

        let sigma = parse_number(&self.sigma, Field::Sigma)?;
        let decimal_places = parse_decimal_places(&self.decimal_places)?;

        let function = Formula::new(self.function.clone());
        let primitive = Formula::new(self.primitive.clone());
        let config = Config {
            sigma,
            decimal_places,
        };

        width::search_unobserved(&function, &primitive, [start, end], &config)
            .map_err(Failure::from)
    }
}

fn parse_number(text: &str, field: Field) -> Result<f64, Failure> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(Failure::EmptyInput(field));
    }
    trimmed
        .parse()
        .map_err(|_| Failure::InvalidNumber(field))
}

fn parse_decimal_places(text: &str) -> Result<u32, Failure> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(Failure::EmptyInput(Field::DecimalPlaces));
    }
    // Must be a non-negative integer; fractional or negative text is
    // rejected, not truncated.
    trimmed
        .parse()
        .map_err(|_| Failure::InvalidNumber(Field::DecimalPlaces))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> Request {
        Request {
            start: "0".into(),
            end: "2".into(),
            sigma: "0.5".into(),
            function: "x".into(),
            primitive: "x^2/2".into(),
            decimal_places: "2".into(),
        }
    }

    #[test]
    fn valid_request_returns_a_rounded_solution() {
        let solution = request().run().expect("should solve");

        assert_eq!(solution.rects_count, 3);
        assert_eq!(solution.width, 0.67);
        assert_eq!(solution.area, 1.33);
    }

    #[test]
    fn empty_fields_name_the_field() {
        let failure = Request {
            sigma: "  ".into(),
            ..request()
        }
        .run()
        .unwrap_err();

        assert!(matches!(failure, Failure::EmptyInput(Field::Sigma)));
        assert_eq!(failure.fields(), vec![Field::Sigma]);
    }

    #[test]
    fn unparseable_numbers_name_the_field() {
        let failure = Request {
            start: "abc".into(),
            ..request()
        }
        .run()
        .unwrap_err();

        assert!(matches!(failure, Failure::InvalidNumber(Field::Start)));
        assert_eq!(failure.fields(), vec![Field::Start]);
    }

    #[test]
    fn reversed_bounds_flag_both_bound_fields() {
        let failure = Request {
            start: "5".into(),
            end: "1".into(),
            ..request()
        }
        .run()
        .unwrap_err();

        assert!(matches!(failure, Failure::InvalidBounds));
        assert_eq!(failure.fields(), vec![Field::Start, Field::End]);
    }

    #[test]
    fn bounds_are_checked_before_sigma() {
        let failure = Request {
            start: "5".into(),
            end: "1".into(),
            sigma: "abc".into(),
            ..request()
        }
        .run()
        .unwrap_err();

        assert!(matches!(failure, Failure::InvalidBounds));
    }

    #[test]
    fn fractional_or_negative_decimal_places_are_invalid() {
        for text in ["2.5", "-1"] {
            let failure = Request {
                decimal_places: text.into(),
                ..request()
            }
            .run()
            .unwrap_err();

            assert!(matches!(
                failure,
                Failure::InvalidNumber(Field::DecimalPlaces)
            ));
        }
    }

    #[test]
    fn malformed_function_is_an_invalid_function() {
        let failure = Request {
            function: "2*+".into(),
            primitive: "x".into(),
            ..request()
        }
        .run()
        .unwrap_err();

        assert!(matches!(failure, Failure::InvalidFunction(_)));
        assert!(failure.fields().is_empty());
    }

    #[test]
    fn primitive_diverging_at_an_endpoint_is_an_invalid_function() {
        let failure = Request {
            start: "0".into(),
            end: "1".into(),
            function: "1".into(),
            primitive: "1/x".into(),
            ..request()
        }
        .run()
        .unwrap_err();

        assert!(matches!(failure, Failure::InvalidFunction(_)));
    }

    #[test]
    fn exhausted_precision_is_no_solution() {
        let failure = Request {
            sigma: "0.000000001".into(),
            decimal_places: "0".into(),
            ..request()
        }
        .run()
        .unwrap_err();

        assert!(matches!(failure, Failure::NoSolution));
    }
}
