//! Reading computed CSS lengths.

use nom::{character::complete::space0, number::complete::double, sequence::preceded, IResult};

fn leading_number(input: &str) -> IResult<&str, f64> {
    preceded(space0, double)(input)
}

/// Read the leading number of a computed length such as `"12.5px"`.
///
/// Mirrors how browsers expose computed lengths: any unit suffix is ignored.
/// Returns NaN when the value does not start with a number (e.g. `"auto"`),
/// callers decide how to treat it (see [`crate::finite_or_zero`]).
pub fn parse_px(value: &str) -> f64 {
    match leading_number(value) {
        Ok((_, number)) => number,
        Err(_) => f64::NAN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_px() {
        assert_eq!(parse_px("12px"), 12.0);
        assert_eq!(parse_px(" -3.5px"), -3.5);
        assert_eq!(parse_px("0"), 0.0);
    }

    #[test]
    fn test_parse_px_not_a_number() {
        assert!(parse_px("auto").is_nan());
        assert!(parse_px("").is_nan());
    }
}
