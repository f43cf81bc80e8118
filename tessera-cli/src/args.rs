//! Value parsers for command line arguments.

use tessera_common::Margin;

fn parse_numbers(s: &str) -> Result<Vec<f64>, String> {
    s.split(',')
        .map(|part| {
            part.trim()
                .parse::<f64>()
                .map_err(|e| format!("invalid number '{}': {e}", part.trim()))
        })
        .collect()
}

/// Parses `A,B`
pub fn parse_pair(s: &str) -> Result<(f64, f64), String> {
    match parse_numbers(s)?.as_slice() {
        [a, b] => Ok((*a, *b)),
        _ => Err(format!("expected two comma separated numbers, got '{s}'")),
    }
}

/// Parses `M` for the same margin on every side, or `TOP,RIGHT,BOTTOM,LEFT`
pub fn parse_margin(s: &str) -> Result<Margin, String> {
    let margin = match parse_numbers(s)?.as_slice() {
        [m] => Margin::new(*m, *m, *m, *m),
        [top, right, bottom, left] => Margin::new(*top, *right, *bottom, *left),
        _ => {
            return Err(format!(
                "expected one number or TOP,RIGHT,BOTTOM,LEFT, got '{s}'"
            ))
        }
    };
    if [margin.top, margin.right, margin.bottom, margin.left]
        .iter()
        .any(|v| !v.is_finite() || *v < 0.0)
    {
        return Err(format!("margins must be finite and non-negative, got '{s}'"));
    }
    Ok(margin)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pair() {
        assert_eq!(parse_pair("0, 10.5"), Ok((0.0, 10.5)));
        assert!(parse_pair("1").is_err());
        assert!(parse_pair("1,2,3").is_err());
        assert!(parse_pair("a,2").is_err());
    }

    #[test]
    fn test_parse_margin() {
        assert_eq!(parse_margin("50"), Ok(Margin::new(50.0, 50.0, 50.0, 50.0)));
        // the scatter plot layout: room for the axis labels at bottom and left
        assert_eq!(
            parse_margin("10,10,50,60"),
            Ok(Margin::new(10.0, 10.0, 50.0, 60.0))
        );
        assert!(parse_margin("10,20").is_err());
        assert!(parse_margin("10,-1,10,10").is_err());
    }
}
