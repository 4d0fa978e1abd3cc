use std::path::Path;

use crate::core::point::Point;
use crate::parsing::ParseError;
use crate::utils::validation::{check_point_limit, validate_points};

/// Parse a point file, choosing the reader from the file extension.
///
/// `.json` files are read as a JSON array of `[x, y]` pairs, `.csv` as
/// comma-separated text, and everything else as tab- or space-separated text.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or the errors of the
/// selected reader.
pub fn parse_points_file(path: &Path) -> Result<Vec<Point>, ParseError> {
    let content = std::fs::read_to_string(path)?;
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase);

    match ext.as_deref() {
        Some("json") => parse_points_json(&content),
        Some("csv") => parse_points_text(&content, Some(',')),
        _ => parse_points_text(&content, None),
    }
}

/// Parse delimited text with one `x y` pair per line.
///
/// With `delimiter = None` fields are split on any whitespace. Blank lines and
/// lines starting with `#` are skipped, as is an `x,y` style header line.
///
/// # Errors
///
/// Returns `ParseError::InvalidFormat` if a line does not have exactly two
/// fields or a field is not a number, `ParseError::TooManyPoints` if the
/// limit is exceeded, or `ParseError::Validation` for NaN or infinite values.
pub fn parse_points_text(text: &str, delimiter: Option<char>) -> Result<Vec<Point>, ParseError> {
    let mut points = Vec::new();
    let mut first_data_line = true;

    for (i, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = match delimiter {
            Some(d) => line.split(d).map(str::trim).collect(),
            None => line.split_whitespace().collect(),
        };

        // Check if first non-empty/non-comment line is a header
        if first_data_line {
            first_data_line = false;
            if fields.first().is_some_and(|f| f.eq_ignore_ascii_case("x")) {
                continue;
            }
        }

        // Line numbers in errors are 1-based for user friendliness
        let line_num = i + 1;

        if fields.len() != 2 {
            return Err(ParseError::InvalidFormat(format!(
                "Line {line_num} has {} fields, expected 2 (x, y)",
                fields.len()
            )));
        }

        let x = parse_coordinate(fields[0], line_num)?;
        let y = parse_coordinate(fields[1], line_num)?;

        if check_point_limit(points.len()).is_some() {
            return Err(ParseError::TooManyPoints(points.len()));
        }

        points.push(Point::new(x, y));
    }

    validate_points(&points)?;
    Ok(points)
}

/// Parse a JSON array of `[x, y]` pairs, e.g. `[[0, 0], [10.5, 3]]`.
///
/// # Errors
///
/// Returns `ParseError::Json` for malformed JSON or non-numeric values,
/// `ParseError::InvalidFormat` if a pair does not have exactly two
/// coordinates, or `ParseError::TooManyPoints` if the limit is exceeded.
pub fn parse_points_json(json: &str) -> Result<Vec<Point>, ParseError> {
    let raw: Vec<Vec<f64>> = serde_json::from_str(json)?;

    if raw.len() > crate::utils::validation::MAX_POINTS {
        return Err(ParseError::TooManyPoints(raw.len()));
    }

    let points = raw
        .iter()
        .enumerate()
        .map(|(i, pair)| match pair.as_slice() {
            &[x, y] => Ok(Point::new(x, y)),
            other => Err(ParseError::InvalidFormat(format!(
                "Point {i} has {} coordinates, expected 2 (x, y)",
                other.len()
            ))),
        })
        .collect::<Result<Vec<_>, _>>()?;

    validate_points(&points)?;
    Ok(points)
}

fn parse_coordinate(field: &str, line_num: usize) -> Result<f64, ParseError> {
    field.parse().map_err(|_| {
        ParseError::InvalidFormat(format!("Invalid coordinate on line {line_num}: '{field}'"))
    })
}
