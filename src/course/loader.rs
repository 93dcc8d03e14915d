use std::{fs::File, io::Read, path::Path, str::FromStr};

use csv::StringRecord;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::{CourseTable, InputError, RawHole};
use crate::model::constants::{DISTANCE_COLUMN, HANDICAP_COLUMN, SCORE_COLUMN};

/// Header names the loader binds to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnNames {
    pub distance: String,
    pub average_score: String,
    pub handicap: String
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            distance: DISTANCE_COLUMN.to_string(),
            average_score: SCORE_COLUMN.to_string(),
            handicap: HANDICAP_COLUMN.to_string()
        }
    }
}

/// Loads and normalizes a hole table from a CSV file.
///
/// Any failure here is fatal to a run: no tier can be scored without a
/// valid table.
pub fn load_course_table(path: &Path, columns: &ColumnNames) -> Result<CourseTable, InputError> {
    let file = File::open(path).map_err(|source| InputError::Io {
        path: path.display().to_string(),
        source
    })?;

    let table = load_course_table_from_reader(file, columns)?;
    info!(path = %path.display(), holes = table.len(), "Loaded course table");

    Ok(table)
}

pub fn load_course_table_from_reader<R: Read>(rdr: R, columns: &ColumnNames) -> Result<CourseTable, InputError> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(rdr);

    let headers = reader.headers()?.clone();
    if headers.is_empty() {
        return Err(InputError::Empty);
    }

    let distance_idx = column_index(&headers, &columns.distance)?;
    let score_idx = column_index(&headers, &columns.average_score)?;
    let handicap_idx = column_index(&headers, &columns.handicap)?;

    let mut raw = Vec::new();
    for (i, record) in reader.records().enumerate() {
        let record = record?;
        // 1-based, header excluded
        let row = i + 1;

        let distance: f64 = parse_field(&record, distance_idx, &columns.distance, row)?;
        let average_score: f64 = parse_field(&record, score_idx, &columns.average_score, row)?;
        let handicap = parse_handicap(&record, handicap_idx, &columns.handicap, row)?;

        if !distance.is_finite() {
            return Err(InputError::NonFinite {
                row,
                column: columns.distance.clone()
            });
        }
        if !average_score.is_finite() {
            return Err(InputError::NonFinite {
                row,
                column: columns.average_score.clone()
            });
        }
        if distance < 0.0 {
            return Err(InputError::Malformed {
                row,
                column: columns.distance.clone(),
                value: distance.to_string()
            });
        }
        raw.push(RawHole {
            distance,
            average_score,
            handicap
        });
    }

    debug!(rows = raw.len(), "Read hole rows");

    CourseTable::from_holes(raw)
}

fn column_index(headers: &StringRecord, column: &str) -> Result<usize, InputError> {
    headers
        .iter()
        .position(|h| h == column)
        .ok_or_else(|| InputError::MissingColumn {
            column: column.to_string()
        })
}

fn parse_field<T: FromStr>(record: &StringRecord, idx: usize, column: &str, row: usize) -> Result<T, InputError> {
    let value = record.get(idx).unwrap_or_default();

    value.parse::<T>().map_err(|_| InputError::Malformed {
        row,
        column: column.to_string(),
        value: value.to_string()
    })
}

/// Handicap ranks are whole numbers from 1 up. Exports that write them as
/// floats (`3.0`) are accepted.
fn parse_handicap(record: &StringRecord, idx: usize, column: &str, row: usize) -> Result<u32, InputError> {
    let value: f64 = parse_field(record, idx, column, row)?;

    if !value.is_finite() || value.fract() != 0.0 || value < 1.0 || value > u32::MAX as f64 {
        return Err(InputError::Malformed {
            row,
            column: column.to_string(),
            value: record.get(idx).unwrap_or_default().to_string()
        });
    }

    Ok(value as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const TWO_HOLES: &str = "\
Hole,Hole Distance (Yards),Par,Average Score (2016),Handicap (2016)
1,300,4,4.0,3
2,400,4,5.0,10
";

    fn load(csv_data: &str) -> Result<CourseTable, InputError> {
        load_course_table_from_reader(csv_data.as_bytes(), &ColumnNames::default())
    }

    #[test]
    fn test_load_two_holes() {
        let table = load(TWO_HOLES).unwrap();

        assert_eq!(table.len(), 2);
        assert_abs_diff_eq!(table.holes()[0].distance_norm, 0.75);
        assert_abs_diff_eq!(table.holes()[1].distance_norm, 1.0);
        assert_abs_diff_eq!(table.holes()[0].difficulty_norm, 0.0);
        assert_abs_diff_eq!(table.holes()[1].difficulty_norm, 1.0);
        assert_abs_diff_eq!(table.narrow_fraction(5), 0.5);
    }

    #[test]
    fn test_load_trims_whitespace() {
        let csv_data = "\
 Hole Distance (Yards) , Average Score (2016) , Handicap (2016)
 300 , 4.0 , 3
 400 , 5.0 , 10
";
        let table = load(csv_data).unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.holes()[1].handicap, 10);
    }

    #[test]
    fn test_custom_columns() {
        let csv_data = "\
yards,avg,hcp
300,4.0,3
400,5.0,10
";
        let columns = ColumnNames {
            distance: "yards".to_string(),
            average_score: "avg".to_string(),
            handicap: "hcp".to_string()
        };

        let table = load_course_table_from_reader(csv_data.as_bytes(), &columns).unwrap();
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_missing_column() {
        let csv_data = "\
Hole Distance (Yards),Average Score (2016)
300,4.0
";
        let result = load(csv_data);

        match result {
            Err(InputError::MissingColumn { column }) => assert_eq!(column, "Handicap (2016)"),
            other => panic!("Expected missing column error, got {:?}", other)
        }
    }

    #[test]
    fn test_empty_source() {
        assert!(matches!(load(""), Err(InputError::Empty)));
    }

    #[test]
    fn test_headers_only() {
        let csv_data = "Hole Distance (Yards),Average Score (2016),Handicap (2016)\n";

        assert!(matches!(load(csv_data), Err(InputError::Empty)));
    }

    #[test]
    fn test_malformed_number() {
        let csv_data = "\
Hole Distance (Yards),Average Score (2016),Handicap (2016)
300,4.0,3
long,5.0,10
";
        match load(csv_data) {
            Err(InputError::Malformed { row, column, value }) => {
                assert_eq!(row, 2);
                assert_eq!(column, "Hole Distance (Yards)");
                assert_eq!(value, "long");
            }
            other => panic!("Expected malformed error, got {:?}", other)
        }
    }

    #[test]
    fn test_non_finite_score() {
        let csv_data = "\
Hole Distance (Yards),Average Score (2016),Handicap (2016)
300,NaN,3
400,5.0,10
";
        assert!(matches!(load(csv_data), Err(InputError::NonFinite { row: 1, .. })));
    }

    #[test]
    fn test_zero_handicap_rejected() {
        let csv_data = "\
Hole Distance (Yards),Average Score (2016),Handicap (2016)
300,4.0,0
400,5.0,10
";
        assert!(matches!(load(csv_data), Err(InputError::Malformed { row: 1, .. })));
    }

    #[test]
    fn test_float_written_handicap_accepted() {
        let csv_data = "\
Hole Distance (Yards),Average Score (2016),Handicap (2016)
300,4.0,3.0
400,5.0,10
";
        let table = load(csv_data).unwrap();

        assert_eq!(table.holes()[0].handicap, 3);
        assert_eq!(table.holes()[1].handicap, 10);
    }

    #[test]
    fn test_fractional_handicap_rejected() {
        let csv_data = "\
Hole Distance (Yards),Average Score (2016),Handicap (2016)
300,4.0,3.5
400,5.0,10
";
        match load(csv_data) {
            Err(InputError::Malformed { row, value, .. }) => {
                assert_eq!(row, 1);
                assert_eq!(value, "3.5");
            }
            other => panic!("Expected malformed handicap, got {:?}", other.map(|t| t.len()))
        }
    }

    #[test]
    fn test_degenerate_scores() {
        let csv_data = "\
Hole Distance (Yards),Average Score (2016),Handicap (2016)
300,4.0,3
400,4.0,10
";
        assert!(matches!(load(csv_data), Err(InputError::Degenerate { .. })));
    }

    #[test]
    fn test_missing_file() {
        let result = load_course_table(Path::new("/nonexistent/course.csv"), &ColumnNames::default());

        assert!(matches!(result, Err(InputError::Io { .. })));
    }
}
