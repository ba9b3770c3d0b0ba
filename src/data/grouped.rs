use crate::data::error::DataLoadErr;
use crate::error::TtcomputeErr;
use itertools::Itertools;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::io;

/// Values keyed by group level, in record order within each level
#[derive(Debug, Default, Clone, PartialEq)]
pub struct GroupedSamples {
    groups: HashMap<String, Vec<f64>>,
}

impl GroupedSamples {
    pub fn from_records<I, L>(records: I) -> GroupedSamples
    where
        I: IntoIterator<Item = (L, f64)>,
        L: Into<String>,
    {
        GroupedSamples {
            groups: records
                .into_iter()
                .map(|(level, value)| (level.into(), value))
                .into_group_map(),
        }
    }

    /// Reads csv text whose first row holds column labels.
    ///
    /// Rows are numbered from 1 with the header as row 1, matching what a
    /// spreadsheet shows.
    pub fn from_csv_reader<R: io::Read>(
        reader: R,
        group_column: &str,
        value_column: &str,
    ) -> Result<GroupedSamples, TtcomputeErr> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = reader
            .headers()
            .map_err(|e| DataLoadErr::Csv {
                row: 1,
                message: e.to_string(),
            })?
            .clone();
        let column_index = |column: &str| {
            headers
                .iter()
                .position(|h| h == column)
                .ok_or_else(|| DataLoadErr::MissingColumn {
                    column: column.to_string(),
                    available: headers.iter().map(String::from).collect(),
                })
        };
        let group_index = column_index(group_column)?;
        let value_index = column_index(value_column)?;

        let records = reader
            .records()
            .enumerate()
            .map(|(i, record)| {
                let row = i + 2;
                let record = record.map_err(|e| DataLoadErr::Csv {
                    row,
                    message: e.to_string(),
                })?;
                // field counts are checked by the reader, so both indices exist
                let level = record.get(group_index).unwrap_or_default();
                let raw_value = record.get(value_index).unwrap_or_default();
                let value = raw_value
                    .parse::<f64>()
                    .map_err(|_| DataLoadErr::BadValue {
                        row,
                        value: raw_value.to_string(),
                    })?;
                Ok((level.to_string(), value))
            })
            .collect::<Result<Vec<(String, f64)>, DataLoadErr>>()?;

        Ok(GroupedSamples::from_records(records))
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Distinct group levels, numerically ordered when every level is a
    /// number and lexicographically otherwise
    pub fn levels(&self) -> Vec<&str> {
        let numeric = self.groups.keys().all(|level| level.parse::<f64>().is_ok());
        self.groups
            .keys()
            .map(String::as_str)
            .sorted_by(|a, b| compare_levels(a, b, numeric))
            .collect()
    }

    pub fn sample(&self, level: &str) -> Result<&[f64], TtcomputeErr> {
        self.groups
            .get(level)
            .map(Vec::as_slice)
            .ok_or_else(|| DataLoadErr::MissingLevel(level.to_string()).into())
    }

    pub fn pair(&self, level_one: &str, level_two: &str) -> Result<(&[f64], &[f64]), TtcomputeErr> {
        Ok((self.sample(level_one)?, self.sample(level_two)?))
    }

    /// The first two levels in sorted order
    pub fn default_pair(&self) -> Result<(&str, &str), TtcomputeErr> {
        match self.levels().as_slice() {
            [one, two, ..] => Ok((*one, *two)),
            levels => Err(DataLoadErr::TooFewLevels(levels.len()).into()),
        }
    }
}

fn compare_levels(a: &str, b: &str, numeric: bool) -> Ordering {
    if numeric {
        if let (Ok(a_num), Ok(b_num)) = (a.parse::<f64>(), b.parse::<f64>()) {
            return a_num.total_cmp(&b_num).then_with(|| a.cmp(b));
        }
    }
    a.cmp(b)
}
