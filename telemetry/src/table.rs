use crate::error::TelemetryError;
use log::debug;
use nalgebra::DMatrix;
use ordered_float::NotNan;
use serde::Deserialize;
use std::{
    fs::File,
    io::{BufRead, BufReader, Read},
    path::Path,
};

/// How the fields of a row are separated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Delimiter {
    Comma,
    /// Any run of spaces or tabs. This is what the bot's own logger writes,
    /// even for files named `.csv`.
    Whitespace,
}

/// A table of recorded samples. Rows are samples; columns are positional
/// fields whose meaning is only known to whoever recorded them.
#[derive(Debug, Clone, PartialEq)]
pub struct TelemetryTable {
    names: Vec<String>,
    data: DMatrix<f64>,
}

impl TelemetryTable {
    pub fn new(names: Vec<String>, data: DMatrix<f64>) -> Self {
        Self { names, data }
    }

    pub fn load(
        path: impl AsRef<Path>,
        delimiter: Delimiter,
        skip_header: usize,
    ) -> Result<Self, TelemetryError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| TelemetryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let table =
            Self::from_reader(file, delimiter, skip_header).map_err(|e| e.in_file(path))?;
        debug!(
            "loaded {} rows x {} columns from {}",
            table.rows(),
            table.columns(),
            path.display(),
        );
        Ok(table)
    }

    /// Parses a table. The first `skip_header` lines are skipped, blank or
    /// not, and the first of those (if any) supplies the column names. Blank
    /// lines after the header are ignored.
    pub fn from_reader(
        reader: impl Read,
        delimiter: Delimiter,
        skip_header: usize,
    ) -> Result<Self, TelemetryError> {
        let lines = match delimiter {
            Delimiter::Comma => comma_lines(reader, skip_header)?,
            Delimiter::Whitespace => whitespace_lines(reader, skip_header)?,
        };
        let Lines { names, rows } = lines;

        let width = match rows.first() {
            Some((_, fields)) => fields.len(),
            None => names.len(),
        };

        // A header that disagrees with the data is a comment, not names.
        let names = if names.len() == width { names } else { Vec::new() };

        let mut flat: Vec<f64> = Vec::with_capacity(rows.len() * width);
        for (line, fields) in &rows {
            if fields.len() != width {
                return Err(TelemetryError::RaggedRow {
                    line: *line,
                    expected: width,
                    found: fields.len(),
                });
            }
            for (column, field) in fields.iter().enumerate() {
                let value = field.parse().map_err(|_| TelemetryError::ParseFloat {
                    line: *line,
                    column,
                    value: field.clone(),
                })?;
                flat.push(value);
            }
        }

        let data = DMatrix::from_row_slice(rows.len(), width, &flat);
        Ok(Self { names, data })
    }

    pub fn rows(&self) -> usize {
        self.data.nrows()
    }

    pub fn columns(&self) -> usize {
        self.data.ncols()
    }

    pub fn is_empty(&self) -> bool {
        self.rows() == 0
    }

    /// Column names from the header line. Empty if the file had no header,
    /// otherwise one per column.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn name(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    pub fn data(&self) -> &DMatrix<f64> {
        &self.data
    }

    pub fn get(&self, row: usize, column: usize) -> Option<f64> {
        self.data.get((row, column)).copied()
    }

    pub fn column(&self, index: usize) -> Result<Vec<f64>, TelemetryError> {
        self.check_column(index)?;
        Ok(self.data.column(index).iter().copied().collect())
    }

    /// Returns a table holding only `indices`, in that order. Indices may
    /// repeat.
    pub fn select_columns(&self, indices: &[usize]) -> Result<Self, TelemetryError> {
        for &index in indices {
            self.check_column(index)?;
        }
        let data = DMatrix::from_fn(self.rows(), indices.len(), |r, c| {
            self.data[(r, indices[c])]
        });
        let names = if self.names.len() == self.columns() {
            indices.iter().map(|&i| self.names[i].clone()).collect()
        } else {
            Vec::new()
        };
        Ok(Self { names, data })
    }

    /// Drops `leading` rows from the start and `trailing` from the end, which
    /// is where runs spend their time settling and shutting down. Trimming
    /// everything leaves an empty table, not an error.
    pub fn trim(&self, leading: usize, trailing: usize) -> Self {
        let keep = self.rows().saturating_sub(leading.saturating_add(trailing));
        let data = if keep == 0 {
            DMatrix::zeros(0, self.columns())
        } else {
            self.data.rows(leading, keep).into_owned()
        };
        Self {
            names: self.names.clone(),
            data,
        }
    }

    /// Scales each column so its largest magnitude is 1. Columns that are all
    /// zero are left alone.
    pub fn normalize_columns(&mut self) -> Result<(), TelemetryError> {
        for c in 0..self.columns() {
            let magnitudes = self
                .data
                .column(c)
                .iter()
                .map(|&x| NotNan::new(x.abs()))
                .collect::<Result<Vec<_>, _>>()
                .map_err(|_| TelemetryError::NotANumber)?;
            let max = magnitudes.into_iter().max().map_or(0.0, NotNan::into_inner);
            if max > 0.0 {
                for x in self.data.column_mut(c).iter_mut() {
                    *x /= max;
                }
            }
        }
        Ok(())
    }

    fn check_column(&self, index: usize) -> Result<(), TelemetryError> {
        if index < self.columns() {
            Ok(())
        } else {
            Err(TelemetryError::ColumnOutOfRange {
                index,
                columns: self.columns(),
            })
        }
    }
}

/// Loads a table, keeps only `columns` (in the order given), and trims
/// `trim.0` leading and `trim.1` trailing rows.
pub fn load_trimmed(
    path: impl AsRef<Path>,
    delimiter: Delimiter,
    skip_header: usize,
    columns: &[usize],
    trim: (usize, usize),
) -> Result<TelemetryTable, TelemetryError> {
    let table = TelemetryTable::load(path, delimiter, skip_header)?;
    let (leading, trailing) = trim;
    Ok(table.select_columns(columns)?.trim(leading, trailing))
}

struct Lines {
    names: Vec<String>,
    /// (1-based line number, fields)
    rows: Vec<(usize, Vec<String>)>,
}

fn whitespace_lines(reader: impl Read, skip_header: usize) -> Result<Lines, TelemetryError> {
    let mut names = Vec::new();
    let mut rows = Vec::new();
    for (i, line) in BufReader::new(reader).lines().enumerate() {
        let line = line?;
        let fields: Vec<String> = line.split_whitespace().map(str::to_string).collect();
        if i < skip_header {
            if i == 0 {
                names = fields;
            }
            continue;
        }
        if fields.is_empty() {
            continue;
        }
        rows.push((i + 1, fields));
    }
    Ok(Lines { names, rows })
}

fn comma_lines(reader: impl Read, skip_header: usize) -> Result<Lines, TelemetryError> {
    // Header lines are read by hand; the csv reader would skip blank ones and
    // count records instead of lines.
    let mut reader = BufReader::new(reader);
    let mut names = Vec::new();
    let mut header = String::new();
    for i in 0..skip_header {
        header.clear();
        if reader.read_line(&mut header)? == 0 {
            break;
        }
        if i == 0 && !header.trim().is_empty() {
            names = header.split(',').map(|f| f.trim().to_string()).collect();
        }
    }

    let mut r = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut rows = Vec::new();
    for record in r.records() {
        let record = record?;
        // A line of nothing but whitespace trims down to one empty field.
        if record.len() == 1 && record[0].is_empty() {
            continue;
        }
        let line = skip_header + record.position().map_or(rows.len() + 1, |p| p.line() as usize);
        rows.push((line, record.iter().map(str::to_string).collect()));
    }
    Ok(Lines { names, rows })
}

#[cfg(test)]
mod tests {
    use crate::{
        error::TelemetryError,
        table::{load_trimmed, Delimiter, TelemetryTable},
    };
    use std::{env, fs, process};

    const ABCD: &str = "a b c d
1 2 3 4
5 6 7 8
9 10 11 12
13 14 15 16
17 18 19 20
";

    fn abcd() -> TelemetryTable {
        TelemetryTable::from_reader(ABCD.as_bytes(), Delimiter::Whitespace, 1).unwrap()
    }

    #[test]
    fn parses_header_and_rows() {
        let table = abcd();
        assert_eq!(table.rows(), 5);
        assert_eq!(table.columns(), 4);
        assert_eq!(table.names(), &["a", "b", "c", "d"]);
        assert_eq!(table.get(2, 1), Some(10.0));
    }

    #[test]
    fn selects_b_and_d() {
        let table = abcd().select_columns(&[1, 3]).unwrap().trim(0, 0);
        assert_eq!(table.rows(), 5);
        assert_eq!(table.columns(), 2);
        assert_eq!(table.names(), &["b", "d"]);
        assert_eq!(table.column(0).unwrap(), vec![2.0, 6.0, 10.0, 14.0, 18.0]);
        assert_eq!(table.column(1).unwrap(), vec![4.0, 8.0, 12.0, 16.0, 20.0]);
    }

    #[test]
    fn selection_follows_requested_order() {
        let table = abcd().select_columns(&[3, 0, 3]).unwrap();
        assert_eq!(table.columns(), 3);
        assert_eq!(table.names(), &["d", "a", "d"]);
        assert_eq!(table.column(0).unwrap(), table.column(2).unwrap());
        assert_eq!(table.get(0, 1), Some(1.0));
    }

    #[test]
    fn column_out_of_range() {
        match abcd().select_columns(&[1, 4]) {
            Err(TelemetryError::ColumnOutOfRange { index, columns }) => {
                assert_eq!(index, 4);
                assert_eq!(columns, 4);
            }
            other => panic!("{:?}", other),
        }
    }

    #[test]
    fn trim_counts() {
        let table = abcd();
        for &(leading, trailing, expected) in &[
            (0, 0, 5),
            (1, 0, 4),
            (0, 2, 3),
            (2, 2, 1),
            (3, 2, 0),
            (20, 5, 0),
            (usize::MAX, 1, 0),
        ] {
            let trimmed = table.trim(leading, trailing);
            assert_eq!(trimmed.rows(), expected, "{} {}", leading, trailing);
            assert_eq!(trimmed.columns(), 4);
        }
        assert_eq!(table.trim(1, 1).column(0).unwrap(), vec![5.0, 9.0, 13.0]);
    }

    #[test]
    fn ragged_rows_fail() {
        let input = "x y\n1 2\n3\n";
        match TelemetryTable::from_reader(input.as_bytes(), Delimiter::Whitespace, 1) {
            Err(TelemetryError::RaggedRow {
                line,
                expected,
                found,
            }) => {
                assert_eq!(line, 3);
                assert_eq!(expected, 2);
                assert_eq!(found, 1);
            }
            other => panic!("{:?}", other),
        }
    }

    #[test]
    fn garbage_fails() {
        let input = "x,y\n1,2\n3,four\n";
        match TelemetryTable::from_reader(input.as_bytes(), Delimiter::Comma, 1) {
            Err(TelemetryError::ParseFloat { line, column, value }) => {
                assert_eq!(line, 3);
                assert_eq!(column, 1);
                assert_eq!(value, "four");
            }
            other => panic!("{:?}", other),
        }
    }

    #[test]
    fn comma_and_tabs() {
        let comma = "t, v\n0.0, 1.5\n0.5, 2.5\n";
        let table = TelemetryTable::from_reader(comma.as_bytes(), Delimiter::Comma, 1).unwrap();
        assert_eq!(table.names(), &["t", "v"]);
        assert_eq!(table.column(1).unwrap(), vec![1.5, 2.5]);

        let tabs = "t\tv\n0.0\t1.5\n\n0.5\t  2.5\n";
        let table = TelemetryTable::from_reader(tabs.as_bytes(), Delimiter::Whitespace, 1).unwrap();
        assert_eq!(table.rows(), 2);
        assert_eq!(table.column(1).unwrap(), vec![1.5, 2.5]);
    }

    #[test]
    fn header_only() {
        let table = TelemetryTable::from_reader("a b c\n".as_bytes(), Delimiter::Whitespace, 1)
            .unwrap();
        assert_eq!(table.rows(), 0);
        assert_eq!(table.columns(), 3);
        let selected = table.select_columns(&[2, 0]).unwrap();
        assert_eq!(selected.columns(), 2);
        assert!(selected.is_empty());
    }

    #[test]
    fn no_header() {
        let table =
            TelemetryTable::from_reader("1 2\n3 4\n".as_bytes(), Delimiter::Whitespace, 0).unwrap();
        assert_eq!(table.rows(), 2);
        assert!(table.names().is_empty());
        assert!(table.select_columns(&[1]).unwrap().names().is_empty());
    }

    #[test]
    fn normalize() {
        let input = "a b c\n-4 0 1\n2 0 0.5\n";
        let mut table =
            TelemetryTable::from_reader(input.as_bytes(), Delimiter::Whitespace, 1).unwrap();
        table.normalize_columns().unwrap();
        assert_eq!(table.column(0).unwrap(), vec![-1.0, 0.5]);
        assert_eq!(table.column(1).unwrap(), vec![0.0, 0.0]);
        assert_eq!(table.column(2).unwrap(), vec![1.0, 0.5]);
    }

    #[test]
    fn normalize_rejects_nan() {
        let input = "a\nnan\n1\n";
        let mut table =
            TelemetryTable::from_reader(input.as_bytes(), Delimiter::Whitespace, 1).unwrap();
        match table.normalize_columns() {
            Err(TelemetryError::NotANumber) => {}
            other => panic!("{:?}", other),
        }
    }

    #[test]
    fn header_lines_count_the_same_in_both_formats() {
        let comma = "t,v\n\n1,2\n\n3,4\n";
        let tabs = "t\tv\n\n1\t2\n\n3\t4\n";
        for &(input, delimiter) in &[(comma, Delimiter::Comma), (tabs, Delimiter::Whitespace)] {
            let table = TelemetryTable::from_reader(input.as_bytes(), delimiter, 2).unwrap();
            assert_eq!(table.names(), &["t", "v"], "{:?}", delimiter);
            assert_eq!(table.column(0).unwrap(), vec![1.0, 3.0], "{:?}", delimiter);

            let table = TelemetryTable::from_reader(input.as_bytes(), delimiter, 3).unwrap();
            assert_eq!(table.column(0).unwrap(), vec![3.0], "{:?}", delimiter);
        }
    }

    #[test]
    fn empty_fields_are_not_blank_lines() {
        let input = "t,v\n1,2\n,\n";
        match TelemetryTable::from_reader(input.as_bytes(), Delimiter::Comma, 1) {
            Err(TelemetryError::ParseFloat { line, column, value }) => {
                assert_eq!(line, 3);
                assert_eq!(column, 0);
                assert_eq!(value, "");
            }
            other => panic!("{:?}", other),
        }
    }

    #[test]
    fn unreadable_file_names_the_path() {
        // Opens fine on unix, then fails to read.
        let dir = env::temp_dir();
        let err = TelemetryTable::load(&dir, Delimiter::Whitespace, 1).unwrap_err();
        match &err {
            TelemetryError::Io { path, .. } => assert_eq!(path, &dir),
            other => panic!("{:?}", other),
        }

        let path = dir.join(format!("telemetry-not-utf8-{}.csv", process::id()));
        fs::write(&path, b"\xff\xfe\n1,2\n").unwrap();
        for &delimiter in &[Delimiter::Whitespace, Delimiter::Comma] {
            let err = load_trimmed(&path, delimiter, 1, &[0], (0, 0)).unwrap_err();
            let message = err.to_string();
            assert!(message.contains("telemetry-not-utf8-"), "{:?}: {}", delimiter, message);
        }
        fs::remove_file(&path).ok();
    }

    #[test]
    fn bad_rows_name_the_file() {
        let path = env::temp_dir().join(format!("telemetry-ragged-{}.txt", process::id()));
        fs::write(&path, "a b\n1 2\n3\n").unwrap();
        let err = TelemetryTable::load(&path, Delimiter::Whitespace, 1).unwrap_err();
        fs::remove_file(&path).ok();
        match &err {
            TelemetryError::InFile { path: p, source } => {
                assert_eq!(p, &path);
                match **source {
                    TelemetryError::RaggedRow { line: 3, .. } => {}
                    ref other => panic!("{:?}", other),
                }
            }
            other => panic!("{:?}", other),
        }
    }

    #[test]
    fn missing_file_names_the_path() {
        let path = "definitely/not/here/turn.drift.txt";
        let err = load_trimmed(path, Delimiter::Whitespace, 1, &[0], (0, 0)).unwrap_err();
        match &err {
            TelemetryError::Io { path: p, .. } => assert!(p.ends_with("turn.drift.txt")),
            other => panic!("{:?}", other),
        }
        assert!(err.to_string().contains("turn.drift.txt"));
    }
}
