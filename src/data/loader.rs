use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use log::debug;

use crate::{
    config::LoaderConfig,
    error::{Result, UtilErr},
};

/// The fields of a single line of delimited text.
pub type Record = Vec<String>;

/// Reads delimited text line by line, splitting every line on the
/// configured delimiter.
///
/// No quoting or escaping is performed, every field is kept as is,
/// including empty ones. Trailing empty fields are kept too (`"a,,b,"` has
/// four fields), unlike splitters that drop them, so every record of a
/// rectangular file keeps its width.
///
/// # Errors
/// Returns `UtilErr::Io` if the reader fails.
pub fn read_csv<R: BufRead>(reader: R, config: &LoaderConfig) -> Result<Vec<Record>> {
    let mut records = Vec::new();

    for (i, line) in reader.lines().enumerate() {
        if let Some(record) = split_line(i, &line?, config) {
            records.push(record);
        }
    }

    Ok(records)
}

/// Same as [`read_csv`] over text already in memory, e.g. a resource
/// embedded with `include_str!`.
pub fn parse_csv(text: &str, config: &LoaderConfig) -> Vec<Record> {
    text.lines()
        .enumerate()
        .filter_map(|(i, line)| split_line(i, line, config))
        .collect()
}

/// Splits the `i`-th line, or returns `None` if the config skips it.
fn split_line(i: usize, line: &str, config: &LoaderConfig) -> Option<Record> {
    if i == 0 && config.skip_header {
        return None;
    }

    if config.skip_blank_lines && line.trim().is_empty() {
        return None;
    }

    Some(line.split(config.delimiter).map(str::to_owned).collect())
}

/// Opens the file at `path` and reads it with [`read_csv`].
///
/// # Errors
/// Returns `UtilErr::Resource` if the file can't be opened or read.
pub fn load_csv<P: AsRef<Path>>(path: P, config: &LoaderConfig) -> Result<Vec<Record>> {
    let path = path.as_ref();
    let resource_err = |source| UtilErr::Resource {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(resource_err)?;
    let records = read_csv(BufReader::new(file), config).map_err(|e| match e {
        UtilErr::Io(source) => resource_err(source),
        other => other,
    })?;

    debug!("loaded {} record(s) from {}", records.len(), path.display());
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(fields: &[&str]) -> Record {
        fields.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn splits_lines_and_fields() {
        let records = parse_csv("a,b,c\n1,2,3", &LoaderConfig::default());

        assert_eq!(
            records,
            vec![strings(&["a", "b", "c"]), strings(&["1", "2", "3"])]
        );
    }

    #[test]
    fn handles_crlf_and_trailing_newline() {
        let records = parse_csv("a,b\r\n1,2\r\n", &LoaderConfig::default());

        assert_eq!(records, vec![strings(&["a", "b"]), strings(&["1", "2"])]);
    }

    #[test]
    fn keeps_empty_fields() {
        let records = parse_csv("a,,b,", &LoaderConfig::default());

        assert_eq!(records, vec![strings(&["a", "", "b", ""])]);
    }

    #[test]
    fn blank_lines_are_records_unless_skipped() {
        let text = "1,2\n\n3,4";

        let kept = parse_csv(text, &LoaderConfig::default());
        assert_eq!(kept.len(), 3);
        assert_eq!(kept[1], strings(&[""]));

        let config = LoaderConfig {
            skip_blank_lines: true,
            ..Default::default()
        };
        let skipped = parse_csv(text, &config);
        assert_eq!(skipped, vec![strings(&["1", "2"]), strings(&["3", "4"])]);
    }

    #[test]
    fn header_and_custom_delimiter() {
        let config = LoaderConfig {
            delimiter: ';',
            skip_header: true,
            ..Default::default()
        };
        let records = parse_csv("x;y\n1;2\n3;4", &config);

        assert_eq!(records, vec![strings(&["1", "2"]), strings(&["3", "4"])]);
    }

    #[test]
    fn reader_and_text_agree() {
        let text = "h1;h2\r\n1;2\n\n;3;\n4;5\n";

        for (skip_header, skip_blank_lines) in
            [(false, false), (true, false), (false, true), (true, true)]
        {
            let config = LoaderConfig {
                delimiter: ';',
                skip_header,
                skip_blank_lines,
            };

            let from_reader = read_csv(text.as_bytes(), &config).unwrap();
            assert_eq!(from_reader, parse_csv(text, &config));
        }
    }

    #[test]
    fn empty_text_has_no_records() {
        assert!(parse_csv("", &LoaderConfig::default()).is_empty());
    }

    #[test]
    fn missing_file_is_a_resource_error() {
        let res = load_csv("/definitely/not/here.csv", &LoaderConfig::default());

        match res {
            Err(UtilErr::Resource { path, .. }) => {
                assert_eq!(path, Path::new("/definitely/not/here.csv"))
            }
            other => panic!("expected a resource error, got {other:?}"),
        }
    }
}
