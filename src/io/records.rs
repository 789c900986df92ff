//! Loading records and queries from delimited text.
//!
//! Records file: one header line, then `id,name,tags` per line. Fields may be double-quoted so
//! that the tag list can hold commas (`7,"Doe, J.","ST, CF"`); `""` inside quotes is a literal
//! quote. Queries file: no header, the first field of each line is an id.

use std::fs;
use std::path::Path;

use log::warn;

use crate::error::{Error, Result};
use crate::record::Record;

/// Parses a records file body, header line included.
pub fn parse_records(input: &str) -> Result<Vec<Record>> {
    let mut records = Vec::new();
    for (idx, line) in input.lines().enumerate().skip(1) {
        let line_no = idx + 1;
        if line.trim().is_empty() {
            warn!("skipping blank record line {}", line_no);
            continue;
        }
        records.push(parse_record(line, line_no)?);
    }
    Ok(records)
}

fn parse_record(line: &str, line_no: usize) -> Result<Record> {
    let fields = split_fields(line);
    if fields.len() < 2 {
        return Err(Error::MalformedRecord {
            line: line_no,
            reason: format!("expected at least 2 fields, found {}", fields.len()),
        });
    }

    let id = fields[0]
        .trim()
        .parse::<u64>()
        .map_err(|e| Error::MalformedRecord {
            line: line_no,
            reason: format!("invalid id {:?}: {}", fields[0], e),
        })?;

    let tags = fields
        .get(2)
        .map(|raw| {
            raw.split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(String::from)
                .collect()
        })
        .unwrap_or_default();

    Ok(Record {
        id,
        name: fields[1].clone(),
        tags,
    })
}

/// Parses a queries file body. There is no header.
pub fn parse_queries(input: &str) -> Result<Vec<u64>> {
    let mut queries = Vec::new();
    for (idx, line) in input.lines().enumerate() {
        let line_no = idx + 1;
        if line.trim().is_empty() {
            warn!("skipping blank query line {}", line_no);
            continue;
        }
        let first = line.split(',').next().unwrap_or_default().trim();
        let id = first.parse::<u64>().map_err(|e| Error::MalformedQuery {
            line: line_no,
            reason: format!("invalid id {:?}: {}", first, e),
        })?;
        queries.push(id);
    }
    Ok(queries)
}

pub fn read_records(path: impl AsRef<Path>) -> Result<Vec<Record>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    parse_records(&text)
}

pub fn read_queries(path: impl AsRef<Path>) -> Result<Vec<u64>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    parse_queries(&text)
}

/// Splits one line on commas that are not inside double quotes.
fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    fields.push(current);
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_fields_quotes() {
        assert_eq!(split_fields("1,Ann,GK"), vec!["1", "Ann", "GK"]);
        assert_eq!(
            split_fields(r#"2,"Doe, J.","ST, CF""#),
            vec!["2", "Doe, J.", "ST, CF"]
        );
        assert_eq!(split_fields(r#"3,"say ""hi""",x"#), vec!["3", r#"say "hi""#, "x"]);
        assert_eq!(split_fields("4,,"), vec!["4", "", ""]);
    }

    #[test]
    fn test_parse_records() {
        let input = "sofifa_id,name,player_positions\n\
                     158023,Lionel Messi,\"RW, ST, CF\"\n\
                     \n\
                     20801,Cristiano Ronaldo,ST\n\
                     190871,Neymar Jr\n";
        let records = parse_records(input).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(
            records[0],
            Record::new(
                158023,
                "Lionel Messi",
                vec!["RW".into(), "ST".into(), "CF".into()]
            )
        );
        assert_eq!(records[1].tags, vec!["ST".to_string()]);
        assert!(records[2].tags.is_empty());
    }

    #[test]
    fn test_header_only_yields_no_records() {
        assert!(parse_records("id,name,tags\n").unwrap().is_empty());
        assert!(parse_records("").unwrap().is_empty());
    }

    #[test]
    fn test_malformed_records() {
        let err = parse_records("h\n1,A,x\nabc,B,y\n").unwrap_err();
        assert!(matches!(err, Error::MalformedRecord { line: 3, .. }));

        let err = parse_records("h\n-5,A,x\n").unwrap_err();
        assert!(matches!(err, Error::MalformedRecord { line: 2, .. }));

        let err = parse_records("h\n42\n").unwrap_err();
        assert!(matches!(err, Error::MalformedRecord { line: 2, .. }));
    }

    #[test]
    fn test_parse_queries() {
        let queries = parse_queries("158023\n 20801 \n\n999,ignored\n").unwrap();
        assert_eq!(queries, vec![158023, 20801, 999]);

        let err = parse_queries("1\nx\n").unwrap_err();
        assert!(matches!(err, Error::MalformedQuery { line: 2, .. }));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = read_queries("/nonexistent/chainbench/queries.csv").unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
