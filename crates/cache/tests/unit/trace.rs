//! Trace-format parsing tests.

use std::io::{Cursor, Write};

use waysim::trace::{TraceError, parse_trace, read_trace};

#[test]
fn parses_bare_and_prefixed_hex() {
    let input = "10\n0x20\n0XdeadBEEF\n";
    let addrs = parse_trace(Cursor::new(input)).unwrap();
    assert_eq!(addrs, vec![0x10, 0x20, 0xDEAD_BEEF]);
}

#[test]
fn skips_blank_lines_and_comments() {
    let input = "# trace header\n\n10 # first access\n   \n20\n# trailing note";
    let addrs = parse_trace(Cursor::new(input)).unwrap();
    assert_eq!(addrs, vec![0x10, 0x20]);
}

#[test]
fn accepts_a_trace_without_a_final_newline() {
    let addrs = parse_trace(Cursor::new("10\n20")).unwrap();
    assert_eq!(addrs, vec![0x10, 0x20]);
}

#[test]
fn empty_trace_yields_no_addresses() {
    let addrs = parse_trace(Cursor::new("")).unwrap();
    assert!(addrs.is_empty());
}

#[test]
fn reports_the_offending_line_number() {
    let input = "10\n20\nnot-hex\n30\n";
    let err = parse_trace(Cursor::new(input)).unwrap_err();
    match err {
        TraceError::Parse { line, text } => {
            assert_eq!(line, 3);
            assert_eq!(text, "not-hex");
        }
        other => panic!("expected a parse error, got {:?}", other),
    }
}

#[test]
fn rejects_a_bare_prefix() {
    let err = parse_trace(Cursor::new("0x\n")).unwrap_err();
    assert!(matches!(err, TraceError::Parse { line: 1, .. }));
}

#[test]
fn missing_file_is_an_io_error() {
    let err = read_trace("/nonexistent/waysim.trace").unwrap_err();
    assert!(matches!(err, TraceError::Io(_)));
    assert!(err.to_string().contains("trace i/o error"));
}

#[test]
fn reads_a_trace_from_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "0x100").unwrap();
    writeln!(file, "0x200").unwrap();
    file.flush().unwrap();

    let addrs = read_trace(file.path()).unwrap();
    assert_eq!(addrs, vec![0x100, 0x200]);
}
