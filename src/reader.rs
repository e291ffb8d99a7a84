use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    num::ParseFloatError,
    path::{Path, PathBuf},
};

use log::{debug, warn};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReadError {
    #[error("unable to open {}: {source}", .path.display())]
    Open { path: PathBuf, source: io::Error },

    #[error("line {line}: invalid number {text:?}: {source}")]
    Parse {
        line: usize,
        text: String,
        source: ParseFloatError,
    },

    #[error("line {line}: number {text:?} is out of range")]
    Range { line: usize, text: String },

    #[error("line {line}: {source}")]
    Read { line: usize, source: io::Error },
}

/// Reads one number per line from the file at `path`, in file order.
///
/// Parsing stops at the first line that is not a number, blank lines included.
pub fn read_numbers<P: AsRef<Path>>(path: P) -> Result<Vec<f64>, ReadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| ReadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("reading numbers from {}", path.display());

    let numbers = parse_numbers(BufReader::new(file))?;
    debug!("read {} numbers from {}", numbers.len(), path.display());
    Ok(numbers)
}

/// Lines end at `\n`. One `\r` before it, or at end of input, is dropped too.
pub fn parse_numbers<R: BufRead>(mut reader: R) -> Result<Vec<f64>, ReadError> {
    let mut numbers = Vec::new();
    let mut buf = String::new();
    let mut line = 0;
    loop {
        buf.clear();
        line += 1;
        let read = reader
            .read_line(&mut buf)
            .map_err(|source| ReadError::Read { line, source })?;
        if read == 0 {
            break;
        }
        let text = trim_line_end(&buf);
        numbers.push(parse_number(line, text)?);
    }
    Ok(numbers)
}

fn trim_line_end(buf: &str) -> &str {
    let text = buf.strip_suffix('\n').unwrap_or(buf);
    text.strip_suffix('\r').unwrap_or(text)
}

fn parse_number(line: usize, text: &str) -> Result<f64, ReadError> {
    let number = text.parse::<f64>().map_err(|source| {
        warn!("line {} is not a number: {:?}", line, text);
        ReadError::Parse {
            line,
            text: text.to_owned(),
            source,
        }
    })?;
    // overflowing literals parse to infinity
    if number.is_infinite() && !is_infinity_literal(text) {
        warn!("line {} is out of range: {:?}", line, text);
        return Err(ReadError::Range {
            line,
            text: text.to_owned(),
        });
    }
    Ok(number)
}

fn is_infinity_literal(text: &str) -> bool {
    let unsigned = text.trim_start_matches(|c: char| c == '+' || c == '-');
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}
