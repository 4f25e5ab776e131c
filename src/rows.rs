use std::io::BufRead;

use csv::{ReaderBuilder, StringRecord};

use crate::error::ReadError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Quoting {
    FieldStart,
    Unquoted,
    Quoted,
    /// Saw a `"` inside a quoted field; next byte decides escape vs. close.
    QuoteInQuoted,
    /// Saw `"\r` and expect the `\n` of a CRLF terminator.
    CarriageReturn,
}

/// Frames headerless CSV rows from a byte stream with strict quoting.
///
/// A row is one physical line, or several when a quoted field spans line
/// breaks. A `"` inside an unquoted field, anything but a separator or line
/// end after a closing quote, and a quote left open at end of stream are read
/// errors; the offending row is consumed so the next call moves on.
pub struct RowReader<R> {
    reader: R,
    fields: ReaderBuilder,
    buf: Vec<u8>,
    lines_read: u64,
    row_line: u64,
}

impl<R: BufRead> RowReader<R> {
    pub fn new(reader: R) -> Self {
        let mut fields = ReaderBuilder::new();
        fields.has_headers(false).flexible(true);

        Self {
            reader,
            fields,
            buf: Vec::new(),
            lines_read: 0,
            row_line: 0,
        }
    }

    /// 1-based line on which the last row (or failed row) started.
    pub fn line(&self) -> u64 {
        self.row_line
    }

    /// Reads the next row into `record`. `Ok(false)` at end of stream.
    pub fn read_record(&mut self, record: &mut StringRecord) -> Result<bool, ReadError> {
        if !self.read_row()? {
            return Ok(false);
        }

        let mut row = self.fields.from_reader(self.buf.as_slice());
        if !row.read_record(record)? {
            record.clear();
        }
        Ok(true)
    }

    fn read_row(&mut self) -> Result<bool, ReadError> {
        // Blank lines are not rows
        loop {
            self.buf.clear();
            self.row_line = self.lines_read + 1;
            if self.reader.read_until(b'\n', &mut self.buf)? == 0 {
                return Ok(false);
            }
            self.lines_read += 1;
            if !is_blank(&self.buf) {
                break;
            }
        }

        let mut state = scan_line(Quoting::FieldStart, &self.buf, self.lines_read)?;
        while state == Quoting::Quoted {
            let line_start = self.buf.len();
            if self.reader.read_until(b'\n', &mut self.buf)? == 0 {
                return Err(ReadError::UnterminatedQuote {
                    line: self.row_line,
                });
            }
            self.lines_read += 1;
            state = scan_line(state, &self.buf[line_start..], self.lines_read)?;
        }

        Ok(true)
    }
}

fn is_blank(line: &[u8]) -> bool {
    matches!(line, b"\n" | b"\r\n")
}

/// Runs the quoting state machine over one physical line, continuing from
/// `state`, and returns the state at the end of the line.
fn scan_line(mut state: Quoting, bytes: &[u8], line: u64) -> Result<Quoting, ReadError> {
    for (i, &byte) in bytes.iter().enumerate() {
        let column = i + 1;
        state = match state {
            Quoting::FieldStart | Quoting::Unquoted => match byte {
                b',' | b'\n' => Quoting::FieldStart,
                b'"' if state == Quoting::FieldStart => Quoting::Quoted,
                b'"' => return Err(ReadError::BareQuote { line, column }),
                _ => Quoting::Unquoted,
            },
            Quoting::Quoted => match byte {
                b'"' => Quoting::QuoteInQuoted,
                _ => Quoting::Quoted,
            },
            Quoting::QuoteInQuoted => match byte {
                b'"' => Quoting::Quoted,
                b',' | b'\n' => Quoting::FieldStart,
                b'\r' => Quoting::CarriageReturn,
                _ => return Err(ReadError::Quote { line, column }),
            },
            Quoting::CarriageReturn => match byte {
                b'\n' => Quoting::FieldStart,
                _ => return Err(ReadError::Quote { line, column }),
            },
        };
    }
    Ok(state)
}
