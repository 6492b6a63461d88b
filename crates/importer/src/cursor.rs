//! Line cursor that hands out one logical field at a time.

use crate::ImportError;

/// Forward-only cursor over the lines of a mission file.
///
/// Line numbers reported in errors are 1-based.
#[derive(Debug)]
pub struct LineCursor<'a> {
    lines: Vec<&'a str>,
    pos: usize,
}

impl<'a> LineCursor<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines().collect(),
            pos: 0,
        }
    }

    /// Line number of the next line to be consumed.
    pub fn line_number(&self) -> usize {
        self.pos + 1
    }

    pub fn is_exhausted(&self) -> bool {
        self.pos >= self.lines.len()
    }

    /// Skip whitespace-only lines. Only called between records.
    pub fn skip_blank(&mut self) {
        while self
            .lines
            .get(self.pos)
            .is_some_and(|line| line.trim().is_empty())
        {
            self.pos += 1;
        }
    }

    fn next_line(&mut self, field: &'static str) -> Result<(usize, &'a str), ImportError> {
        let line = self.line_number();
        let text = self
            .lines
            .get(self.pos)
            .copied()
            .ok_or(ImportError::UnexpectedEof { line, field })?;
        self.pos += 1;
        Ok((line, text))
    }

    /// Consume a free-text field verbatim.
    pub fn text(&mut self, field: &'static str) -> Result<String, ImportError> {
        self.next_line(field).map(|(_, text)| text.to_string())
    }

    /// Consume a line holding a single integer.
    pub fn integer(&mut self, field: &'static str) -> Result<i64, ImportError> {
        let (line, text) = self.next_line(field)?;
        parse_integer(line, field, text.trim())
    }

    /// Consume a count. Negative values count as zero.
    pub fn count(&mut self, field: &'static str) -> Result<usize, ImportError> {
        let value = self.integer(field)?;
        Ok(usize::try_from(value).unwrap_or(0))
    }

    /// Consume a line holding exactly `N` whitespace-separated integers.
    pub fn integers<const N: usize>(
        &mut self,
        field: &'static str,
    ) -> Result<[i64; N], ImportError> {
        let (line, text) = self.next_line(field)?;
        let values = text
            .split_whitespace()
            .map(|token| parse_integer(line, field, token))
            .collect::<Result<Vec<_>, _>>()?;
        let found = values.len();
        values.try_into().map_err(|_| ImportError::FieldCount {
            line,
            field,
            expected: N,
            found,
        })
    }
}

fn parse_integer(line: usize, field: &'static str, token: &str) -> Result<i64, ImportError> {
    token
        .parse::<i64>()
        .map_err(|_| ImportError::InvalidInteger {
            line,
            field,
            value: token.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_fields_in_sequence() {
        let mut cursor = LineCursor::new("Title\n 42 \n3 -4\n");
        assert_eq!(cursor.text("name").unwrap(), "Title");
        assert_eq!(cursor.integer("slots").unwrap(), 42);
        assert_eq!(cursor.integers::<2>("position").unwrap(), [3, -4]);
        assert!(cursor.is_exhausted());
    }

    #[test]
    fn skip_blank_stops_at_content() {
        let mut cursor = LineCursor::new("\n   \n\t\nname\n");
        cursor.skip_blank();
        assert_eq!(cursor.line_number(), 4);
        assert_eq!(cursor.text("name").unwrap(), "name");
    }

    #[test]
    fn text_fields_keep_surrounding_whitespace() {
        let mut cursor = LineCursor::new("  padded  \r\nnext");
        assert_eq!(cursor.text("name").unwrap(), "  padded  ");
        assert_eq!(cursor.text("type").unwrap(), "next");
    }

    #[test]
    fn wrong_integer_count_is_reported() {
        let mut cursor = LineCursor::new("1 2 3 4");
        let err = cursor.integers::<5>("attributes").unwrap_err();
        assert!(matches!(
            err,
            ImportError::FieldCount {
                line: 1,
                expected: 5,
                found: 4,
                ..
            }
        ));
    }

    #[test]
    fn negative_count_reads_as_zero() {
        let mut cursor = LineCursor::new("-1\n3\nx");
        assert_eq!(cursor.count("requirement_count").unwrap(), 0);
        assert_eq!(cursor.count("requirement_count").unwrap(), 3);
        assert!(matches!(
            cursor.count("requirement_count"),
            Err(ImportError::InvalidInteger { line: 3, .. })
        ));
    }

    #[test]
    fn missing_line_reports_eof() {
        let mut cursor = LineCursor::new("only");
        cursor.text("name").unwrap();
        assert!(matches!(
            cursor.text("type"),
            Err(ImportError::UnexpectedEof {
                line: 2,
                field: "type"
            })
        ));
    }
}
