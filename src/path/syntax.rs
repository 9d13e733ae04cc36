use crate::constants::{PATH_COMMANDS, PATH_WHITESPACE};
use crate::errors::{Error, Result};

/// A single lexical item of path data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    Command(char),
    Number(f64),
    EndOfData,
}

/// Forward-only cursor over path data.
///
/// As an `Iterator` this yields each token in turn, finishing with a single
/// `Token::EndOfData`. The parser drives the cursor directly instead, since
/// the meaning of the next characters depends on the command being read
/// (elliptical arc flags are a single digit, not a general number).
pub struct Scanner<'a> {
    data: &'a str,
    index: usize,
    finished: bool,
}

impl<'a> Scanner<'a> {
    pub fn new(data: &'a str) -> Self {
        Self {
            data,
            index: 0,
            finished: false,
        }
    }

    /// Byte offset of the cursor into the original data.
    pub fn offset(&self) -> usize {
        self.index
    }

    fn bytes(&self) -> &'a [u8] {
        self.data.as_bytes()
    }

    fn current(&self) -> Option<u8> {
        self.bytes().get(self.index).copied()
    }

    fn peek(&self, ahead: usize) -> Option<u8> {
        self.bytes().get(self.index + ahead).copied()
    }

    /// The (possibly multi-byte) character at the cursor.
    fn current_char(&self) -> Option<char> {
        self.data.get(self.index..).and_then(|s| s.chars().next())
    }

    fn skip_whitespace(&mut self) {
        while self
            .current()
            .is_some_and(|c| PATH_WHITESPACE.contains(&c))
        {
            self.index += 1;
        }
    }

    /// Skip whitespace, at most one comma, then more whitespace.
    pub fn skip_wsp_comma(&mut self) {
        self.skip_whitespace();
        if self.current() == Some(b',') {
            self.index += 1;
            self.skip_whitespace();
        }
    }

    pub fn at_end(&self) -> bool {
        self.index >= self.data.len()
    }

    pub fn at_command(&self) -> bool {
        self.current()
            .is_some_and(|c| PATH_COMMANDS.as_bytes().contains(&c))
    }

    /// True if the cursor is on a character which could begin a number.
    pub fn at_number(&self) -> bool {
        matches!(self.current(), Some(b'0'..=b'9' | b'-' | b'+' | b'.'))
    }

    /// Consume a command letter at the cursor.
    pub fn read_command(&mut self) -> Result<char> {
        self.skip_wsp_comma();
        match self.current() {
            Some(c) if PATH_COMMANDS.as_bytes().contains(&c) => {
                self.index += 1;
                Ok(c as char)
            }
            _ => Err(self.unrecognized()),
        }
    }

    pub(crate) fn unrecognized(&self) -> Error {
        Error::UnrecognizedCommand {
            offset: self.index,
            found: self.current_char().unwrap_or('\0'),
        }
    }

    /// Length of the run of ASCII digits starting `ahead` bytes past the cursor.
    fn digits_from(&self, ahead: usize) -> usize {
        self.bytes()[(self.index + ahead).min(self.data.len())..]
            .iter()
            .take_while(|c| c.is_ascii_digit())
            .count()
    }

    /// Read a number per the path data grammar:
    /// `[-+]? digits? ('.' digits?)? ([eE] [-+]? digits)?` with at least one
    /// mantissa digit. Leading separators are skipped; nothing is required
    /// after the number, so `1-2` and `0.5.5` are each two numbers.
    pub fn read_number(&mut self) -> Result<f64> {
        self.skip_wsp_comma();
        let start = self.index;
        let mut len = 0;
        if matches!(self.current(), Some(b'-' | b'+')) {
            len += 1;
        }
        let int_digits = self.digits_from(len);
        len += int_digits;
        let mut frac_digits = 0;
        if self.peek(len) == Some(b'.') {
            frac_digits = self.digits_from(len + 1);
            len += 1 + frac_digits;
        }
        if int_digits + frac_digits == 0 {
            return Err(self.number_error());
        }
        if matches!(self.peek(len), Some(b'e' | b'E')) {
            let sign = usize::from(matches!(self.peek(len + 1), Some(b'-' | b'+')));
            let exp_digits = self.digits_from(len + 1 + sign);
            // an 'e' not followed by digits is not part of this number
            if exp_digits > 0 {
                len += 1 + sign + exp_digits;
            }
        }
        let text = &self.data[start..start + len];
        let value: f64 = text
            .parse()
            .map_err(|_| Error::MalformedNumber { offset: start })?;
        if !value.is_finite() {
            return Err(Error::MalformedNumber { offset: start });
        }
        self.index += len;
        Ok(value)
    }

    /// Read an elliptical arc flag: exactly one `0` or `1` digit, which may be
    /// immediately followed by the next parameter (e.g. `10` is two flags).
    pub fn read_flag(&mut self) -> Result<f64> {
        self.skip_wsp_comma();
        let flag = match self.current() {
            Some(b'0') => 0.,
            Some(b'1') => 1.,
            _ => return Err(self.number_error()),
        };
        self.index += 1;
        Ok(flag)
    }

    /// The error for a position where a number was required.
    fn number_error(&self) -> Error {
        Error::MalformedNumber { offset: self.index }
    }

    /// Read the next token, whatever its kind.
    pub fn next_token(&mut self) -> Result<Token> {
        self.skip_wsp_comma();
        if self.at_end() {
            Ok(Token::EndOfData)
        } else if self.at_command() {
            self.read_command().map(Token::Command)
        } else if self.at_number() {
            self.read_number().map(Token::Number)
        } else {
            Err(self.unrecognized())
        }
    }
}

impl Iterator for Scanner<'_> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        // stop after end of data or the first error; the cursor can't recover
        if !matches!(token, Ok(Token::Command(_) | Token::Number(_))) {
            self.finished = true;
        }
        Some(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenize(data: &str) -> Result<Vec<Token>> {
        Scanner::new(data).collect()
    }

    #[test]
    fn test_tokenize() {
        let tokens = tokenize("m0,2 ,  3.4 4.4 ").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Command('m'),
                Token::Number(0.),
                Token::Number(2.),
                Token::Number(3.4),
                Token::Number(4.4),
                Token::EndOfData,
            ]
        );
    }

    #[test]
    fn test_tokenize_empty() {
        assert_eq!(tokenize("").unwrap(), vec![Token::EndOfData]);
        assert_eq!(tokenize(" \t\n").unwrap(), vec![Token::EndOfData]);
    }

    #[test]
    fn test_tokenize_bad() {
        let err = tokenize(" w ").unwrap_err();
        assert!(matches!(
            err,
            Error::UnrecognizedCommand {
                offset: 1,
                found: 'w'
            }
        ));
    }

    #[test]
    fn test_adjacent_numbers() {
        let tokens = tokenize("1-2.5.5+3e2-1E-1").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Number(1.),
                Token::Number(-2.5),
                Token::Number(0.5),
                Token::Number(300.),
                Token::Number(-0.1),
                Token::EndOfData,
            ]
        );
    }

    #[test]
    fn test_number_forms() {
        let mut s = Scanner::new(".5 5. -.5 +7 1e+2");
        assert_eq!(s.read_number().unwrap(), 0.5);
        assert_eq!(s.read_number().unwrap(), 5.);
        assert_eq!(s.read_number().unwrap(), -0.5);
        assert_eq!(s.read_number().unwrap(), 7.);
        assert_eq!(s.read_number().unwrap(), 100.);
        assert!(s.at_end());
    }

    #[test]
    fn test_exponent_needs_digits() {
        // 'e' without digits is left for the next token
        let mut s = Scanner::new("2e");
        assert_eq!(s.read_number().unwrap(), 2.);
        assert_eq!(s.offset(), 1);
    }

    #[test]
    fn test_malformed_number() {
        for data in ["-", ".", "+x", "-.e1"] {
            let mut s = Scanner::new(data);
            assert!(
                matches!(s.read_number(), Err(Error::MalformedNumber { offset: 0 })),
                "{data}"
            );
        }
        let mut s = Scanner::new("1e999");
        assert!(s.read_number().is_err());
    }

    #[test]
    fn test_read_flag() {
        let mut s = Scanner::new("10 3,4");
        assert_eq!(s.read_flag().unwrap(), 1.);
        assert_eq!(s.read_flag().unwrap(), 0.);
        assert_eq!(s.read_number().unwrap(), 3.);
        assert_eq!(s.read_number().unwrap(), 4.);

        let mut s = Scanner::new("2");
        assert!(matches!(
            s.read_flag(),
            Err(Error::MalformedNumber { offset: 0 })
        ));
    }

    #[test]
    fn test_iterator_stops_after_error() {
        let mut s = Scanner::new("M 1 ? 2");
        assert_eq!(s.next().unwrap().unwrap(), Token::Command('M'));
        assert_eq!(s.next().unwrap().unwrap(), Token::Number(1.));
        assert!(s.next().unwrap().is_err());
        assert!(s.next().is_none());
    }
}
