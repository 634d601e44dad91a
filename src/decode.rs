use super::config::DecodeConfig;
use super::error::DecodeError;
use super::value::{Dict, Value};
use bytes::Bytes;
use tracing::{debug, trace};

/// Decodes a complete bencode value using [`DecodeConfig::default`].
///
/// # Examples
///
/// ```
/// use rbencode::{decode, Value};
///
/// assert_eq!(decode(b"i42e").unwrap(), Value::Integer(42));
/// assert_eq!(decode(b"4:spam").unwrap(), Value::string("spam"));
/// assert!(decode(b"i03e").is_err());
/// ```
pub fn decode(data: &[u8]) -> Result<Value, DecodeError> {
    decode_with(data, &DecodeConfig::default())
}

/// Decodes a complete bencode value.
///
/// Unless `allow_trailing_data` is set, the value must span the whole
/// buffer. Decoding stops at the first error; no partial value is returned.
pub fn decode_with(data: &[u8], config: &DecodeConfig) -> Result<Value, DecodeError> {
    let result = Decoder::new(data, config).decode_top_level();
    match &result {
        Ok(_) => trace!("decoded {} bytes of bencode", data.len()),
        Err(e) => debug!("bencode decode failed: {}", e),
    }
    result
}

/// Decodes one value from the start of `data` and returns it together with
/// the number of bytes it occupied.
///
/// Anything after the value is left alone, which suits messages that carry
/// a raw payload after a bencoded header. `allow_trailing_data` is ignored.
///
/// # Examples
///
/// ```
/// use rbencode::{decode_prefix, DecodeConfig, Value};
///
/// let (value, used) = decode_prefix(b"d5:piecei0eeRAW", &DecodeConfig::default()).unwrap();
/// assert_eq!(value.get(b"piece"), Some(&Value::Integer(0)));
/// assert_eq!(used, 12);
/// ```
pub fn decode_prefix(data: &[u8], config: &DecodeConfig) -> Result<(Value, usize), DecodeError> {
    let mut decoder = Decoder::new(data, config);
    let value = decoder.decode_first()?;
    Ok((value, decoder.pos))
}

/// Cursor state for one decode call.
struct Decoder<'a> {
    data: &'a [u8],
    pos: usize,
    depth: usize,
    config: &'a DecodeConfig,
}

impl<'a> Decoder<'a> {
    fn new(data: &'a [u8], config: &'a DecodeConfig) -> Self {
        Self {
            data,
            pos: 0,
            depth: 0,
            config,
        }
    }

    fn decode_top_level(&mut self) -> Result<Value, DecodeError> {
        let value = self.decode_first()?;

        if !self.config.allow_trailing_data && self.pos != self.data.len() {
            return Err(DecodeError::TrailingData {
                offset: self.pos,
                remaining: self.data.len() - self.pos,
            });
        }

        Ok(value)
    }

    fn decode_first(&mut self) -> Result<Value, DecodeError> {
        if self.data.is_empty() {
            return Err(DecodeError::InsufficientData {
                offset: 0,
                needed: 1,
                available: 0,
            });
        }
        self.decode_value()
    }

    fn peek(&self) -> Option<u8> {
        self.data.get(self.pos).copied()
    }

    fn decode_value(&mut self) -> Result<Value, DecodeError> {
        let Some(c) = self.peek() else {
            return Err(DecodeError::UnexpectedEnd {
                offset: self.pos,
                expected: "a value",
            });
        };

        match c {
            b'i' => self.decode_integer(),
            b'f' => self.decode_float(),
            b'l' => self.decode_list(),
            b'd' => self.decode_dict(),
            b'0'..=b'9' => self.decode_bytes().map(Value::Bytes),
            c => Err(DecodeError::InvalidToken {
                offset: self.pos,
                found: c as char,
            }),
        }
    }

    /// Advances past a run of ASCII digits and returns where it started.
    fn skip_digits(&mut self) -> usize {
        let start = self.pos;
        while matches!(self.peek(), Some(b'0'..=b'9')) {
            self.pos += 1;
        }
        start
    }

    /// Consumes `terminator` after a numeral, or reports what was found instead.
    fn expect_terminator(
        &mut self,
        terminator: u8,
        expected: &'static str,
    ) -> Result<(), DecodeError> {
        match self.peek() {
            Some(c) if c == terminator => {
                self.pos += 1;
                Ok(())
            }
            Some(_) => Err(DecodeError::MalformedNumber {
                offset: self.pos,
                reason: "non-digit character",
            }),
            None => Err(DecodeError::UnexpectedEnd {
                offset: self.pos,
                expected,
            }),
        }
    }

    fn decode_integer(&mut self) -> Result<Value, DecodeError> {
        let data = self.data;
        self.pos += 1;
        let start = self.pos;

        let negative = self.peek() == Some(b'-');
        if negative {
            self.pos += 1;
        }
        let digits_start = self.skip_digits();
        let digits = &data[digits_start..self.pos];
        self.expect_terminator(b'e', "'e' after integer")?;

        if digits.is_empty() {
            return Err(DecodeError::MalformedNumber {
                offset: start,
                reason: "empty integer",
            });
        }
        if digits[0] == b'0' && (digits.len() > 1 || negative) {
            return Err(DecodeError::MalformedNumber {
                offset: start,
                reason: "leading zero",
            });
        }

        // Sign and digits only, so parsing can fail on range alone.
        let text = std::str::from_utf8(&data[start..self.pos - 1]).map_err(|_| {
            DecodeError::MalformedNumber {
                offset: start,
                reason: "invalid integer",
            }
        })?;
        let value: i64 = text.parse().map_err(|_| DecodeError::Overflow {
            offset: start,
            target: "i64",
        })?;

        Ok(Value::Integer(value))
    }

    fn decode_float(&mut self) -> Result<Value, DecodeError> {
        if !self.config.allow_float_extension {
            return Err(DecodeError::FloatExtensionDisallowed { offset: self.pos });
        }

        self.pos += 1;
        let start = self.pos;
        while self.peek().is_some_and(|c| c != b'e') {
            self.pos += 1;
        }
        if self.pos >= self.data.len() {
            return Err(DecodeError::UnexpectedEnd {
                offset: self.pos,
                expected: "'e' after float",
            });
        }

        let numeral = &self.data[start..self.pos];
        if numeral.is_empty() {
            return Err(DecodeError::MalformedNumber {
                offset: start,
                reason: "empty float",
            });
        }
        let value: f64 = std::str::from_utf8(numeral)
            .ok()
            .and_then(|s| s.parse().ok())
            .ok_or(DecodeError::MalformedNumber {
                offset: start,
                reason: "invalid float",
            })?;

        self.pos += 1;
        Ok(Value::Float(value))
    }

    fn decode_bytes(&mut self) -> Result<Bytes, DecodeError> {
        let data = self.data;
        let start = self.skip_digits();
        let digits = &data[start..self.pos];
        self.expect_terminator(b':', "':' after string length")?;

        if digits.is_empty() {
            return Err(DecodeError::MalformedNumber {
                offset: start,
                reason: "empty string length",
            });
        }
        if digits[0] == b'0' && digits.len() > 1 {
            return Err(DecodeError::MalformedNumber {
                offset: start,
                reason: "leading zero in string length",
            });
        }

        let len = digits.iter().try_fold(0usize, |acc, &d| {
            acc.checked_mul(10)?.checked_add(usize::from(d - b'0'))
        });
        let Some(len) = len else {
            return Err(DecodeError::Overflow {
                offset: start,
                target: "usize",
            });
        };

        let available = data.len() - self.pos;
        if len > available {
            return Err(DecodeError::InsufficientData {
                offset: self.pos,
                needed: len,
                available,
            });
        }

        let bytes = Bytes::copy_from_slice(&data[self.pos..self.pos + len]);
        self.pos += len;
        Ok(bytes)
    }

    fn enter_container(&mut self) -> Result<(), DecodeError> {
        if self.depth >= self.config.max_nesting_depth {
            return Err(DecodeError::NestingTooDeep {
                offset: self.pos,
                limit: self.config.max_nesting_depth,
            });
        }
        self.depth += 1;
        self.pos += 1;
        Ok(())
    }

    /// Consumes the closing `e` of a container.
    fn leave_container(&mut self, expected: &'static str) -> Result<(), DecodeError> {
        if self.pos >= self.data.len() {
            return Err(DecodeError::UnexpectedEnd {
                offset: self.pos,
                expected,
            });
        }
        self.pos += 1;
        self.depth -= 1;
        Ok(())
    }

    fn decode_list(&mut self) -> Result<Value, DecodeError> {
        self.enter_container()?;
        let mut list = Vec::new();

        while self.peek().is_some_and(|c| c != b'e') {
            list.push(self.decode_value()?);
        }

        self.leave_container("'e' to end list")?;
        Ok(Value::List(list))
    }

    fn decode_dict(&mut self) -> Result<Value, DecodeError> {
        self.enter_container()?;
        let mut dict = Dict::new();

        while let Some(c) = self.peek().filter(|&c| c != b'e') {
            let key_offset = self.pos;
            if !c.is_ascii_digit() {
                return Err(DecodeError::KeyTypeError {
                    offset: key_offset,
                    found: c as char,
                });
            }

            let key = self.decode_bytes()?;
            if self.config.reject_duplicate_keys && dict.contains_key(&key) {
                return Err(DecodeError::DuplicateKey {
                    offset: key_offset,
                    key,
                });
            }

            let value = self.decode_value()?;
            dict.insert(key, value);
        }

        self.leave_container("'e' to end dictionary")?;
        Ok(Value::Dict(dict))
    }
}
