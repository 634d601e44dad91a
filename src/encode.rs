use super::config::EncodeConfig;
use super::error::EncodeError;
use super::value::Value;
use tracing::{debug, trace};

/// Encodes a bencode value using [`EncodeConfig::default`].
///
/// The output follows the canonical bencode format:
/// - Integers: `i<number>e`
/// - Byte strings: `<length>:<data>`
/// - Lists: `l<items>e`
/// - Dictionaries: `d<key><value>...e` (keys sorted lexicographically)
///
/// # Errors
///
/// Fails on [`Value::Float`], which needs the float extension.
///
/// # Examples
///
/// ```
/// use rbencode::{encode, Value};
///
/// // Encode an integer
/// let encoded = encode(&Value::Integer(42)).unwrap();
/// assert_eq!(encoded, b"i42e");
///
/// // Encode a list
/// let list = Value::List(vec![Value::Integer(1), Value::string("two")]);
/// let encoded = encode(&list).unwrap();
/// assert_eq!(encoded, b"li1e3:twoe");
///
/// // Encode a dictionary; keys come out sorted
/// let dict: Value = [("b", Value::Integer(2)), ("a", Value::Integer(1))]
///     .into_iter()
///     .collect();
/// let encoded = encode(&dict).unwrap();
/// assert_eq!(encoded, b"d1:ai1e1:bi2ee");
/// ```
pub fn encode(value: &Value) -> Result<Vec<u8>, EncodeError> {
    serialize(value, &EncodeConfig::default())
}

/// Encodes a bencode value with explicit options.
///
/// Output is deterministic: the same value and config always produce the
/// same bytes.
///
/// # Examples
///
/// ```
/// use rbencode::{serialize, EncodeConfig, Value};
///
/// let config = EncodeConfig::permissive();
/// assert_eq!(serialize(&Value::Float(0.25), &config).unwrap(), b"f0.25e");
/// ```
pub fn serialize(value: &Value, config: &EncodeConfig) -> Result<Vec<u8>, EncodeError> {
    let mut buf = Vec::new();
    serialize_into(value, &mut buf, config)?;
    Ok(buf)
}

/// Appends the encoding of `value` to `buf`.
///
/// On error `buf` is restored to its original length, and the error offset
/// is relative to where this call started writing.
pub fn serialize_into(
    value: &Value,
    buf: &mut Vec<u8>,
    config: &EncodeConfig,
) -> Result<(), EncodeError> {
    let start = buf.len();
    let mut encoder = Encoder { buf, start, config };

    match encoder.encode_value(value) {
        Ok(()) => {
            trace!("encoded {} bytes of bencode", encoder.buf.len() - start);
            Ok(())
        }
        Err(e) => {
            debug!("bencode encode failed: {}", e);
            encoder.buf.truncate(start);
            Err(e)
        }
    }
}

struct Encoder<'a> {
    buf: &'a mut Vec<u8>,
    start: usize,
    config: &'a EncodeConfig,
}

impl Encoder<'_> {
    fn offset(&self) -> usize {
        self.buf.len() - self.start
    }

    fn encode_value(&mut self, value: &Value) -> Result<(), EncodeError> {
        match value {
            Value::Integer(i) => {
                self.buf.push(b'i');
                self.buf.extend_from_slice(i.to_string().as_bytes());
                self.buf.push(b'e');
            }
            Value::Float(f) => self.encode_float(*f)?,
            Value::Bytes(b) => self.encode_bytes(b),
            Value::List(l) => {
                self.buf.push(b'l');
                for item in l {
                    self.encode_value(item)?;
                }
                self.buf.push(b'e');
            }
            Value::Dict(d) => {
                self.buf.push(b'd');
                if self.config.canonical_key_order {
                    let mut entries: Vec<_> = d.iter().collect();
                    entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
                    for (key, val) in entries {
                        self.encode_bytes(key);
                        self.encode_value(val)?;
                    }
                } else {
                    for (key, val) in d {
                        self.encode_bytes(key);
                        self.encode_value(val)?;
                    }
                }
                self.buf.push(b'e');
            }
        }
        Ok(())
    }

    fn encode_bytes(&mut self, b: &[u8]) {
        self.buf.extend_from_slice(b.len().to_string().as_bytes());
        self.buf.push(b':');
        self.buf.extend_from_slice(b);
    }

    fn encode_float(&mut self, f: f64) -> Result<(), EncodeError> {
        if !self.config.allow_float_extension {
            return Err(EncodeError::FloatExtensionDisallowed {
                offset: self.offset(),
            });
        }
        if !f.is_finite() {
            return Err(EncodeError::NonFiniteFloat {
                offset: self.offset(),
                value: f,
            });
        }

        // `Display` for f64 never uses exponent notation, so the numeral
        // cannot contain the terminating 'e', and it parses back exactly.
        self.buf.push(b'f');
        self.buf.extend_from_slice(f.to_string().as_bytes());
        self.buf.push(b'e');
        Ok(())
    }
}
