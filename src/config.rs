/// Default ceiling on list/dictionary nesting while decoding.
pub const DEFAULT_MAX_NESTING_DEPTH: usize = 512;

/// Decoder options.
///
/// The defaults describe strict standard bencode: no floats, no trailing
/// bytes after the value, and duplicate dictionary keys are an error.
///
/// # Examples
///
/// ```
/// use rbencode::{decode_with, DecodeConfig, Value};
///
/// let config = DecodeConfig::default()
///     .with_float_extension(true)
///     .with_max_nesting_depth(16);
///
/// assert_eq!(decode_with(b"f1.5e", &config).unwrap(), Value::Float(1.5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeConfig {
    /// Accept the non-standard `f<float>e` element.
    pub allow_float_extension: bool,
    /// Accept input that continues after the top-level element.
    pub allow_trailing_data: bool,
    /// Maximum number of nested lists and dictionaries.
    pub max_nesting_depth: usize,
    /// Fail on a repeated dictionary key instead of overwriting the earlier value.
    pub reject_duplicate_keys: bool,
}

impl DecodeConfig {
    /// Default configuration with the float extension enabled.
    pub fn permissive() -> Self {
        Self::default().with_float_extension(true)
    }

    pub fn with_float_extension(mut self, allow: bool) -> Self {
        self.allow_float_extension = allow;
        self
    }

    pub fn with_trailing_data(mut self, allow: bool) -> Self {
        self.allow_trailing_data = allow;
        self
    }

    pub fn with_max_nesting_depth(mut self, depth: usize) -> Self {
        self.max_nesting_depth = depth;
        self
    }

    pub fn with_duplicate_keys_rejected(mut self, reject: bool) -> Self {
        self.reject_duplicate_keys = reject;
        self
    }
}

impl Default for DecodeConfig {
    fn default() -> Self {
        Self {
            allow_float_extension: false,
            allow_trailing_data: false,
            max_nesting_depth: DEFAULT_MAX_NESTING_DEPTH,
            reject_duplicate_keys: true,
        }
    }
}

/// Encoder options.
///
/// By default floats are refused and dictionaries are written with their
/// keys sorted by raw bytes, which is what BitTorrent clients expect when
/// hashing encoded data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeConfig {
    /// Emit `f<float>e` for [`Value::Float`](crate::Value::Float).
    pub allow_float_extension: bool,
    /// Sort dictionary entries by key; otherwise keep insertion order.
    pub canonical_key_order: bool,
}

impl EncodeConfig {
    /// Default configuration with the float extension enabled.
    pub fn permissive() -> Self {
        Self::default().with_float_extension(true)
    }

    pub fn with_float_extension(mut self, allow: bool) -> Self {
        self.allow_float_extension = allow;
        self
    }

    pub fn with_canonical_key_order(mut self, canonical: bool) -> Self {
        self.canonical_key_order = canonical;
        self
    }
}

impl Default for EncodeConfig {
    fn default() -> Self {
        Self {
            allow_float_extension: false,
            canonical_key_order: true,
        }
    }
}
