//! Masking of textual values annotated with `#[markdown(obfuscate)]`.
//!
//! Masking counts Unicode scalar values, not bytes, so multi-byte characters
//! are masked one `*` per character and the visible tail is never split in the
//! middle of a character.

/// Character used to mask hidden characters.
pub const MASK_CHAR: char = '*';

/// Number of trailing characters left readable by [`obfuscate`].
pub const VISIBLE_SUFFIX: usize = 4;

/// Keeps the last few characters of a value visible and masks the rest.
///
/// Values no longer than the visible suffix are returned unchanged: there is
/// nothing left to hide once the tail is shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MaskConfig {
    /// Number of trailing characters to keep visible.
    visible_suffix: usize,
    /// Symbol used to mask the leading characters.
    mask_char: char,
}

impl MaskConfig {
    /// Keeps the last `visible_suffix` characters visible.
    #[must_use]
    pub fn keep_last(visible_suffix: usize) -> Self {
        Self {
            visible_suffix,
            mask_char: MASK_CHAR,
        }
    }

    /// Uses a specific masking character.
    #[must_use]
    pub fn with_mask_char(mut self, mask_char: char) -> Self {
        self.mask_char = mask_char;
        self
    }

    /// Number of trailing characters kept visible.
    pub fn visible_suffix(&self) -> usize {
        self.visible_suffix
    }

    /// Character used for masking.
    pub fn mask_char(&self) -> char {
        self.mask_char
    }

    /// Applies the mask to a string value.
    #[must_use]
    pub fn apply_to(&self, value: &str) -> String {
        let mut chars: Vec<char> = value.chars().collect();
        let total = chars.len();
        if total <= self.visible_suffix {
            return value.to_string();
        }

        chars[..total - self.visible_suffix].fill(self.mask_char);
        chars.into_iter().collect()
    }
}

impl Default for MaskConfig {
    fn default() -> Self {
        Self::keep_last(VISIBLE_SUFFIX)
    }
}

/// Masks all but the last four characters of `value` with `*`.
///
/// ```
/// assert_eq!(markdownable::obfuscate("abcdef1234"), "******1234");
/// assert_eq!(markdownable::obfuscate("1234"), "1234");
/// ```
#[must_use]
pub fn obfuscate(value: &str) -> String {
    MaskConfig::default().apply_to(value)
}
