//! Zip code rule.

/// Width zip codes are padded to.
pub const ZIP_CODE_WIDTH: usize = 5;

/// Left-pad with `0` to [`ZIP_CODE_WIDTH`] characters.
///
/// Longer values are returned unchanged. Content is not validated, so
/// non-digit text is padded the same way.
pub fn pad_zip_code(zip: &str) -> String {
    format!("{zip:0>ZIP_CODE_WIDTH$}")
}
