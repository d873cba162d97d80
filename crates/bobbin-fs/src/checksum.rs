//! Content checksum utilities
//!
//! Downloads are compared by an MD5 digest of their raw bytes, rendered as
//! 32 lowercase hex characters. Hashes stored by earlier runs use the same
//! rendering, so the format must not change.

/// Length in characters of every checksum produced by this module
pub const CHECKSUM_LEN: usize = 32;

/// Compute the checksum of raw content.
///
/// Returns 32 lowercase hex characters. Leading zero bytes are kept, so the
/// width never varies.
pub fn compute_content_checksum(content: &[u8]) -> String {
    format!("{:x}", md5::compute(content))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_checksum_is_deterministic() {
        let a = compute_content_checksum(b"test");
        let b = compute_content_checksum(b"test");
        assert_eq!(a, b);
    }

    #[test]
    fn different_content_different_checksum() {
        let a = compute_content_checksum(b"aaa");
        let b = compute_content_checksum(b"bbb");
        assert_ne!(a, b);
    }

    #[test]
    fn content_checksum_known_value() {
        assert_eq!(
            compute_content_checksum(b"hello"),
            "5d41402abc4b2a76b9719d911017c592"
        );
        assert_eq!(
            compute_content_checksum(b""),
            "d41d8cd98f00b204e9800998ecf8427e"
        );
    }

    #[test]
    fn checksum_keeps_leading_zero_bytes() {
        // MD5("jk8ssl") begins with a zero byte
        let checksum = compute_content_checksum(b"jk8ssl");
        assert_eq!(checksum, "0000000018e6137ac2caab16074784a6");
        assert_eq!(checksum.len(), CHECKSUM_LEN);
    }

    #[test]
    fn checksum_is_lowercase_hex() {
        let checksum = compute_content_checksum(b"\x00\xff binary \x7f");
        assert_eq!(checksum.len(), CHECKSUM_LEN);
        assert!(
            checksum
                .chars()
                .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
        );
    }
}
