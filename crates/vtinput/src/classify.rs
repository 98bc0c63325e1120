//! Byte-class predicates the interpreter's top-level decision and sub-parsers
//! are built from.

/// Fe/Fs/Fp/nF introducer bytes that route to the Fs/Fp/nF sub-parser rather
/// than falling through to `UnknownESC`.
pub const FS_FP_NF_INTROS: &[u8] = b"#%()*+-./ 6789=>clmno|}~";

/// Default protected introducers: these never resolve to a `Meta(introducer)`
/// event even when meta-acceptable, because they start a real sub-parser.
pub const DEFAULT_PROTECTED_INTROS: &[u8] = b"OP[]";

#[must_use]
pub fn is_ascii_printable(byte: u8) -> bool {
    (0x21..=0x7e).contains(&byte)
}

#[must_use]
pub fn is_default_space(byte: u8) -> bool {
    byte == 0x20
}

#[must_use]
pub fn is_del_or_backspace(byte: u8) -> bool {
    byte == 0x08 || byte == 0x7f
}

#[must_use]
pub fn is_c0_control(byte: u8) -> bool {
    byte < 0x20
}

#[must_use]
pub fn is_utf8_lead(byte: u8) -> bool {
    (0xc2..=0xf4).contains(&byte)
}

/// Number of continuation bytes a UTF-8 lead byte expects (1, 2, or 3).
#[must_use]
pub fn utf8_continuation_len(lead: u8) -> usize {
    match lead {
        0xc2..=0xdf => 1,
        0xe0..=0xef => 2,
        0xf0..=0xf4 => 3,
        _ => 0,
    }
}

#[must_use]
pub fn is_csi_final(byte: u8) -> bool {
    (0x40..=0x7e).contains(&byte)
}

#[must_use]
pub fn is_fs_fp_nf_intro(byte: u8, table: &[u8]) -> bool {
    table.contains(&byte)
}

/// `Space` folds `\r` into `\n`, matching the original's `Space.__new__`.
#[must_use]
pub fn normalize_space_char(byte: u8) -> char {
    if byte == b'\r' { '\n' } else { byte as char }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn printable_range_is_0x21_to_0x7e() {
        assert!(is_ascii_printable(0x21));
        assert!(is_ascii_printable(0x7e));
        assert!(!is_ascii_printable(0x20));
        assert!(!is_ascii_printable(0x7f));
    }

    #[test]
    fn utf8_continuation_length_depends_on_lead_byte() {
        assert_eq!(utf8_continuation_len(0xc2), 1);
        assert_eq!(utf8_continuation_len(0xe0), 2);
        assert_eq!(utf8_continuation_len(0xf4), 3);
    }

    #[test]
    fn space_normalizes_carriage_return_to_newline() {
        assert_eq!(normalize_space_char(b'\r'), '\n');
        assert_eq!(normalize_space_char(b'\n'), '\n');
    }
}
