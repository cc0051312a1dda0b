//! Hex dumps of packet payloads for trace logging.

use std::fmt::Write;

const BYTES_PER_ROW: usize = 16;

/// Render `data` as rows of sixteen hex bytes with an ASCII gutter.
///
/// ```text
/// (0000) c8 00 03 00 00 00 00 00 50 68 61 6e 74 61 73 79    ........Phantasy
/// ```
pub fn format_payload(data: &[u8]) -> String {
    let mut out = String::with_capacity(data.len() * 4 + 16);
    for (row, chunk) in data.chunks(BYTES_PER_ROW).enumerate() {
        if row > 0 {
            out.push('\n');
        }
        let _ = write!(out, "({:04X}) ", row * BYTES_PER_ROW);
        for byte in chunk {
            let _ = write!(out, "{byte:02x} ");
        }
        for _ in chunk.len()..BYTES_PER_ROW {
            out.push_str("   ");
        }
        out.push_str("   ");
        out.extend(chunk.iter().map(|&b| {
            if b.is_ascii_graphic() || b == b' ' {
                b as char
            } else {
                '.'
            }
        }));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_row() {
        let dump = format_payload(b"\x08\x00Hi");
        assert!(dump.starts_with("(0000) 08 00 48 69 "));
        assert!(dump.ends_with("..Hi"));
    }

    #[test]
    fn test_rows_are_offset() {
        let dump = format_payload(&[0u8; 20]);
        let rows: Vec<&str> = dump.lines().collect();
        assert_eq!(rows.len(), 2);
        assert!(rows[1].starts_with("(0010) "));
    }

    #[test]
    fn test_empty_payload() {
        assert!(format_payload(&[]).is_empty());
    }
}
