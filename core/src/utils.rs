use std::fmt;
use num_enum::TryFromPrimitive;

/// Render a registry value by variant name, or as hex when unknown.
pub fn enum_name_or_hex<T>(raw: T::Primitive) -> String
where
    T: TryFromPrimitive + fmt::Debug,
    T::Primitive: fmt::LowerHex,
{
    match T::try_from_primitive(raw) {
        Ok(variant) => format!("{:?}", variant),
        Err(_) => format!("0x{:x}", raw),
    }
}

/// Short printable form of a byte slice for logs and error messages.
/// ASCII-printable slices render as `b"..."`, anything else as hex.
pub fn fmt_bytes(bytes: &[u8]) -> String {
    if bytes.iter().all(|b| b.is_ascii_graphic() || *b == b' ') {
        format!("b\"{}\"", String::from_utf8_lossy(bytes))
    } else {
        let mut s = String::with_capacity(2 + bytes.len() * 2);
        s.push_str("0x");
        for b in bytes {
            s.push_str(&format!("{:02x}", b));
        }
        s
    }
}
