// encode.rs — Filesystem-safe encoding of workspace names.
//
// Word characters ([A-Za-z0-9_]) pass through. Everything else becomes one
// bracketed lowercase hex group per UTF-16 code unit, e.g. "a b" -> "a[20]b".
// Brackets are themselves escaped, so distinct names never share an encoding.

/// Encode a workspace name into a single safe path segment.
pub fn encode_name(name: &str) -> String {
    let mut encoded = String::with_capacity(name.len());
    let mut units = [0u16; 2];

    for c in name.chars() {
        if c.is_ascii_alphanumeric() || c == '_' {
            encoded.push(c);
            continue;
        }
        for unit in c.encode_utf16(&mut units).iter() {
            encoded.push_str(&format!("[{:x}]", unit));
        }
    }

    encoded
}
