//! Oracle connect descriptor scanning.
//!
//! A descriptor is a tree of parenthesised `KEY=VALUE` groups:
//!
//! ```text
//! (DESCRIPTION=(ADDRESS=(PROTOCOL=TCP)(HOST=db1)(PORT=1521))
//!              (CONNECT_DATA=(SERVICE_NAME=orcl)))
//! ```
//!
//! The scanner makes one forward pass over the text. Every byte is examined a
//! bounded number of times and no region is re-scanned, so cost is linear in
//! the input no matter how deeply or strangely the groups nest.

/// Leaf values pulled out of a descriptor. Only the first non-blank occurrence
/// of each key is kept; key matching ignores ASCII case.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DescriptorFields<'a> {
    pub host: Option<&'a str>,
    pub port: Option<u32>,
    pub service_name: Option<&'a str>,
    pub sid: Option<&'a str>,
    /// Deepest group nesting seen.
    pub max_depth: usize,
    /// Whether every `(` was closed and no `)` appeared unopened.
    pub balanced: bool,
}

/// Scan `text` for `HOST`, `PORT`, `SERVICE_NAME` and `SID` leaf groups.
pub fn scan(text: &str) -> DescriptorFields<'_> {
    let bytes = text.as_bytes();
    let mut fields = DescriptorFields {
        balanced: true,
        ..Default::default()
    };
    let mut depth: usize = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'(' => {
                depth += 1;
                fields.max_depth = fields.max_depth.max(depth);

                let key_start = i + 1;
                let key_end = find_stop(bytes, key_start, |b| matches!(b, b'=' | b'(' | b')'));
                if key_end >= bytes.len() || bytes[key_end] != b'=' {
                    // `(` with no key, or ran off the end: resume at the stop byte
                    i = key_end;
                    continue;
                }

                let value_start = key_end + 1;
                let value_end = find_stop(bytes, value_start, |b| matches!(b, b'(' | b')'));
                if value_end < bytes.len() && bytes[value_end] == b')' {
                    // leaf group closes here
                    record(
                        &mut fields,
                        text[key_start..key_end].trim(),
                        text[value_start..value_end].trim(),
                    );
                    depth -= 1;
                    i = value_end + 1;
                } else {
                    // nested group (or truncated input): continue at the inner `(`
                    i = value_end;
                }
            }
            b')' => {
                match depth.checked_sub(1) {
                    Some(d) => depth = d,
                    None => fields.balanced = false,
                }
                i += 1;
            }
            _ => i += 1,
        }
    }

    if depth != 0 {
        fields.balanced = false;
    }
    fields
}

/// Index of the first byte at or after `from` matching `stop`, or `bytes.len()`.
fn find_stop(bytes: &[u8], from: usize, stop: impl Fn(u8) -> bool) -> usize {
    bytes[from.min(bytes.len())..]
        .iter()
        .position(|&b| stop(b))
        .map_or(bytes.len(), |offset| from + offset)
}

fn record<'a>(fields: &mut DescriptorFields<'a>, key: &str, value: &'a str) {
    if value.is_empty() {
        return;
    }
    let slot = if key.eq_ignore_ascii_case("HOST") {
        &mut fields.host
    } else if key.eq_ignore_ascii_case("SERVICE_NAME") {
        &mut fields.service_name
    } else if key.eq_ignore_ascii_case("SID") {
        &mut fields.sid
    } else {
        if key.eq_ignore_ascii_case("PORT")
            && fields.port.is_none()
            && value.bytes().all(|b| b.is_ascii_digit())
        {
            fields.port = value.parse().ok();
        }
        return;
    };
    if slot.is_none() {
        *slot = Some(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_service_descriptor() {
        let fields = scan(
            "(DESCRIPTION=(ADDRESS=(PROTOCOL=TCP)(HOST=localhost)(PORT=1521))(CONNECT_DATA=(SERVICE_NAME=myservice)))",
        );
        assert_eq!(fields.host, Some("localhost"));
        assert_eq!(fields.port, Some(1521));
        assert_eq!(fields.service_name, Some("myservice"));
        assert_eq!(fields.sid, None);
        assert_eq!(fields.max_depth, 3);
        assert!(fields.balanced);
    }

    #[test]
    fn test_scan_is_case_insensitive_and_trims() {
        let fields = scan("(description=(address=(host = myhost )(port= 1522))(connect_data=(sid=ORCL)))");
        assert_eq!(fields.host, Some("myhost"));
        assert_eq!(fields.port, Some(1522));
        assert_eq!(fields.sid, Some("ORCL"));
    }

    #[test]
    fn test_first_host_wins() {
        let fields = scan(
            "(DESCRIPTION=(ADDRESS_LIST=(ADDRESS=(HOST=primary)(PORT=1521))(ADDRESS=(HOST=standby)(PORT=1522))))",
        );
        assert_eq!(fields.host, Some("primary"));
        assert_eq!(fields.port, Some(1521));
    }

    #[test]
    fn test_wide_port() {
        let fields = scan("(DESCRIPTION=(ADDRESS=(HOST=h)(PORT=70000)))");
        assert_eq!(fields.port, Some(70000));
    }

    #[test]
    fn test_non_numeric_port_ignored() {
        let fields = scan("(DESCRIPTION=(ADDRESS=(HOST=h)(PORT=abc)))");
        assert_eq!(fields.host, Some("h"));
        assert_eq!(fields.port, None);
    }

    #[test]
    fn test_blank_values_skipped() {
        let fields = scan("(DESCRIPTION=(ADDRESS=(HOST= )(HOST=real)))");
        assert_eq!(fields.host, Some("real"));
    }

    #[test]
    fn test_missing_host() {
        let fields = scan("(DESCRIPTION=(CONNECT_DATA=(SERVICE_NAME=svc)))");
        assert_eq!(fields.host, None);
        assert_eq!(fields.service_name, Some("svc"));
    }

    #[test]
    fn test_unbalanced_input() {
        assert!(!scan("(DESCRIPTION=(ADDRESS=(HOST=h)").balanced);
        assert!(!scan("(HOST=h)))").balanced);
        assert_eq!(scan("(DESCRIPTION=(ADDRESS=(HOST=h)").host, Some("h"));
    }

    #[test]
    fn test_degenerate_inputs() {
        assert_eq!(scan(""), DescriptorFields { balanced: true, ..Default::default() });
        assert_eq!(scan("(((((").max_depth, 5);
        assert_eq!(scan("(HOST=").host, None);
        assert_eq!(scan(")(").host, None);
    }

    #[test]
    fn test_deep_nesting_completes() {
        let depth = 20_000;
        let mut text = String::new();
        for _ in 0..depth {
            text.push_str("(A=");
        }
        text.push_str("(HOST=deep)");
        for _ in 0..depth {
            text.push(')');
        }
        let fields = scan(&text);
        assert_eq!(fields.host, Some("deep"));
        assert_eq!(fields.max_depth, depth + 1);
        assert!(fields.balanced);
    }
}
