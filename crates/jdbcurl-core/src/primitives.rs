//! # Parsing Primitives
//!
//! The lexical building blocks every dialect is assembled from: first-delimiter
//! splitting, property-block parsing and host parsing. None of these fail;
//! malformed pieces degrade to well-defined defaults (a host without a port,
//! a flag property without a value). The only case a caller must handle is a
//! host string with no usable hostname, reported as `None`.

use crate::types::{Host, Properties, Property, PropertySource};

/// Separates a hostname from a named instance (`host\INSTANCE:port`).
pub const INSTANCE_DELIMITER: char = '\\';

/// Split at the first `delimiter`. The delimiter itself is dropped.
///
/// Returns the whole input and `None` when the delimiter is absent.
pub fn split_first(input: &str, delimiter: char) -> (&str, Option<&str>) {
    match input.split_once(delimiter) {
        Some((head, tail)) => (head, Some(tail)),
        None => (input, None),
    }
}

/// Split at whichever of two delimiters occurs first.
pub fn split_first_of_either(input: &str, first: char, second: char) -> (&str, Option<&str>) {
    match input.find([first, second]) {
        Some(index) => {
            // skip the whole delimiter char, not just one byte
            let width = input[index..].chars().next().map_or(1, char::len_utf8);
            (&input[..index], Some(&input[index + width..]))
        }
        None => (input, None),
    }
}

/// Parse a `key=value` block separated by `&` or `;`.
///
/// Blank segments are skipped, keys and values are trimmed, and a segment
/// without `=` (or starting with it) becomes a flag with an empty value.
/// Duplicate keys keep their first position and take the last value.
pub fn parse_properties(block: Option<&str>, source: PropertySource) -> Properties {
    let mut properties = Properties::new();
    let Some(block) = block.filter(|b| !b.trim().is_empty()) else {
        return properties;
    };

    for segment in block.split(['&', ';']) {
        if segment.trim().is_empty() {
            continue;
        }
        match segment.find('=') {
            Some(eq) if eq > 0 => {
                let key = segment[..eq].trim();
                let value = segment[eq + 1..].trim();
                properties.insert(key.to_string(), Property::new(source, value));
            }
            _ => {
                properties.insert(segment.trim().to_string(), Property::new(source, ""));
            }
        }
    }

    properties
}

/// Parse `hostname[:port]`, or `hostname\instance[:port]`.
///
/// A port is taken from the tail after the *last* colon only if it is numeric
/// and a hostname precedes it; otherwise the whole string is the hostname.
/// Returns `None` for a blank string.
pub fn parse_host(host: &str) -> Option<Host> {
    if host.trim().is_empty() {
        return None;
    }
    if host.contains(INSTANCE_DELIMITER) {
        return parse_qualified_host(host);
    }

    if let Some(colon) = host.rfind(':') {
        if colon > 0 && colon < host.len() - 1 {
            let (hostname, port) = (&host[..colon], &host[colon + 1..]);
            match port.parse::<u32>() {
                Ok(port) if !hostname.trim().is_empty() => {
                    return Some(Host::with_port(hostname, port));
                }
                _ => tracing::debug!("Invalid port number in host string: {}", host),
            }
        }
    }

    Some(Host::new(host))
}

/// Parse `hostname\instance[:port]`.
///
/// An unparsable port is dropped while the instance is kept. Returns `None`
/// for a blank hostname or when no instance delimiter is present.
pub fn parse_qualified_host(host: &str) -> Option<Host> {
    let (hostname, rest) = host.split_once(INSTANCE_DELIMITER)?;
    if hostname.trim().is_empty() {
        return None;
    }

    let (instance, port) = match rest.find(':') {
        Some(colon) if colon > 0 => {
            let port_text = &rest[colon + 1..];
            let port = port_text.parse::<u32>().ok();
            if port.is_none() {
                tracing::debug!("Invalid port number in instance host string: {}", host);
            }
            (&rest[..colon], port)
        }
        _ => (rest, None),
    };

    if instance.trim().is_empty() {
        return Some(match port {
            Some(port) => Host::with_port(hostname, port),
            None => Host::new(hostname),
        });
    }
    Some(Host::with_instance(hostname, instance, port))
}

/// Parse a comma-separated host list, preserving order.
///
/// Blank entries are dropped, so a blank list yields no hosts. Returns `None`
/// if any entry has no usable hostname.
pub fn parse_host_list(hosts: &str) -> Option<Vec<Host>> {
    hosts
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(parse_host)
        .collect()
}
