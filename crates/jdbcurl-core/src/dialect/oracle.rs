//! Oracle URLs: `jdbc:oracle:<driver_type>:<connection_info>`.
//!
//! `connection_info` comes in three shapes:
//!
//! - `@(DESCRIPTION=...)`: a connect descriptor, scanned for HOST/PORT and
//!   SERVICE_NAME or SID
//! - `@[//]host:port/service_name`
//! - `@host:port:SID` (only tried when the service-name shape does not fit,
//!   and never for the `@//` form)
//!
//! All three record the driver type (`thin`, `oci`, ...) as `DRIVER_TYPE`.

use crate::error::Result;
use crate::product::starts_with_ignore_case;
use crate::types::{Host, ParsedUrl, Properties};

use super::descriptor;
use super::keys::{DESCRIPTOR, DRIVER_TYPE, SERVICE_NAME, SID};
use super::{insert_derived, insert_descriptor, Matched};

const DESCRIPTOR_START: &str = "@(DESCRIPTION=";

pub(crate) fn parse(matched: Matched<'_>) -> Result<ParsedUrl> {
    let (driver_type, info) = matched
        .remainder()
        .split_once(':')
        .ok_or_else(|| matched.malformed("Invalid Oracle URL format: missing driver type"))?;

    let mut properties = Properties::new();
    insert_derived(&mut properties, DRIVER_TYPE, driver_type);

    if starts_with_ignore_case(info, DESCRIPTOR_START) {
        return Ok(parse_descriptor(matched, info, properties));
    }

    if info.starts_with("@//") {
        let (host, service) = service_name_form(info)
            .ok_or_else(|| matched.malformed("Invalid Oracle service name format"))?;
        insert_descriptor(&mut properties, SERVICE_NAME, service);
        return Ok(matched.finish(vec![host], service, properties));
    }

    if info.starts_with('@') {
        if let Some((host, service)) = service_name_form(info) {
            insert_descriptor(&mut properties, SERVICE_NAME, service);
            return Ok(matched.finish(vec![host], service, properties));
        }
        if let Some((host, sid)) = sid_form(info) {
            insert_descriptor(&mut properties, SID, sid);
            return Ok(matched.finish(vec![host], sid, properties));
        }
        return Err(matched.malformed("Invalid Oracle SID or service name format"));
    }

    Err(matched.malformed("Unsupported Oracle connection format"))
}

fn parse_descriptor(matched: Matched<'_>, info: &str, mut properties: Properties) -> ParsedUrl {
    tracing::debug!("Parsing Oracle descriptor format: {}", info);

    let fields = descriptor::scan(&info[1..]);
    if !fields.balanced {
        tracing::debug!("Oracle descriptor has unbalanced parentheses: {}", info);
    }

    let database = match (fields.service_name, fields.sid) {
        (Some(service), _) => {
            insert_descriptor(&mut properties, SERVICE_NAME, service);
            service
        }
        (None, Some(sid)) => {
            insert_descriptor(&mut properties, SID, sid);
            sid
        }
        (None, None) => "",
    };

    let hosts = match fields.host {
        Some(hostname) => vec![match fields.port {
            Some(port) => Host::with_port(hostname, port),
            None => Host::new(hostname),
        }],
        None => Vec::new(),
    };

    insert_descriptor(&mut properties, DESCRIPTOR, info);
    matched.finish(hosts, database, properties)
}

/// `@[/][/]host:port/service`: host has no `/` or `:`, port is all digits.
fn service_name_form(info: &str) -> Option<(Host, &str)> {
    let rest = info.strip_prefix('@')?;
    let rest = rest.strip_prefix('/').unwrap_or(rest);
    let rest = rest.strip_prefix('/').unwrap_or(rest);

    let host_end = rest.find(['/', ':'])?;
    let (hostname, rest) = rest.split_at(host_end);
    let rest = rest.strip_prefix(':')?;
    let (port, service) = rest.split_once('/')?;

    let port = parse_digits(port)?;
    if hostname.trim().is_empty() || service.is_empty() {
        return None;
    }
    Some((Host::with_port(hostname, port), service))
}

/// `@host:port:sid`: host has no `:`, port is all digits.
fn sid_form(info: &str) -> Option<(Host, &str)> {
    let rest = info.strip_prefix('@')?;
    let (hostname, rest) = rest.split_once(':')?;
    let (port, sid) = rest.split_once(':')?;

    let port = parse_digits(port)?;
    if hostname.trim().is_empty() || sid.is_empty() {
        return None;
    }
    Some((Host::with_port(hostname, port), sid))
}

fn parse_digits(text: &str) -> Option<u32> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}
