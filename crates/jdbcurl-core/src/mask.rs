//! Secret masking for parsed URLs.
//!
//! Connection strings routinely embed credentials as properties
//! (`password=...`, `sslpassword=...`, `accessToken=...`) or as a
//! `user:password@` prefix on a host entry. This module hides both, either in
//! the property and host views or in the original URL text, so URLs can be
//! logged or displayed safely.
//!
//! Property detection is by case-insensitive substring match on the key. The
//! parsed structure is never modified.

use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::{Captures, Regex, RegexBuilder};

use crate::error::ConfigError;
use crate::types::{Host, ParsedUrl};

/// Default replacement text for secret values.
pub const DEFAULT_REPLACEMENT: &str = "****";

/// Property key fragments that mark a credential.
const SECRET_PATTERNS: &[&str] = &[
    // Passwords
    "password",
    "passwd",
    "pwd",
    "passphrase",
    // Tokens and keys
    "secret",
    "token",
    "credential",
    "apikey",
    "api_key",
    "accesskey",
    "access_key",
    "privatekey",
    "private_key",
    // Key and trust stores
    "keystorepassword",
    "truststorepassword",
    "sslpassword",
    "sslkey",
];

static BUILTIN_PATTERNS: LazyLock<Regex> =
    LazyLock::new(|| compile_patterns(SECRET_PATTERNS.iter().copied()).unwrap());

/// `key=value` pairs in any property region. The leading delimiter is kept so
/// the replacement can rebuild the text around the value.
static PROPERTY_PAIR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?P<lead>[?;&]\s*)(?P<key>[^=;&?]+?)(?P<eq>\s*=)(?P<value>[^;&]*)").unwrap()
});

/// Check whether a property key names a secret.
///
/// `extra` adds patterns on top of the built-in list. The check is
/// case-insensitive and matches substrings.
pub fn is_secret_key(key: &str, extra: &[&str]) -> bool {
    let patterns = SECRET_PATTERNS.iter().chain(extra.iter()).copied();
    compile_patterns(patterns).is_ok_and(|re| re.is_match(key))
}

/// Split `user:password@host` into `(user, password, host)`.
///
/// The last `@` ends the userinfo and the first `:` inside it ends the user,
/// so a password may itself contain `:` or `@`.
fn split_userinfo(hostname: &str) -> Option<(&str, &str, &str)> {
    let (userinfo, host) = hostname.rsplit_once('@')?;
    let (user, password) = userinfo.split_once(':')?;
    Some((user, password, host))
}

fn compile_patterns<'a>(patterns: impl Iterator<Item = &'a str>) -> Result<Regex, regex::Error> {
    let alternation: Vec<String> = patterns
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(regex::escape)
        .collect();
    RegexBuilder::new(&alternation.join("|"))
        .case_insensitive(true)
        .build()
}

/// Compiled secret-key patterns plus the text that replaces secret values.
#[derive(Debug, Clone)]
pub struct Masker {
    patterns: Regex,
    replacement: String,
}

impl Masker {
    /// Built-in patterns extended with `extra_keys`. Blank extra keys are
    /// skipped.
    pub fn new(extra_keys: &[String], replacement: impl Into<String>) -> Result<Self, ConfigError> {
        let patterns = SECRET_PATTERNS
            .iter()
            .copied()
            .chain(extra_keys.iter().map(String::as_str));
        let patterns = compile_patterns(patterns).map_err(|e| ConfigError {
            message: format!("Invalid secret key pattern: {}", e),
        })?;
        Ok(Self {
            patterns,
            replacement: replacement.into(),
        })
    }

    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    pub fn is_secret(&self, key: &str) -> bool {
        self.patterns.is_match(key)
    }

    /// Ordered key/value view of the properties with secret values replaced.
    pub fn masked_properties<'a>(&'a self, parsed: &'a ParsedUrl) -> IndexMap<&'a str, &'a str> {
        parsed
            .properties()
            .iter()
            .map(|(key, property)| {
                let value = if self.is_secret(key) && !property.value.is_empty() {
                    self.replacement.as_str()
                } else {
                    property.value.as_str()
                };
                (key.as_str(), value)
            })
            .collect()
    }

    /// The hosts with any `user:password@` prefix reduced to
    /// `user:<replacement>@`.
    pub fn masked_hosts(&self, parsed: &ParsedUrl) -> Vec<Host> {
        parsed
            .hosts()
            .iter()
            .map(|host| match split_userinfo(host.hostname()) {
                Some((user, password, rest)) if !password.is_empty() => {
                    host.renamed(format!("{}:{}@{}", user, self.replacement, rest))
                }
                _ => host.clone(),
            })
            .collect()
    }

    /// The original URL text with every host password and the value of every
    /// secret `key=value` pair replaced. Everything else is left byte for
    /// byte, including flag-only secrets that carry no value.
    pub fn mask_url(&self, parsed: &ParsedUrl) -> String {
        let mut text = parsed.original_url().to_string();
        for host in parsed.hosts() {
            if let Some((user, password, _)) = split_userinfo(host.hostname()) {
                if !password.is_empty() {
                    text = text.replace(
                        &format!("{}:{}@", user, password),
                        &format!("{}:{}@", user, self.replacement),
                    );
                }
            }
        }
        self.mask_text(&text)
    }

    fn mask_text(&self, text: &str) -> String {
        PROPERTY_PAIR
            .replace_all(text, |caps: &Captures<'_>| {
                let key = &caps["key"];
                let value = &caps["value"];
                if self.is_secret(key.trim()) && !value.trim().is_empty() {
                    format!("{}{}{}{}", &caps["lead"], key, &caps["eq"], self.replacement)
                } else {
                    caps[0].to_string()
                }
            })
            .into_owned()
    }
}

impl Default for Masker {
    fn default() -> Self {
        Self {
            patterns: BUILTIN_PATTERNS.clone(),
            replacement: DEFAULT_REPLACEMENT.to_string(),
        }
    }
}
