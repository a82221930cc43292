use std::process;

use anyhow::Result;

use jdbcurl_core::{is_recognized_url, parse};

use super::Context;
use crate::args::UrlArgs;

/// Report whether a URL is recognized and whether it parses.
///
/// Exit codes:
///   0: the URL parses
///   1: it does not (or error)
pub fn run(args: &UrlArgs, ctx: &Context) -> Result<()> {
    let url = ctx.resolve_url(args.url.as_deref())?;

    let recognized = is_recognized_url(&url);
    println!("Recognized: {}", if recognized { "yes" } else { "no" });

    match parse(&url) {
        Ok(parsed) => {
            println!("Parses:     yes ({})", parsed.product());
            Ok(())
        }
        Err(err) => {
            println!("Parses:     no ({})", err.kind());
            println!("  {}", err.message());
            process::exit(1);
        }
    }
}
