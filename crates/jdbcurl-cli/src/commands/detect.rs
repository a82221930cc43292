use anyhow::Result;

use jdbcurl_core::detect_product;

use super::Context;
use crate::args::UrlArgs;

/// Print the detected product, `UNKNOWN` if no prefix matches. Never fails
/// on the URL itself.
pub fn run(args: &UrlArgs, ctx: &Context) -> Result<()> {
    let url = ctx.resolve_url(args.url.as_deref())?;
    println!("{}", detect_product(&url));
    Ok(())
}
