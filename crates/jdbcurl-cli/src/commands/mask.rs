use anyhow::{anyhow, Result};

use jdbcurl_core::parse;

use super::Context;
use crate::args::UrlArgs;

/// Print the URL with secret values replaced. The URL must parse: masking an
/// unparsable URL could leave a secret in place.
pub fn run(args: &UrlArgs, ctx: &Context) -> Result<()> {
    let url = ctx.resolve_url(args.url.as_deref())?;
    // The error text embeds the URL verbatim, so leave it out here.
    let parsed = parse(&url).map_err(|e| anyhow!("Cannot mask URL: {} ({})", e.message(), e.kind()))?;
    let masker = ctx.config.masker()?;
    println!("{}", masker.mask_url(&parsed));
    Ok(())
}
