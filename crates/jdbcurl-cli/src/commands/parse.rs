use anyhow::{Context as _, Result};
use comfy_table::{Cell, Table as ComfyTable};
use serde::Serialize;

use jdbcurl_core::config::OutputFormat;
use jdbcurl_core::{parse, Host, Masker, ParsedUrl, Product, PropertySource};

use super::Context;
use crate::args::ParseArgs;

/// Strict parse, rendered as a table or JSON.
pub fn run(args: &ParseArgs, ctx: &Context) -> Result<()> {
    let url = ctx.resolve_url(args.url.as_deref())?;
    let parsed = parse(&url)?;
    let masker = if args.show_secrets {
        None
    } else {
        Some(ctx.config.masker()?)
    };
    let view = ParsedView::new(&parsed, masker.as_ref());

    let format = args
        .format
        .map(OutputFormat::from)
        .unwrap_or(ctx.config.output.format);

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&view)
                .context("Failed to serialize parsed URL")?;
            println!("{}", json);
        }
        OutputFormat::Table => print_table(&view),
    }
    Ok(())
}

/// What gets printed: the parsed URL with secrets optionally masked.
#[derive(Debug, Serialize)]
struct ParsedView<'a> {
    url: String,
    product: Product,
    protocol: &'a str,
    hosts: Vec<Host>,
    database: &'a str,
    file_based: bool,
    properties: Vec<PropertyView<'a>>,
}

#[derive(Debug, Serialize)]
struct PropertyView<'a> {
    key: &'a str,
    value: &'a str,
    source: PropertySource,
}

impl<'a> ParsedView<'a> {
    fn new(parsed: &'a ParsedUrl, masker: Option<&'a Masker>) -> Self {
        let (url, hosts, values) = match masker {
            Some(m) => (m.mask_url(parsed), m.masked_hosts(parsed), m.masked_properties(parsed)),
            None => (
                parsed.original_url().to_string(),
                parsed.hosts().to_vec(),
                parsed.property_values(),
            ),
        };

        // Both views keep the URL's property order.
        let properties = parsed
            .properties()
            .values()
            .zip(values)
            .map(|(property, (key, value))| PropertyView {
                key,
                value,
                source: property.source,
            })
            .collect();

        Self {
            url,
            product: parsed.product(),
            protocol: parsed.protocol(),
            hosts,
            database: parsed.database_name(),
            file_based: parsed.is_file_based(),
            properties,
        }
    }
}

fn print_table(view: &ParsedView<'_>) {
    println!("URL:      {}", view.url);
    println!(
        "Product:  {}  ({}-based)",
        view.product,
        if view.file_based { "file" } else { "network" }
    );
    println!("Protocol: {}", view.protocol);

    if !view.hosts.is_empty() {
        let mut t = ComfyTable::new();
        t.set_header(vec!["#", "Host", "Instance", "Port"]);
        for (i, host) in view.hosts.iter().enumerate() {
            t.add_row(vec![
                Cell::new(i + 1),
                Cell::new(host.hostname()),
                Cell::new(host.instance().unwrap_or("")),
                Cell::new(host.port().map(|p| p.to_string()).unwrap_or_default()),
            ]);
        }
        println!("\n{}", t);
    }

    println!(
        "\nDatabase: {}",
        if view.database.is_empty() {
            "(none)"
        } else {
            view.database
        }
    );

    if !view.properties.is_empty() {
        let mut t = ComfyTable::new();
        t.set_header(vec!["Property", "Value", "Source"]);
        for property in &view.properties {
            t.add_row(vec![
                Cell::new(property.key),
                Cell::new(property.value),
                Cell::new(property.source),
            ]);
        }
        println!("\n{}", t);
    }
}
