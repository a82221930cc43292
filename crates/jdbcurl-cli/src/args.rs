use clap::{Parser, Subcommand, ValueEnum};

use jdbcurl_core::config::OutputFormat;

#[derive(Parser, Debug)]
#[command(
    name = "jdbcurl",
    about = "Decompose JDBC connection URLs into hosts, database and properties",
    version,
    after_help = "Examples:\n  jdbcurl parse 'jdbc:mysql://db1:3306,db2:3307/app?useSSL=true'\n  jdbcurl parse --format json                # URL from $JDBC_URL or jdbcurl.toml\n  jdbcurl detect 'jdbc:oracle:thin:@//db:1521/XEPDB1'\n  jdbcurl check \"$DATASOURCE_URL\"\n  jdbcurl mask 'jdbc:sqlserver://db;databaseName=app;password=hunter2'"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Environment variable to read the URL from when none is given
    /// (default: [source] env_var in jdbcurl.toml, then JDBC_URL)
    #[arg(long, global = true, value_name = "NAME")]
    pub env: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Decompose a URL and display its parts
    Parse(ParseArgs),

    /// Print the database product a URL names
    Detect(UrlArgs),

    /// Check whether a URL is recognized and parses
    Check(UrlArgs),

    /// Print a URL with secret property values hidden
    Mask(UrlArgs),
}

#[derive(Parser, Debug)]
pub struct ParseArgs {
    /// JDBC URL to parse
    pub url: Option<String>,

    /// Output format (default: [output] format in jdbcurl.toml, then table)
    #[arg(long)]
    pub format: Option<FormatArg>,

    /// Show secret property values instead of masking them
    #[arg(long)]
    pub show_secrets: bool,
}

#[derive(Parser, Debug)]
pub struct UrlArgs {
    /// JDBC URL
    pub url: Option<String>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FormatArg {
    Table,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Table => OutputFormat::Table,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}
