use clap::Parser;
use csaf_purls::application::dto::OutputFormat;
use std::path::PathBuf;

/// Find the package URLs (purls) of selected products in CSAF advisories
#[derive(Parser, Debug)]
#[command(name = "csaf-purls")]
#[command(version)]
#[command(about = "Find the package URLs (purls) of selected products in CSAF advisories", long_about = None)]
pub struct Args {
    /// CSAF advisory JSON files to scan
    #[arg(value_name = "ADVISORY", required = true)]
    pub advisories: Vec<PathBuf>,

    /// Product id to look up; can be specified multiple times: -i CSAFPID-0001 -i CSAFPID-0002
    #[arg(short = 'i', long = "product-id", value_name = "PRODUCT_ID")]
    pub product_ids: Vec<String>,

    /// Output format: text, json or markdown [default: text]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Report every advisory separately instead of one combined result
    #[arg(long)]
    pub isolate: bool,

    /// Exit with code 1 when no package URL was found
    #[arg(long)]
    pub fail_if_empty: bool,

    /// Path to a config file (defaults to ./csaf-purls.config.yml when present)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
