use anyhow::Result;
use clap::Args;
use profiles_api::{ProfileClient, ProfileId, TraitsQuery};

use crate::output::{print_json, OutputFormat};

#[derive(Args)]
pub struct TraitsArgs {
    /// Profile to read, as <type>:<value> (e.g. email:jane@example.com)
    pub profile: ProfileId,

    /// Only return these traits (repeatable or comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub include: Vec<String>,

    /// Include per-trait metadata
    #[arg(long)]
    pub verbose: bool,

    /// Maximum number of traits (1-100)
    #[arg(long, allow_negative_numbers = true)]
    pub limit: Option<i64>,
}

impl TraitsArgs {
    pub fn to_query(&self) -> TraitsQuery {
        TraitsQuery {
            include: self.include.clone(),
            verbose: self.verbose,
            limit: self.limit,
        }
    }
}

pub async fn run(args: &TraitsArgs, client: &ProfileClient, format: &OutputFormat) -> Result<()> {
    let resp = client.get_traits(&args.profile, &args.to_query()).await?;
    print_json(&resp, format)
}
