use anyhow::Result;
use clap::Args;
use profiles_api::{ExternalIdsQuery, ProfileClient, ProfileId};

use crate::output::{print_json, OutputFormat};

#[derive(Args)]
pub struct ExternalIdsArgs {
    /// Profile to read, as <type>:<value>
    pub profile: ProfileId,

    /// Only return these id types (repeatable or comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub include: Vec<String>,

    /// Maximum number of ids (1-100)
    #[arg(long, allow_negative_numbers = true)]
    pub limit: Option<i64>,

    /// Include source and timestamps for each id
    #[arg(long)]
    pub verbose: bool,
}

impl ExternalIdsArgs {
    pub fn to_query(&self) -> ExternalIdsQuery {
        ExternalIdsQuery {
            include: self.include.clone(),
            limit: self.limit,
            verbose: self.verbose,
        }
    }
}

pub async fn run(
    args: &ExternalIdsArgs,
    client: &ProfileClient,
    format: &OutputFormat,
) -> Result<()> {
    let resp = client
        .get_external_ids(&args.profile, &args.to_query())
        .await?;
    print_json(&resp, format)
}
