use anyhow::Result;
use clap::Args;
use profiles_api::{MetadataQuery, ProfileClient, ProfileId};

use crate::output::{print_json, OutputFormat};

#[derive(Args)]
pub struct MetadataArgs {
    /// Profile to read, as <type>:<value>
    pub profile: ProfileId,

    /// Ask for verbose metadata
    #[arg(long)]
    pub verbose: bool,
}

pub async fn run(
    args: &MetadataArgs,
    client: &ProfileClient,
    format: &OutputFormat,
) -> Result<()> {
    let query = MetadataQuery::default().with_verbose(args.verbose);
    let resp = client.get_metadata(&args.profile, &query).await?;
    print_json(&resp, format)
}
