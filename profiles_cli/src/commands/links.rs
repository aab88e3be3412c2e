use anyhow::Result;
use clap::Args;
use profiles_api::{ProfileClient, ProfileId};

use crate::output::{print_json, OutputFormat};

#[derive(Args)]
pub struct LinksArgs {
    /// Profile to read, as <type>:<value>
    pub profile: ProfileId,
}

pub async fn run(args: &LinksArgs, client: &ProfileClient, format: &OutputFormat) -> Result<()> {
    let resp = client.get_links(&args.profile).await?;
    print_json(&resp, format)
}
