use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::Args;
use profiles_api::{EventsQuery, ProfileClient, ProfileId};

use crate::output::{print_json, OutputFormat};

#[derive(Args)]
pub struct EventsArgs {
    /// Profile to read, as <type>:<value>
    pub profile: ProfileId,

    /// Only return these events (repeatable or comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub include: Vec<String>,

    /// Leave out these events (repeatable or comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub exclude: Vec<String>,

    /// Earliest event time, RFC 3339 (e.g. 2024-01-01T00:00:00Z)
    #[arg(long)]
    pub start: Option<DateTime<Utc>>,

    /// Latest event time, RFC 3339
    #[arg(long)]
    pub end: Option<DateTime<Utc>>,

    /// Maximum number of events (1-100)
    #[arg(long, allow_negative_numbers = true)]
    pub limit: Option<i64>,

    /// Sort order: asc or desc
    #[arg(long)]
    pub sort: Option<String>,
}

impl EventsArgs {
    pub fn to_query(&self) -> EventsQuery {
        EventsQuery {
            include: self.include.clone(),
            exclude: self.exclude.clone(),
            start: self.start,
            end: self.end,
            limit: self.limit,
            sort: self.sort.clone(),
        }
    }
}

pub async fn run(args: &EventsArgs, client: &ProfileClient, format: &OutputFormat) -> Result<()> {
    let resp = client.get_events(&args.profile, &args.to_query()).await?;
    print_json(&resp, format)
}
