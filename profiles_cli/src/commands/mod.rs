//! CLI subcommand implementations, one per profile resource.

pub mod events;
pub mod external_ids;
pub mod links;
pub mod metadata;
pub mod traits;
