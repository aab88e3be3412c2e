mod common;
pub use self::common::{Query, SortOrder, MAX_LIMIT, MIN_LIMIT};

mod traits;
pub use self::traits::TraitsQuery;

mod events;
pub use self::events::EventsQuery;

mod external_ids;
pub use self::external_ids::ExternalIdsQuery;

mod metadata;
pub use self::metadata::MetadataQuery;
