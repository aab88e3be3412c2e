mod profile_id;
pub use self::profile_id::ProfileId;

mod resource;
pub use self::resource::Resource;
