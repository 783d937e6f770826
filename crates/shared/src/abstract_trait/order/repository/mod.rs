mod query;

pub use self::query::{DynOrderQueryRepository, OrderQueryRepositoryTrait};
