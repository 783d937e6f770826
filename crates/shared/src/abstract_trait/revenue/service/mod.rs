mod stats;

pub use self::stats::{DynRevenueStatsService, RevenueStatsServiceTrait};
