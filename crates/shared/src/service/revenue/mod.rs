mod stats;

pub use self::stats::RevenueStatsService;
