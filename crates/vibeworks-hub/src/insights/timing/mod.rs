mod daily;
mod deal;
mod launch;
mod recommendations;

pub use daily::{daily_timing, DailyTiming};
pub use deal::{calculate_deal_probability, normalize_deal_value, DealConfidence, DealProbability};
pub use launch::{best_launch_days, MAX_LAUNCH_DAYS};
pub use recommendations::{today_business_recommendations, BusinessRecommendation, TimingCategory};
