pub mod activity;
pub mod chart;
pub mod stats;
pub mod upcoming;

pub use activity::RecentActivitySection;
pub use chart::AttendanceChart;
pub use stats::StatsCards;
pub use upcoming::UpcomingSchedulesSection;
