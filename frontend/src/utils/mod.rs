pub mod generation;
pub mod navigation;
pub mod schedule_time;
pub mod storage;
pub mod time;
pub mod validation;
