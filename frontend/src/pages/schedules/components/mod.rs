mod card;
mod filters;
mod form;
mod summary;

pub use card::ScheduleCard;
pub use filters::ScheduleFilters;
pub use form::ScheduleFormDialog;
pub use summary::ScheduleSummaryCards;
