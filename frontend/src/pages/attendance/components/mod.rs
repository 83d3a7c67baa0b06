pub mod assign_dialog;
pub mod header;
pub mod manual_dialog;
pub mod roster_table;
pub mod schedule_picker;

pub use assign_dialog::AssignUserDialog;
pub use header::AttendanceHeader;
pub use manual_dialog::ManualAttendanceDialog;
pub use roster_table::RosterTable;
pub use schedule_picker::SchedulePicker;
