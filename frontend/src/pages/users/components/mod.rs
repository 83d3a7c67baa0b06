mod filters;
mod form;
mod table;

pub use filters::UserFilters;
pub use form::UserFormDialog;
pub use table::UserTable;
