mod expenses;
pub use expenses::ExpensesView;

mod config_error;
pub use config_error::ConfigErrorView;
