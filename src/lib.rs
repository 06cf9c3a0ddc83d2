pub mod ide;
pub mod logging;
pub mod ui;
