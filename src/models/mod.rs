pub mod alert;
pub mod app_state;
pub mod daily_log;
pub mod machine;
pub mod spare_tool;
pub mod user;
