pub mod alerts;
pub mod audit;
pub mod auth;
pub mod backup;
pub mod config;
pub mod daily_log;
pub mod fleet;
pub mod inventory;
pub mod photo;
pub mod users;
pub mod workspace;

#[cfg(test)]
pub(crate) mod test_support;
