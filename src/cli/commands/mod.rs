pub mod alerts;
pub mod audit;
pub mod backup;
pub mod config;
pub mod dashboard;
pub mod export;
pub mod init;
pub mod log;
pub mod machine;
pub mod notify;
pub mod session;
pub mod tools;
pub mod user;
