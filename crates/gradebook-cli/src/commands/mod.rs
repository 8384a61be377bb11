pub mod add;
pub mod export;
pub mod init;
pub mod list;
pub mod shell;
