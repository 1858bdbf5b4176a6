//! Command handlers

pub mod compare;
pub mod docs;
pub mod init;
pub mod seed;
pub mod validate;
