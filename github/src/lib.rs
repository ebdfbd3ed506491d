//! Types and a client for the assignee endpoints of Github's v3 API
//! https://developer.github.com/v3/issues/assignees/

pub mod client;
mod common;
mod user;

pub use client::Client;
pub use common::*;
pub use user::*;
