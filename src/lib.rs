#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod board;
mod common;
mod config;
pub mod domain;
mod feedback;
pub mod session;
mod suggestions;
#[cfg(feature = "std")]
pub mod cli;
#[cfg(feature = "std")]
pub mod client;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
pub mod protocol;
#[cfg(feature = "std")]
pub mod service;
#[cfg(feature = "std")]
pub mod ui;

pub use board::*;
pub use common::*;
pub use config::*;
pub use domain::*;
pub use feedback::*;
pub use session::{GameSession, Request};
pub use suggestions::*;
#[cfg(feature = "std")]
pub use client::GameClient;
#[cfg(feature = "std")]
pub use logging::init_logging;
#[cfg(feature = "std")]
pub use protocol::WordService;
#[cfg(feature = "std")]
pub use service::{HttpService, InMemoryService};
