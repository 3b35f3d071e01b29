//! Career planner client.
//!
//! Collects a profile through [`form`], posts it to the roadmap API through
//! [`client`], tracks the request lifecycle in [`controller`] / [`state`], and
//! renders the returned roadmap with [`view`].

pub mod cli;
pub mod client;
pub mod config;
pub mod controller;
pub mod form;
pub mod state;
pub mod terminal;
pub mod view;
