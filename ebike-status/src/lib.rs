//! E-bike availability server.
//!
//! Fetches a GBFS station status feed, picks out a fixed set of docks and
//! shows how many e-bikes each has, as HTML for browsers or plain text for
//! terminals. Runs either as a local HTTP server or behind API Gateway.

pub mod availability;
pub mod config;
pub mod directory;
pub mod feed;
pub mod gateway;
pub mod handler;
pub mod render;
pub mod web;
