//! Client front end for the resume optimization service: pre-submit
//! validation, the single-flight submit workflow, and rendering of the
//! returned optimization result.
//! All network traffic goes through optimize_client; no direct reqwest
//! calls anywhere else.

pub mod cli;
pub mod config;
pub mod optimize_client;
pub mod submission;
pub mod view;
