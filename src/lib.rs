//! Terminal host for the authenticator-app enrollment wizard.
//!
//! Wires the `te-app` orchestrator to the HTTP verification service and to
//! terminal implementations of the form engine, alert channel and renderer.

pub mod adapters;
pub mod bootstrap;
pub mod cli;
pub mod host;
