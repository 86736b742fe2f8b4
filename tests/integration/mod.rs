//! Integration tests for the relay

mod preflight;
