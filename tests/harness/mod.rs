//! Shared integration test fixtures.
#![allow(dead_code)]

pub mod recording_notifier;
pub mod stub_http;
