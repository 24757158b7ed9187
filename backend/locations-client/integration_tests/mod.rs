//! Integration tests for the locations client.
//!
//! Every test runs the full classification path over real HTTP against a
//! wiremock server: build request, send, decode envelope, classify.

mod api_client;
mod helpers;
