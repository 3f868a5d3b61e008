// Copyright 2025 the Stylized Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! This crate contains the integration test suite for `stylized_text`.
//!
//! - The `util` module holds the test fonts, the measurer and the shared assertions.
//! - We do not use the default Rust test harness, but instead use this `mod.rs` file as the
//!   entry point to run all other tests, so that every module can share `util`.
//! - Put the "topic" of a test at the start of its name, e.g. `wrap_trims_rows` rather than
//!   `trims_rows_when_wrapping`.

#![allow(missing_docs, reason = "we don't need docs for testing")]

mod util;
