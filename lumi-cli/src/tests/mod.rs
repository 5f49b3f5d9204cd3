//! Shared test harness modules for the Lumi CLI.
#![expect(
    clippy::panic,
    reason = "Tests assert panic branches to surface unexpected CLI outcomes"
)]

use super::*;

mod extract_unit;
mod helpers;
