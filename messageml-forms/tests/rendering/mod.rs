//! Whole-document rendering tests.

mod markdown;
mod round_trip;
