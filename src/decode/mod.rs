//! Response decoder module
//!
//! # Overview
//!
//! Turns raw response bytes into domain values. Dates are parsed per field
//! through the [`DateFormat`] table, enum-like strings follow a per-type
//! unknown-value policy, and most bodies are unwrapped from a single-key
//! envelope before the shape is decoded.

mod compare;
mod dates;
mod decoders;
mod enums;

pub use compare::decode_energy_compare;
pub use dates::{
    distant_past, ApiDate, ApiDateTime, ApiDateTimeOffset, ApiDateTimeSeparated, DateFormat,
    FlexibleDate,
};
pub use decoders::JsonDecoder;
pub(crate) use enums::wire_enum;

#[cfg(test)]
mod tests;
