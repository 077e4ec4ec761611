//! TTF data of the Anton fonts.
//!
//! Every module is generated by `anton-gen`. To refresh them from upstream:
//!
//! ```text
//! cargo run -p anton-gen -- --out-dir crates/anton/src
//! ```

#[path = "antonregular/data.rs"]
pub mod antonregular;
