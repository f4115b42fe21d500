//! Module metadata for compilation units.
//!
//! Later stages annotate each compilation unit with a metadata record that
//! travels alongside its token output. This module defines:
//!
//! - The metadata record itself
//! - Its canonical JSON form and a strict codec for it

pub mod meta;
