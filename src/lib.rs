//! Arbitrary-precision non-negative integers built from decimal strings.
//!
//! The core is three pure operations: [`parse`] a digit sequence into a
//! [`BigInt`], [`add`] two of them, and [`render`] the sum back to digits.
//!
//! ```
//! let a = strmath::parse("999999999999999999").unwrap();
//! let b = strmath::parse("1").unwrap();
//! assert_eq!(strmath::render(&strmath::add(&a, &b)), "1000000000000000000");
//! ```

mod add;
mod bigint;
mod chunks;
pub mod error;
pub mod limb;
mod parse;
mod render;
mod serialize;
pub mod storage;

pub use crate::add::add;
pub use crate::bigint::BigInt;
pub use crate::error::{Error, ErrorKind, LimbError, ParseError, Result};
pub use crate::parse::parse;
pub use crate::render::render;
