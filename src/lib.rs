#![warn(missing_debug_implementations, missing_docs, rust_2018_idioms)]
#![deny(unsafe_op_in_unsafe_fn)]
#![cfg_attr(not(feature = "std"), no_std)]

//! A strict and extensible implementation of the generic syntax of IETF [RFC 3986].
//!
//! [RFC 3986]: https://datatracker.ietf.org/doc/html/rfc3986/
//!
//! URIs and relative references are made by a [`Scheme`] or parsed, and are held
//! as values of their components: an [`Authority`], a [`Path`] of segments, a
//! [`Query`] and a [`Fragment`]. Every component is kept canonical, so that two
//! references are equal exactly when their canonical strings are equal:
//!
//! - Characters are percent-encoded exactly when they have to be, with uppercase
//!   hexadecimal digits.
//! - Dot-segments are removed from paths.
//! - Registered names are lower-cased, and a default port is elided.
//!
//! How the values of segments, queries and fragments are encoded can be customized
//! per scheme with [percent-encoding partials](pct_enc::partial).
//!
//! # Examples
//!
//! ```
//! use urin::{Urin, UrinReference};
//!
//! let base: Urin = "http://a/b/c/d;p?q".parse()?;
//! let reference: UrinReference = "../g?y#s".parse()?;
//! let target = base.resolve(&reference);
//! assert_eq!(target.to_string(), "http://a/b/g?y#s");
//! assert_eq!(target.path().segments().len(), 2);
//! # Ok::<_, urin::ParseError>(())
//! ```
//!
//! # Feature flags
//!
//! All features except `std` are disabled by default.
//!
//! - `std`: Enables `std` support. This includes [`Error`] implementations.
//!
//! - `impl-error`: Enables [`Error`] implementations without `std`,
//!   which requires Rust 1.81 or later.
//!
//! - `serde`: Enables `serde` support, which (de)serializes [`Urin`],
//!   [`RelativeReference`] and [`UrinReference`] as strings.
//!
//! [`Error`]: core::error::Error
//! [`Authority`]: component::Authority
//! [`Path`]: path::Path
//! [`Query`]: component::Query
//! [`Fragment`]: component::Fragment

extern crate alloc;

pub mod component;
pub mod error;
pub mod host;
pub mod ip;
pub mod path;
pub mod pct_enc;
pub mod reference;
pub mod scheme;

mod fmt;
mod optional;
mod parser;

pub use error::ParseError;
pub use reference::{RelativeReference, Urin, UrinReference};
pub use scheme::Scheme;

#[cfg(all(feature = "impl-error", not(feature = "std")))]
use core::error::Error;
#[cfg(feature = "std")]
use std::error::Error;
