//! # mypackage
//!
//! A minimal sample API used as the starting point for new packages.
//!
//! The whole surface is [`echo`]: return a value when one is present,
//! otherwise a fallback. [`echo_or_default`] covers the case where the
//! caller has no fallback of its own and takes [`DEFAULT_FALLBACK`].
//!
//! ## Example
//!
//! ```
//! use mypackage::{echo, echo_or_default};
//!
//! assert_eq!(echo(Some("hi"), "fallback"), "hi");
//! assert_eq!(echo(None, "fallback"), "fallback");
//! assert_eq!(echo_or_default(None), "default");
//! ```
//!
//! ## Features
//!
//! - `log`: emit a `trace`-level record whenever the fallback is taken.

pub mod api;

pub use api::{DEFAULT_FALLBACK, echo, echo_or_default};
