//! Greeting library.
//!
//! A single pure helper that prefixes a name with `"Hello "`, plus a small
//! newtype for callers that want to keep the result typed.
//!
//! ## Core API
//!
//! - [`hello_world`] - Builds the greeting string for a name
//! - [`Greeting`] - Owned greeting value with access to the original name
//! - [`GREETING_PREFIX`] - The literal prepended to every name
//!
//! ## Examples
//!
//! ```rust
//! use greeting_lib::{Greeting, hello_world};
//!
//! assert_eq!(hello_world("Aku"), "Hello Aku");
//!
//! let greeting = Greeting::new("Kita");
//! assert_eq!(greeting, "Hello Kita");
//! assert_eq!(greeting.name(), "Kita");
//! ```

mod greeting;
mod hello;

pub use greeting::Greeting;
pub use hello::{GREETING_PREFIX, hello_world};
