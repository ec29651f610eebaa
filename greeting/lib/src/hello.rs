//! The greeting helper.

/// Literal placed in front of every name, separator included.
pub const GREETING_PREFIX: &str = "Hello ";

/// Builds a greeting for `name`.
///
/// The name is appended verbatim: no trimming, case folding or validation.
/// Every `&str` is accepted, including the empty string.
///
/// ## Examples
///
/// ```
/// use greeting_lib::hello_world;
///
/// assert_eq!(hello_world("Kamu"), "Hello Kamu");
/// assert_eq!(hello_world(""), "Hello ");
/// ```
pub fn hello_world(name: &str) -> String {
    tracing::trace!(name_len = name.len(), "building greeting");

    let mut greeting = String::with_capacity(GREETING_PREFIX.len() + name.len());
    greeting.push_str(GREETING_PREFIX);
    greeting.push_str(name);
    greeting
}
