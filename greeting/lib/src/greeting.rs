use std::fmt;

use crate::hello::{GREETING_PREFIX, hello_world};

/// An owned greeting built by [`hello_world`].
///
/// Always holds `GREETING_PREFIX` followed by the name it was built from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Greeting(String);

impl Greeting {
    /// Builds the greeting for `name`.
    pub fn new(name: &str) -> Self {
        Self(hello_world(name))
    }

    /// The full greeting text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The name this greeting was built from.
    ///
    /// ```
    /// use greeting_lib::Greeting;
    ///
    /// assert_eq!(Greeting::new("Aku").name(), "Aku");
    /// assert_eq!(Greeting::new("").name(), "");
    /// ```
    pub fn name(&self) -> &str {
        &self.0[GREETING_PREFIX.len()..]
    }

    /// Consumes the greeting, returning the full text.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Greeting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Greeting {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Greeting> for String {
    fn from(greeting: Greeting) -> Self {
        greeting.0
    }
}

impl PartialEq<str> for Greeting {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Greeting {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
