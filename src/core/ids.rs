//! Identifier newtypes shared by the machine model and the lattice.
//!
//! All identifiers are opaque strings. They are only ever compared for
//! equality, ordered for deterministic iteration, and displayed in logs.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Generate a string-backed identifier newtype.
///
/// The generated type is `Clone + Eq + Ord + Hash`, serializes transparently
/// as a plain string, and converts from `&str` and `String`.
macro_rules! string_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create an identifier from anything string-like.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Borrow the identifier text.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }
    };
}

string_id! {
    /// Identity of a state within one machine.
    StateId
}

string_id! {
    /// Identity of an assembly (the context a lattice value belongs to).
    AssemblyId
}

string_id! {
    /// Identity of a sub-machine inside an assembly.
    SubmachineId
}

string_id! {
    /// Identity of a transition inside a sub-machine.
    TransitionId
}

string_id! {
    /// Identity of an event understood by a sub-machine.
    EventId
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_display_their_text() {
        assert_eq!(StateId::new("Idle").to_string(), "Idle");
        assert_eq!(EventId::from("tick").as_str(), "tick");
    }

    #[test]
    fn ids_serialize_transparently() {
        let id = SubmachineId::new("door");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"door\"");

        let back: SubmachineId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn ids_order_lexically() {
        let mut ids = vec![StateId::new("b"), StateId::new("a"), StateId::new("c")];
        ids.sort();
        assert_eq!(ids, vec![StateId::new("a"), StateId::new("b"), StateId::new("c")]);
    }
}
