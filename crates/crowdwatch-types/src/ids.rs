//! Type-safe identifier wrappers.
//!
//! Zone identifiers are small integers assigned by the data source. They are
//! expected to be unique within a snapshot, but nothing in the engine relies
//! on that: alerts copy the id of the zone that raised them, so one zone can
//! produce several alerts sharing an id.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Generates a newtype wrapper around an integer with standard derives.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident($inner:ty)
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
        #[ts(export, export_to = "bindings/")]
        pub struct $name(pub $inner);

        impl $name {
            /// Return the inner integer value.
            pub const fn into_inner(self) -> $inner {
                self.0
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<$inner> for $name {
            fn from(id: $inner) -> Self {
                Self(id)
            }
        }

        impl From<$name> for $inner {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id! {
    /// Identifier of a monitored zone within a snapshot.
    ZoneId(u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_bare_integer() {
        assert_eq!(ZoneId(7).to_string(), "7");
    }

    #[test]
    fn serializes_as_plain_number() {
        let json = serde_json::to_string(&ZoneId(3)).unwrap_or_default();
        assert_eq!(json, "3");
        let back: Result<ZoneId, _> = serde_json::from_str("12");
        assert_eq!(back.ok(), Some(ZoneId(12)));
    }

    #[test]
    fn converts_from_and_into_u32() {
        let id = ZoneId::from(42);
        assert_eq!(u32::from(id), 42);
        assert_eq!(id.into_inner(), 42);
    }
}
