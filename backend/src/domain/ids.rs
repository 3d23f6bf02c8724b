//! Integer identifiers for persisted records.
//!
//! Each table has its own newtype so a planet id can never be passed where a
//! person id is expected.

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
            serde::Serialize, serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Wrap a raw database identifier.
            #[must_use]
            pub const fn new(raw: i32) -> Self {
                Self(raw)
            }

            /// Return the raw database identifier.
            #[must_use]
            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl From<i32> for $name {
            fn from(raw: i32) -> Self {
                Self(raw)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

define_id! {
    /// Primary key of a `users` row.
    UserId
}

define_id! {
    /// Primary key of a `people` row.
    PersonId
}

define_id! {
    /// Primary key of a `planets` row.
    PlanetId
}

define_id! {
    /// Primary key of a favourite link row in either join table.
    LinkId
}
