//! String-backed enums with an explicit unknown-value policy
//!
//! `lenient(Fallback)` maps any unrecognized wire string to the fallback
//! variant. `strict("label")` fails the decode with `Unknown {label}: {raw}`.

/// Declare a wire enum with its decode strategy
macro_rules! wire_enum {
    (@define $(#[$meta:meta])* $vis:vis $name:ident { $($(#[$vmeta:meta])* $variant:ident => $wire:literal),+ }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        $vis enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $name {
            /// Every variant, in declaration order
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Wire string for this variant
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $wire),+
                }
            }

            fn known(raw: &str) -> Option<Self> {
                match raw {
                    $($wire => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }
    };

    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident: lenient($fallback:ident) {
            $($(#[$vmeta:meta])* $variant:ident => $wire:literal),+ $(,)?
        }
    ) => {
        wire_enum!(@define $(#[$meta])* $vis $name { $($(#[$vmeta])* $variant => $wire),+ });

        impl $name {
            /// Decode a wire string, falling back on unknown values
            pub fn from_wire(raw: &str) -> Self {
                Self::known(raw).unwrap_or(Self::$fallback)
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(deserializer: D) -> ::std::result::Result<Self, D::Error> {
                let raw = <String as ::serde::Deserialize>::deserialize(deserializer)?;
                Ok(Self::from_wire(&raw))
            }
        }
    };

    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident: strict($label:literal) {
            $($(#[$vmeta:meta])* $variant:ident => $wire:literal),+ $(,)?
        }
    ) => {
        wire_enum!(@define $(#[$meta])* $vis $name { $($(#[$vmeta])* $variant => $wire),+ });

        impl $name {
            /// Decode a wire string, rejecting unknown values
            pub fn from_wire(raw: &str) -> $crate::error::Result<Self> {
                Self::known(raw)
                    .ok_or_else(|| $crate::error::Error::decoding(format!("Unknown {}: {raw}", $label)))
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(deserializer: D) -> ::std::result::Result<Self, D::Error> {
                let raw = <String as ::serde::Deserialize>::deserialize(deserializer)?;
                Self::known(&raw).ok_or_else(|| {
                    <D::Error as ::serde::de::Error>::custom(format!("Unknown {}: {raw}", $label))
                })
            }
        }
    };
}

pub(crate) use wire_enum;
