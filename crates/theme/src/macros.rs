/// Declares a closed set of token keys with canonical string names.
///
/// Generates the enum plus `ALL`, `as_str`, `Display` and `FromStr`. Variant
/// order is the canonical order used for iteration and `Ord`.
macro_rules! token_key {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $text:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
            serde::Serialize, serde::Deserialize,
        )]
        $vis enum $name {
            $( $(#[$vmeta])* #[serde(rename = $text)] $variant ),+
        }

        impl $name {
            /// Every key, in canonical order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Canonical name of this key
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::error::UnknownKey;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                match s {
                    $($text => ::std::result::Result::Ok($name::$variant),)+
                    _ => ::std::result::Result::Err($crate::error::UnknownKey {
                        kind: stringify!($name),
                        key: s.to_string(),
                    }),
                }
            }
        }
    };
}
