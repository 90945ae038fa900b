//! Macros for declaring closed lifecycle vocabularies.

/// Generate a closed, label-carrying enumeration.
///
/// Each variant is paired with its canonical label. The macro derives
/// `Copy` and hashing, and generates `ALL`, `COUNT`, `index()`, `label()`,
/// `from_label()`, `Display`, `FromStr` and serde support from the same
/// label list, so none of them can drift out of sync. The serde wire form
/// is the label itself, and serde is reached through this crate, so
/// callers do not need their own serde dependency.
///
/// # Example
///
/// ```
/// use intent_lifecycle::lifecycle_enum;
///
/// lifecycle_enum! {
///     pub enum Phase {
///         Warmup => "WARMUP",
///         MainLoop => "MAIN_LOOP",
///     }
/// }
///
/// assert_eq!(Phase::COUNT, 2);
/// assert_eq!(Phase::MainLoop.label(), "MAIN_LOOP");
/// assert_eq!(Phase::from_label("WARMUP"), Some(Phase::Warmup));
/// assert_eq!("MAIN_LOOP".parse::<Phase>().ok(), Some(Phase::MainLoop));
/// ```
///
/// Labels are free-form:
///
/// ```
/// use intent_lifecycle::lifecycle_enum;
///
/// lifecycle_enum! {
///     enum Mode {
///         Alpha => "A",
///     }
/// }
///
/// assert_eq!(serde_json::to_string(&Mode::Alpha).unwrap(), "\"A\"");
/// ```
#[macro_export]
macro_rules! lifecycle_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $label:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
        #[repr(u8)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$(Self::$variant),*];

            /// Number of variants.
            pub const COUNT: usize = Self::ALL.len();

            /// Dense zero-based index, in declaration order.
            #[inline]
            pub const fn index(self) -> usize {
                self as usize
            }

            /// Canonical label.
            #[inline]
            pub const fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label),*
                }
            }

            /// Resolve a canonical label back to its variant.
            pub fn from_label(label: &str) -> Option<Self> {
                match label {
                    $($label => Some(Self::$variant),)*
                    _ => None,
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.label())
            }
        }

        impl $crate::__serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: $crate::__serde::Serializer,
            {
                serializer.serialize_str(self.label())
            }
        }

        impl<'de> $crate::__serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: $crate::__serde::Deserializer<'de>,
            {
                struct LabelVisitor;

                impl<'de> $crate::__serde::de::Visitor<'de> for LabelVisitor {
                    type Value = $name;

                    fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                        write!(f, "a {} label", stringify!($name))
                    }

                    fn visit_str<E>(self, v: &str) -> ::std::result::Result<$name, E>
                    where
                        E: $crate::__serde::de::Error,
                    {
                        $name::from_label(v).ok_or_else(|| E::unknown_variant(v, &[$($label),*]))
                    }
                }

                deserializer.deserialize_str(LabelVisitor)
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::core::UnknownLabel;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::from_label(s).ok_or_else(|| $crate::core::UnknownLabel {
                    kind: stringify!($name),
                    label: s.to_string(),
                })
            }
        }
    };
}
