//! Macro for string conversions on closed vocabulary enums
//!
//! Policy enums (hours mode, notification roles, editor sections) travel as
//! fixed strings in JSON, deep links and log fields. This macro gives them a
//! single source of truth for those strings.
//!
//! # Example
//!
//! ```rust
//! use servdesk_domain::impl_domain_status_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Channel {
//!     Email,
//!     Chat,
//! }
//!
//! impl_domain_status_conversions!(Channel {
//!     Email => "email",
//!     Chat => "chat",
//! });
//!
//! assert_eq!(Channel::Chat.to_string(), "chat");
//! assert_eq!("EMAIL".parse::<Channel>().unwrap(), Channel::Email);
//! assert_eq!(Channel::ALL.len(), 2);
//! ```

/// Implements `as_str`, `ALL`, `Display` and case-insensitive `FromStr`.
///
/// The string literals must be lowercase for parsing to round-trip.
#[macro_export]
macro_rules! impl_domain_status_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl $enum_name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$enum_name] = &[$(Self::$variant),+];

            /// The canonical string form.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $str,)+
                }
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($str => Ok(Self::$variant),)+
                    _ => Err(format!("Invalid {}: {}", stringify!($enum_name), s)),
                }
            }
        }
    };
}
