//! Macro for implementing Display and FromStr for domain enums
//!
//! Actor kinds, schedule shapes and violation kinds all travel as lowercase
//! strings at the boundary. This macro gives each of them one consistent
//! `Display`/`FromStr` pair with case-insensitive parsing.
//!
//! # Example
//!
//! ```rust
//! use shiftguard_domain::impl_domain_status_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Shift {
//!     Morning,
//!     Evening,
//! }
//!
//! impl_domain_status_conversions!(Shift {
//!     Morning => "morning",
//!     Evening => "evening",
//! });
//!
//! assert_eq!(Shift::Morning.to_string(), "morning");
//! assert_eq!("EVENING".parse::<Shift>().unwrap(), Shift::Evening);
//! ```

/// Implements Display and FromStr traits for domain enums
///
/// # Arguments
///
/// * `$enum_name` - The name of the enum type
/// * `$variant => $str` - Mapping of enum variants to their lowercase string
///   representations
#[macro_export]
macro_rules! impl_domain_status_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl ::std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                match self {
                    $(Self::$variant => f.write_str($str),)+
                }
            }
        }

        impl ::std::str::FromStr for $enum_name {
            type Err = ::std::string::String;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                match s.to_lowercase().as_str() {
                    $($str => Ok(Self::$variant),)+
                    _ => Err(format!("Invalid {}: {}", stringify!($enum_name), s)),
                }
            }
        }
    };
}
