use serde::{Deserialize, Serialize};

/// Failed to parse one of the string-backed enums below.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid {field} value: {value}")]
pub struct EnumParseError {
    pub field: String,
    pub value: String,
}

/// Macro to generate enum with as_str + std::str::FromStr pattern.
/// The wire form (serde) is the same string `as_str` returns.
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $s)] $variant),+
        }

        impl $name {
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = EnumParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(EnumParseError {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

str_enum!(Frequency {
    OnceDaily => "once daily",
    TwiceDaily => "twice daily",
    ThreeTimesDaily => "three times daily",
    FourTimesDaily => "four times daily",
    EveryOtherDay => "every other day",
    OnceWeekly => "once weekly",
    AsNeeded => "as needed",
});

impl Default for Frequency {
    fn default() -> Self {
        Self::OnceDaily
    }
}

str_enum!(Screen {
    Hero => "hero",
    Onboarding => "onboarding",
    Dashboard => "dashboard",
});

// Field category named in the "Missing Information" notice.
str_enum!(MissingField {
    Name => "name",
    Dosage => "dosage",
});

str_enum!(NoticeVariant {
    Default => "default",
    Destructive => "destructive",
});
