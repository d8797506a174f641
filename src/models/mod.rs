pub mod enums;
pub mod medication;
pub mod onboarding;

pub use enums::{EnumParseError, Frequency, MissingField, NoticeVariant, Screen};
pub use medication::{DisplayMedication, MedicationEntry};
pub use onboarding::OnboardingResult;
