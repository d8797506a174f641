/// Application-level constants
pub const APP_NAME: &str = "VYVA Health";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Frequency assigned to a freshly added medication.
pub const DEFAULT_FREQUENCY: &str = "once daily";

/// Intake time of a freshly added medication.
pub const DEFAULT_INTAKE_TIME: &str = "08:00";

/// Intake time appended by "Add Time".
pub const ADDED_INTAKE_TIME: &str = "12:00";

/// Next-dose label when a medication has no intake time to show.
pub const NEXT_DOSE_FALLBACK: &str = "8:00 AM";

/// Next-dose label once every displayed medication is taken.
pub const ALL_DONE_LABEL: &str = "All done!";

/// Adherence given to medications carried over from onboarding.
pub const FRESH_ADHERENCE: u8 = 100;

/// Maximum undrained notices kept before the oldest is dropped.
pub const NOTICE_QUEUE_CAPACITY: usize = 32;

/// Longest caregiver contact accepted over IPC, in characters.
pub const CAREGIVER_CONTACT_MAX_CHARS: usize = 200;

/// Whether a caregiver contact fits [`CAREGIVER_CONTACT_MAX_CHARS`].
pub fn caregiver_contact_fits(contact: &str) -> bool {
    contact.chars().count() <= CAREGIVER_CONTACT_MAX_CHARS
}

/// Intake times are 24-hour `HH:MM`.
pub const INTAKE_TIME_FORMAT: &str = "%H:%M";

/// Log filter used when `RUST_LOG` is not set.
pub fn default_log_filter() -> &'static str {
    if cfg!(debug_assertions) {
        "vyva_lib=debug,info"
    } else {
        "vyva_lib=info,warn"
    }
}
