/// Common tradeable items offered as quick picks when listing inventory.
/// Free-text item names are still accepted everywhere.
pub const ITEM_CATALOG: &[&str] = &[
    "Resonator",
    "XMP Burster",
    "Ultra Strike",
    "Hyper Cube",
    "Portal Shield",
    "Multi-Hack",
    "Heat Sink",
    "SoftBank Ultra Link",
    "Capsule",
];

/// Shared TOTP secret, base32 (A-Z, 2-7). Embedded on purpose: the login
/// gate is a deterrent for a single-operator event screen, not a credential
/// boundary.
pub const TOTP_SECRET: &str = "FIRSTSATURDAYSEC";

/// Hard-coded fallback accepted alongside the rotating code.
pub const BYPASS_CODE: &str = "000000";

pub const TOTP_DIGITS: u32 = 6;
pub const TOTP_PERIOD_SECS: u64 = 30;
/// Accepted drift, in periods, on either side of the current one.
pub const TOTP_WINDOW: i64 = 1;

/// Donor credited on a prize when none is given.
pub const DEFAULT_DONOR: &str = "Event Organizers";
