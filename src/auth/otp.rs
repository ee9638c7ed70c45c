use chrono::{DateTime, Duration, Utc};
use rand::Rng;

pub const OTP_TTL_MINUTES: i64 = 5;

/// Why an OTP redemption failed. `Missing` and `Mismatch` surface to the
/// client as the same "OTP is incorrect" message, but stay distinct here so
/// a replayed code after a successful redemption is never treated as a
/// live mismatch.
#[derive(Debug, PartialEq, Eq)]
pub enum OtpError {
    Missing,
    Mismatch,
    Expired,
}

impl OtpError {
    pub fn message(&self) -> &'static str {
        match self {
            OtpError::Missing | OtpError::Mismatch => "OTP is incorrect",
            OtpError::Expired => "OTP expired",
        }
    }
}

/// Generate a uniform 6-digit code.
pub fn generate() -> String {
    rand::rng().random_range(100_000..=999_999).to_string()
}

pub fn expiry(now: DateTime<Utc>) -> DateTime<Utc> {
    now + Duration::minutes(OTP_TTL_MINUTES)
}

/// Validate a supplied code against the stored one.
///
/// Gate order is fixed: missing, then mismatch, then expiry. A wrong code is
/// always reported as incorrect even if the stored code has also expired.
/// An empty stored code is the "no code issued" sentinel.
pub fn check(
    stored: &str,
    expires_at: Option<DateTime<Utc>>,
    supplied: &str,
    now: DateTime<Utc>,
) -> Result<(), OtpError> {
    if stored.is_empty() {
        return Err(OtpError::Missing);
    }
    if stored != supplied {
        return Err(OtpError::Mismatch);
    }
    match expires_at {
        Some(exp) if now < exp => Ok(()),
        _ => Err(OtpError::Expired),
    }
}
