/// Modification timestamps and their comparison policy.
///
/// Change detection is timestamp-only. Two timestamps are equal exactly when
/// their `f64` second values are numerically equal; there is no tolerance
/// window. Two writes landing in the same filesystem timestamp quantum are
/// therefore indistinguishable, and a filesystem that reports a different
/// resolution between runs will flag every file as modified.
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Seconds since the Unix epoch, fractional part included.
/// Negative for times before the epoch.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(f64);

impl From<SystemTime> for Timestamp {
    fn from(t: SystemTime) -> Self {
        match t.duration_since(UNIX_EPOCH) {
            Ok(after) => Self(after.as_secs_f64()),
            Err(before) => Self(-before.duration().as_secs_f64()),
        }
    }
}

impl From<f64> for Timestamp {
    fn from(secs: f64) -> Self {
        Self(secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_exact_equality_has_no_tolerance() {
        let a = Timestamp::from(1_700_000_000.123_456);
        let b = Timestamp::from(1_700_000_000.123_457);
        assert_ne!(a, b);
        assert_eq!(a, Timestamp::from(1_700_000_000.123_456));
    }

    #[test]
    fn test_from_system_time_keeps_fraction() {
        let t = UNIX_EPOCH + Duration::from_millis(100_250);
        assert_eq!(Timestamp::from(t), Timestamp::from(100.25));
    }

    #[test]
    fn test_pre_epoch_is_negative() {
        let t = UNIX_EPOCH - Duration::from_secs(30);
        assert_eq!(Timestamp::from(t), Timestamp::from(-30.0));
    }

    #[test]
    fn test_serializes_as_bare_number() {
        let json = serde_json::to_string(&Timestamp::from(150.5)).unwrap();
        assert_eq!(json, "150.5");
        let back: Timestamp = serde_json::from_str("1700000000.987654321").unwrap();
        assert_eq!(back, Timestamp::from(1_700_000_000.987_654_321));
    }
}
