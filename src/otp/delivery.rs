//! # Delivered One-Time Codes
//!
//! Random numeric codes issued out-of-band (email or SMS; the transports
//! themselves live outside this crate). A code is stored hashed, may be
//! redeemed once, and only inside the configured delivery window.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use subtle::ConstantTimeEq;
use uuid::Uuid;

use crate::errors::{MfaError, MfaResult};
use crate::keys::checksum::encode_byte_array;
use crate::keys::hex::hex_encode;

// ==================
// Delivery Channel
// ==================

/// Out-of-band channel a code was sent over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryChannel {
    Email,
    Sms,
}

impl DeliveryChannel {
    /// Returns string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryChannel::Email => "email",
            DeliveryChannel::Sms => "sms",
        }
    }
}

// ==================
// Delivered Code
// ==================

/// A one-time code issued for out-of-band delivery
///
/// Only the hash of the code is retained; the raw code is returned once
/// at issue time and handed to the (external) transport.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveredCode {
    pub id: Uuid,
    pub user_id: Uuid,
    pub channel: DeliveryChannel,
    code_hash: String,
    pub issued_at: DateTime<Utc>,
    pub consumed: bool,
}

impl DeliveredCode {
    /// Issue a new code of `digits` decimal digits.
    ///
    /// Returns the record to keep and the raw code to deliver.
    pub fn issue(user_id: Uuid, channel: DeliveryChannel, digits: u32) -> (Self, String) {
        let mut rng = rand::thread_rng();
        let value: u32 = rng.gen_range(0..10u32.pow(digits));
        let raw = format!("{:0>width$}", value, width = digits as usize);

        let record = Self {
            id: Uuid::new_v4(),
            user_id,
            channel,
            code_hash: hash_code(&raw),
            issued_at: Utc::now(),
            consumed: false,
        };
        (record, raw)
    }

    /// Whether the code is past its delivery window at `now`
    pub fn is_expired(&self, now: DateTime<Utc>, window_secs: i64) -> bool {
        now - self.issued_at > Duration::seconds(window_secs)
    }

    /// Redeem the code.
    ///
    /// A consumed or expired code is an error; a wrong code is `Ok(false)`
    /// and leaves the record redeemable.
    pub fn verify(&mut self, code: &str, now: DateTime<Utc>, window_secs: i64) -> MfaResult<bool> {
        if self.consumed {
            return Err(MfaError::CodeAlreadyUsed);
        }
        if self.is_expired(now, window_secs) {
            return Err(MfaError::CodeExpired);
        }

        let presented = hash_code(code);
        if bool::from(presented.as_bytes().ct_eq(self.code_hash.as_bytes())) {
            self.consumed = true;
            Ok(true)
        } else {
            Ok(false)
        }
    }
}

/// Hash a code for storage
fn hash_code(code: &str) -> String {
    hex_encode(&encode_byte_array(32, code.as_bytes()))
}
