//! `serde` support for [`BigInt`].
//!
//! Human-readable formats carry the value as its decimal string (integers
//! that fit in a `u64` are also accepted on input). Binary formats carry the
//! limb sequence, least significant first. Both paths validate on the way in.

use std::fmt;

use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde::ser::{Serialize, Serializer};

use crate::bigint::BigInt;
use crate::limb::Limb;
use crate::parse::parse;

impl Serialize for BigInt {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if serializer.is_human_readable() {
            serializer.collect_str(self)
        } else {
            self.limbs().serialize(serializer)
        }
    }
}

impl<'de> Deserialize<'de> for BigInt {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        if deserializer.is_human_readable() {
            deserializer.deserialize_any(DecimalVisitor)
        } else {
            let limbs = Vec::<Limb>::deserialize(deserializer)?;
            BigInt::from_limbs(limbs).map_err(de::Error::custom)
        }
    }
}

struct DecimalVisitor;

impl<'de> Visitor<'de> for DecimalVisitor {
    type Value = BigInt;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a non-negative integer or a string of decimal digits")
    }

    fn visit_u64<E>(self, v: u64) -> Result<BigInt, E>
    where
        E: de::Error,
    {
        Ok(BigInt::from(v))
    }

    fn visit_i64<E>(self, v: i64) -> Result<BigInt, E>
    where
        E: de::Error,
    {
        u64::try_from(v)
            .map(BigInt::from)
            .map_err(|_| de::Error::invalid_value(de::Unexpected::Signed(v), &self))
    }

    fn visit_str<E>(self, v: &str) -> Result<BigInt, E>
    where
        E: de::Error,
    {
        parse(v).map_err(de::Error::custom)
    }
}
