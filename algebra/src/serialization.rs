use crate::prelude::*;
use ark_std::fmt;
use serde::de::Visitor;

/// Byte conversion used by the serde glue of field and group elements.
pub trait FromToBytes: Sized {
    /// Convert to bytes.
    fn to_sp_bytes(&self) -> Vec<u8>;
    /// Reconstruct from bytes.
    fn from_sp_bytes(bytes: &[u8]) -> core::result::Result<Self, AlgebraError>;
}

/// Visitor accepting either raw bytes or their base64 encoding.
pub struct BytesVisitor;

impl<'de> Visitor<'de> for BytesVisitor {
    type Value = Vec<u8>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a valid base64 string or a byte array")
    }

    fn visit_bytes<E>(self, v: &[u8]) -> core::result::Result<Vec<u8>, E>
    where
        E: serde::de::Error,
    {
        Ok(v.to_vec())
    }

    fn visit_byte_buf<E>(self, v: Vec<u8>) -> core::result::Result<Vec<u8>, E>
    where
        E: serde::de::Error,
    {
        Ok(v)
    }

    fn visit_str<E>(self, v: &str) -> core::result::Result<Vec<u8>, E>
    where
        E: serde::de::Error,
    {
        b64dec(v).map_err(serde::de::Error::custom)
    }

    fn visit_seq<V>(self, mut seq: V) -> core::result::Result<Vec<u8>, V::Error>
    where
        V: serde::de::SeqAccess<'de>,
    {
        let mut bytes = Vec::new();
        while let Some(b) = seq.next_element::<u8>()? {
            bytes.push(b);
        }
        Ok(bytes)
    }
}

/// Implement serde for a type with [`FromToBytes`]: base64 when the format
/// is human readable, raw bytes otherwise.
#[macro_export]
macro_rules! serialize_deserialize {
    ($t:ident) => {
        impl serde::Serialize for $t {
            fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                if serializer.is_human_readable() {
                    serializer.serialize_str(&$crate::utils::b64enc(&self.to_sp_bytes()))
                } else {
                    serializer.serialize_bytes(&self.to_sp_bytes())
                }
            }
        }

        impl<'de> serde::Deserialize<'de> for $t {
            fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let bytes = if deserializer.is_human_readable() {
                    deserializer.deserialize_str($crate::serialization::BytesVisitor)?
                } else {
                    deserializer.deserialize_bytes($crate::serialization::BytesVisitor)?
                };
                $t::from_sp_bytes(bytes.as_slice()).map_err(serde::de::Error::custom)
            }
        }
    };
}

macro_rules! to_from_bytes_scalar {
    ($t:ident) => {
        impl FromToBytes for $t {
            fn to_sp_bytes(&self) -> Vec<u8> {
                self.to_bytes()
            }
            fn from_sp_bytes(bytes: &[u8]) -> core::result::Result<$t, AlgebraError> {
                $t::from_bytes(bytes)
            }
        }
    };
}

macro_rules! to_from_bytes_group {
    ($g:ident) => {
        impl FromToBytes for $g {
            fn to_sp_bytes(&self) -> Vec<u8> {
                self.to_compressed_bytes()
            }
            fn from_sp_bytes(bytes: &[u8]) -> core::result::Result<$g, AlgebraError> {
                $g::from_compressed_bytes(bytes)
            }
        }
    };
}

use crate::bn254::{BN254Scalar, BN254G1};

to_from_bytes_scalar!(BN254Scalar);
to_from_bytes_group!(BN254G1);

serialize_deserialize!(BN254Scalar);
serialize_deserialize!(BN254G1);
