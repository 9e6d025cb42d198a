// Standard Library Imports
use std::{
    fmt::{self, Display, Formatter},
    ops::BitXor,
    str::FromStr,
};

// External Crate Imports
use color_eyre::{
    Report, Result,
    eyre::{WrapErr, eyre},
};
use ripemd::Ripemd160;
use sha3::{Digest, Sha3_256};
use thiserror::Error;

// Public API ==========================================================================================================

pub const ADDRESS_BINARY_SIZE: usize = 20;
pub const PUBLIC_KEY_SIZE: usize = 32;

/// A Zif address: the RIPEMD-160 of the SHA3-256 of a peer's public key.
///
/// Addresses order byte-wise, which is also how the DHT sorts them. Hashing the key (rather than using it directly)
/// keeps the address format stable even if the key algorithm changes.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct Address([u8; ADDRESS_BINARY_SIZE]);

impl Address {
    // NOTE: Chosen so that every encoded address starts with a `Z`
    const VERSION: u8 = 0x51;

    pub fn from_public_key(key: &[u8]) -> Result<Self> {
        if key.len() != PUBLIC_KEY_SIZE {
            return Err(eyre!(
                "public key is not {PUBLIC_KEY_SIZE} bytes (got {})",
                key.len()
            ));
        }

        let first_hash = Sha3_256::digest(key);
        let second_hash = Ripemd160::digest(first_hash);

        Ok(Self(second_hash.into()))
    }

    #[must_use]
    pub const fn from_bytes(raw: [u8; ADDRESS_BINARY_SIZE]) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; ADDRESS_BINARY_SIZE] {
        &self.0
    }

    pub fn decode(value: &str) -> Result<Self> {
        let decoded = bs58::decode(value)
            .with_check(Some(Self::VERSION))
            .into_vec()
            .wrap_err_with(|| format!("failed to decode the address {value:?}"))?;

        // NOTE: The version byte is checked by `bs58`, but is still left at the front of the decoded bytes
        let raw = decoded
            .get(1..)
            .and_then(|raw| raw.try_into().ok())
            .ok_or_else(|| {
                eyre!("the address {value:?} does not decode to {ADDRESS_BINARY_SIZE} bytes")
            })?;

        Ok(Self(raw))
    }

    /// The number of leading zero bits. Called on the `^` of two addresses, this is the k-bucket one belongs in from
    /// the point of view of the other. Identical addresses land in the last bucket.
    #[must_use]
    pub fn leading_zeroes(&self) -> usize {
        self.0
            .iter()
            .position(|&byte| byte != 0)
            .map_or(ADDRESS_BINARY_SIZE * 8 - 1, |index| {
                index * 8 + self.0[index].leading_zeros() as usize
            })
    }
}

impl Display for Address {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let encoded = bs58::encode(self.0)
            .with_check_version(Self::VERSION)
            .into_string();

        f.write_str(&encoded)
    }
}

impl FromStr for Address {
    type Err = Report;

    fn from_str(s: &str) -> Result<Self> {
        Self::decode(s)
    }
}

impl BitXor for Address {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self {
        Self(std::array::from_fn(|i| self.0[i] ^ rhs.0[i]))
    }
}

/// Returned when an address can't be turned into a reachable peer.
#[derive(Clone, Eq, PartialEq, Debug, Error)]
#[error("failed to resolve address, address may not exist or is not reachable")]
pub struct AddressResolutionError {
    pub address: Address,
}

// Unit Tests ==========================================================================================================

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use super::*;

    const ZERO_KEY: [u8; 32] = [0; 32];
    const ZERO_KEY_RAW: [u8; 20] = [
        0x2f, 0x0a, 0x4e, 0x10, 0x6c, 0xbc, 0x92, 0x24, 0xdf, 0x7a, 0xc5, 0xe2, 0xc6, 0xa9, 0xd5, 0x25, 0x2e, 0x70,
        0xcb, 0x65,
    ];
    const ZERO_KEY_ADDRESS: &str = "Zffarp46QLFxWQ9pecXsjXPpAArWHSYr5B";

    const COUNTING_KEY_RAW: [u8; 20] = [
        0x12, 0x57, 0x22, 0x1e, 0xca, 0x87, 0xac, 0x90, 0x8d, 0xd5, 0xfc, 0x9a, 0xb4, 0x83, 0x63, 0xe0, 0x84, 0x59,
        0x68, 0x18,
    ];
    const COUNTING_KEY_ADDRESS: &str = "Zd3qJNkukokeEWo4BA8yoqhGYJku1ZdzXu";

    fn counting_key() -> Vec<u8> {
        (0..32).collect()
    }

    #[test]
    fn from_public_key() {
        let zero = Address::from_public_key(&ZERO_KEY).unwrap();
        assert_eq!(zero.as_bytes(), &ZERO_KEY_RAW);
        assert_eq!(zero.to_string(), ZERO_KEY_ADDRESS);

        let counting = Address::from_public_key(&counting_key()).unwrap();
        assert_eq!(counting.as_bytes(), &COUNTING_KEY_RAW);
        assert_eq!(counting.to_string(), COUNTING_KEY_ADDRESS);
    }

    #[test]
    fn rejects_wrongly_sized_keys() {
        for len in [0, 31, 33, 64] {
            let report = Address::from_public_key(&vec![7; len]).unwrap_err();

            assert_eq!(
                report.to_string(),
                format!("public key is not 32 bytes (got {len})")
            );
        }
    }

    #[test]
    fn decode() {
        let zero: Address = ZERO_KEY_ADDRESS.parse().unwrap();
        assert_eq!(zero, Address::from_bytes(ZERO_KEY_RAW));

        let counting = Address::decode(COUNTING_KEY_ADDRESS).unwrap();
        assert_eq!(counting.as_bytes(), &COUNTING_KEY_RAW);
    }

    #[test]
    fn decode_bad_checksum() {
        let report = Address::decode("Zffarp46QLFxWQ9pecXsjXPpAArWHSYr5C").unwrap_err();

        assert!(report.to_string().starts_with("failed to decode the address"));
    }

    #[test]
    fn decode_wrong_version() {
        let bitcoin_style = bs58::encode(ZERO_KEY_RAW)
            .with_check_version(0x00)
            .into_string();

        assert!(Address::decode(&bitcoin_style).is_err());
    }

    #[test]
    fn decode_wrong_length() {
        let short = bs58::encode([0xab; 4])
            .with_check_version(Address::VERSION)
            .into_string();

        let report = Address::decode(&short).unwrap_err();
        assert!(report.to_string().ends_with("does not decode to 20 bytes"));
    }

    #[test]
    fn ordering() {
        let counting = Address::from_bytes(COUNTING_KEY_RAW);
        let zero = Address::from_bytes(ZERO_KEY_RAW);

        // 0x12.. < 0x2f..
        assert!(counting < zero);
        assert_eq!(zero.cmp(&Address::from_bytes(ZERO_KEY_RAW)), Ordering::Equal);

        let mut tail = ZERO_KEY_RAW;
        tail[19] += 1;
        assert!(zero < Address::from_bytes(tail));
    }

    #[test]
    fn xor() {
        let counting = Address::from_bytes(COUNTING_KEY_RAW);
        let zero = Address::from_bytes(ZERO_KEY_RAW);

        let distance = zero ^ counting;
        assert_eq!(distance.as_bytes()[0], 0x2f ^ 0x12);
        assert_eq!(distance ^ counting, zero);
        assert_eq!(zero ^ zero, Address::default());
    }

    #[test]
    fn leading_zeroes() {
        let mut raw = [0; ADDRESS_BINARY_SIZE];
        assert_eq!(Address::from_bytes(raw).leading_zeroes(), 159);

        raw[19] = 0x01;
        assert_eq!(Address::from_bytes(raw).leading_zeroes(), 159);

        raw[1] = 0x10;
        assert_eq!(Address::from_bytes(raw).leading_zeroes(), 11);

        raw[0] = 0x80;
        assert_eq!(Address::from_bytes(raw).leading_zeroes(), 0);

        let zero = Address::from_bytes(ZERO_KEY_RAW);
        let counting = Address::from_bytes(COUNTING_KEY_RAW);
        // 0x2f ^ 0x12 = 0x3d = 0b0011_1101
        assert_eq!((zero ^ counting).leading_zeroes(), 2);
        assert_eq!((zero ^ zero).leading_zeroes(), 159);
    }

    #[test]
    fn resolution_error() {
        let address = Address::from_bytes(ZERO_KEY_RAW);
        let report = Report::new(AddressResolutionError { address });

        assert_eq!(
            report.to_string(),
            "failed to resolve address, address may not exist or is not reachable"
        );
        assert_eq!(
            report.downcast_ref::<AddressResolutionError>(),
            Some(&AddressResolutionError { address })
        );
    }
}
