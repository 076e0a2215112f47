//! Call-data encoding for ERC-20 methods.
//!
//! Payloads follow the static ABI layout: the 4-byte selector followed by one
//! 32-byte word per argument. Addresses and amounts are left-padded with
//! zeros.

use crate::{AddressField, Erc20Clause, Error, Method, MethodRegistry};
use alloy_primitives::{Address, Bytes};
use hexutil::{is_valid_decimal_value, left_pad_bytes, parse_address};
use num_bigint::BigUint;
use tracing::debug;

/// ABI word size.
const WORD: usize = 32;

/// Left-pad `bytes` to a 32-byte ABI word. Longer input is returned as is.
pub fn pad32(bytes: &[u8]) -> Vec<u8> {
    left_pad_bytes(bytes, WORD)
}

/// Decode a hex address into its 20 raw bytes.
fn address_bytes(address: &str, field: AddressField) -> Result<Address, Error> {
    parse_address(address).map_err(|_| Error::InvalidAddress {
        field,
        address: address.to_string(),
    })
}

/// Minimal big-endian bytes of a decimal digit string of any size.
fn big_endian_bytes(value: &str) -> Result<Vec<u8>, Error> {
    // BigUint alone would also accept a leading `+` and `_` separators.
    if !is_valid_decimal_value(value) {
        return Err(Error::ValueParseError(value.to_string()));
    }

    let number = BigUint::parse_bytes(value.as_bytes(), 10)
        .ok_or_else(|| Error::ValueParseError(value.to_string()))?;
    Ok(number.to_bytes_be())
}

/// Packs [`Erc20Clause`]s into call data, reading selectors from a shared
/// [`MethodRegistry`].
#[derive(Debug, Clone, Copy)]
pub struct PayloadEncoder<'a> {
    registry: &'a MethodRegistry,
}

impl<'a> PayloadEncoder<'a> {
    pub const fn new(registry: &'a MethodRegistry) -> Self {
        Self { registry }
    }

    /// Encode a call to the method named `method`.
    ///
    /// `arg` is the extra address of `transferFrom` (the second address slot)
    /// and `allowance` (the owner). When it is `None` the clause's aux address
    /// is used instead. It is ignored by every other method.
    pub fn payload(
        &self,
        clause: &Erc20Clause,
        method: &str,
        arg: Option<&str>,
    ) -> Result<Bytes, Error> {
        let method: Method = method.parse()?;
        self.encode(clause, method, arg)
    }

    /// Encode a call to `method`. See [`payload`](Self::payload).
    pub fn encode(
        &self,
        clause: &Erc20Clause,
        method: Method,
        arg: Option<&str>,
    ) -> Result<Bytes, Error> {
        let mut payload = Vec::with_capacity(4 + 3 * WORD);
        payload.extend_from_slice(self.registry.selector(method).as_slice());

        match method {
            Method::Name | Method::Symbol | Method::Decimals | Method::TotalSupply => {}
            Method::BalanceOf => {
                let recipient = address_bytes(clause.recipient(), AddressField::Recipient)?;
                payload.extend(pad32(recipient.as_slice()));
            }
            Method::Transfer | Method::Approve => {
                let recipient = address_bytes(clause.recipient(), AddressField::Recipient)?;
                let value = big_endian_bytes(clause.value())?;
                payload.extend(pad32(recipient.as_slice()));
                payload.extend(pad32(&value));
            }
            Method::TransferFrom => {
                // Slots: clause recipient, then the supplied address, then value.
                let recipient = address_bytes(clause.recipient(), AddressField::Recipient)?;
                let from = address_bytes(argument(clause, arg)?, AddressField::Argument)?;
                let value = big_endian_bytes(clause.value())?;
                payload.extend(pad32(recipient.as_slice()));
                payload.extend(pad32(from.as_slice()));
                payload.extend(pad32(&value));
            }
            Method::Allowance => {
                // Only the owner slot is packed, the spender is never written.
                let owner = address_bytes(argument(clause, arg)?, AddressField::Argument)?;
                payload.extend(pad32(owner.as_slice()));
            }
        }

        debug!(
            method = %method,
            token = %clause.token_address(),
            len = payload.len(),
            "Encoded ERC-20 payload"
        );

        Ok(Bytes::from(payload))
    }

    /// `name()` call data.
    pub fn name(&self) -> Bytes {
        self.selector_only(Method::Name)
    }

    /// `symbol()` call data.
    pub fn symbol(&self) -> Bytes {
        self.selector_only(Method::Symbol)
    }

    /// `decimals()` call data.
    pub fn decimals(&self) -> Bytes {
        self.selector_only(Method::Decimals)
    }

    /// `totalSupply()` call data.
    pub fn total_supply(&self) -> Bytes {
        self.selector_only(Method::TotalSupply)
    }

    /// `balanceOf(recipient)` call data.
    pub fn balance_of(&self, clause: &Erc20Clause) -> Result<Bytes, Error> {
        self.encode(clause, Method::BalanceOf, None)
    }

    /// `transfer(recipient, value)` call data.
    pub fn transfer(&self, clause: &Erc20Clause) -> Result<Bytes, Error> {
        self.encode(clause, Method::Transfer, None)
    }

    /// `approve(recipient, value)` call data.
    pub fn approve(&self, clause: &Erc20Clause) -> Result<Bytes, Error> {
        self.encode(clause, Method::Approve, None)
    }

    /// `transferFrom(recipient, from, value)` call data.
    pub fn transfer_from(&self, clause: &Erc20Clause, from: &str) -> Result<Bytes, Error> {
        self.encode(clause, Method::TransferFrom, Some(from))
    }

    /// `allowance(owner)` call data.
    pub fn allowance(&self, clause: &Erc20Clause, owner: &str) -> Result<Bytes, Error> {
        self.encode(clause, Method::Allowance, Some(owner))
    }

    fn selector_only(&self, method: Method) -> Bytes {
        Bytes::copy_from_slice(self.registry.selector(method).as_slice())
    }
}

fn argument<'c>(clause: &'c Erc20Clause, arg: Option<&'c str>) -> Result<&'c str, Error> {
    arg.or_else(|| clause.aux_address())
        .ok_or_else(|| Error::InvalidAddress {
            field: AddressField::Argument,
            address: String::new(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Erc20ClauseBuilder;
    use alloy_primitives::{hex, U256};
    use alloy_sol_types::SolCall;
    use binding::token::ERC20;

    const ADDRESS: &str = "0x27d22890587cfada7fec247c5180d73de6c670c4";
    const CONTRACT_ADDRESS: &str = "0xf6fe970533fe5c63d196139b14522eb2956f8621";
    const FROM_ADDRESS: &str = "0x0bf4a8e0d09c3b16bb6b90362bc4218589b0a567";
    const FIFTY_TOKENS: &str = "50000000000000000000";

    fn clause(value: &str) -> Erc20Clause {
        Erc20ClauseBuilder::new()
            .with_recipient(ADDRESS)
            .with_token_address(CONTRACT_ADDRESS)
            .with_value(value)
            .build()
            .unwrap()
    }

    #[test]
    fn test_pad32() {
        let padded = pad32(&[0x01, 0x02, 0x03]);
        assert_eq!(padded.len(), 32);
        assert_eq!(&padded[29..], &[0x01, 0x02, 0x03]);
        assert!(padded[..29].iter().all(|b| *b == 0));

        assert_eq!(pad32(&[]), vec![0u8; 32]);

        let longer = vec![0xffu8; 33];
        assert_eq!(pad32(&longer), longer);
    }

    #[test]
    fn test_big_endian_bytes() {
        assert_eq!(big_endian_bytes("3").unwrap(), vec![0x03]);
        assert_eq!(big_endian_bytes("256").unwrap(), vec![0x01, 0x00]);
        assert_eq!(
            big_endian_bytes(FIFTY_TOKENS).unwrap(),
            hex::decode("02b5e3af16b1880000").unwrap()
        );
        assert_eq!(pad32(&big_endian_bytes("0").unwrap()), vec![0u8; 32]);
    }

    #[test]
    fn test_big_endian_bytes_rejects_non_digits() {
        for value in ["", "+3", "1_000", "1.5", "-1", "0x10"] {
            assert_eq!(
                big_endian_bytes(value),
                Err(Error::ValueParseError(value.to_string()))
            );
        }
    }

    #[test]
    fn test_getters() {
        let registry = MethodRegistry::new();
        let encoder = PayloadEncoder::new(&registry);
        let clause = clause("3");

        let cases = [
            ("name", "06fdde03", encoder.name()),
            ("symbol", "95d89b41", encoder.symbol()),
            ("decimals", "313ce567", encoder.decimals()),
            ("totalSupply", "18160ddd", encoder.total_supply()),
        ];

        for (method, expected, typed) in cases {
            let payload = encoder.payload(&clause, method, None).unwrap();
            assert_eq!(hex::encode(&payload), expected);
            assert_eq!(payload, typed);
        }
    }

    #[test]
    fn test_balance_of() {
        let registry = MethodRegistry::new();
        let encoder = PayloadEncoder::new(&registry);

        let payload = encoder.payload(&clause("3"), "balanceOf", None).unwrap();
        assert_eq!(
            hex::encode(&payload),
            "70a0823100000000000000000000000027d22890587cfada7fec247c5180d73de6c670c4"
        );
    }

    #[test]
    fn test_transfer() {
        let registry = MethodRegistry::new();
        let encoder = PayloadEncoder::new(&registry);

        let payload = encoder.transfer(&clause(FIFTY_TOKENS)).unwrap();
        assert_eq!(
            hex::encode(&payload),
            "a9059cbb\
             00000000000000000000000027d22890587cfada7fec247c5180d73de6c670c4\
             000000000000000000000000000000000000000000000002b5e3af16b1880000"
        );
    }

    #[test]
    fn test_transfer_matches_sol_binding() {
        let registry = MethodRegistry::new();
        let encoder = PayloadEncoder::new(&registry);

        let expected = ERC20::transferCall {
            recipient: parse_address(ADDRESS).unwrap(),
            amount: U256::from(50_000_000_000_000_000_000u128),
        }
        .abi_encode();

        let payload = encoder.transfer(&clause(FIFTY_TOKENS)).unwrap();
        assert_eq!(&payload[..], expected.as_slice());
    }

    #[test]
    fn test_approve_shares_transfer_layout() {
        let registry = MethodRegistry::new();
        let encoder = PayloadEncoder::new(&registry);
        let clause = clause(FIFTY_TOKENS);

        let approve = encoder.approve(&clause).unwrap();
        let transfer = encoder.transfer(&clause).unwrap();

        assert_eq!(hex::encode(&approve[..4]), "095ea7b3");
        assert_eq!(approve[4..], transfer[4..]);
    }

    #[test]
    fn test_transfer_from() {
        let registry = MethodRegistry::new();
        let encoder = PayloadEncoder::new(&registry);

        let payload = encoder
            .payload(&clause(FIFTY_TOKENS), "transferFrom", Some(FROM_ADDRESS))
            .unwrap();
        assert_eq!(
            hex::encode(&payload),
            "23b872dd\
             00000000000000000000000027d22890587cfada7fec247c5180d73de6c670c4\
             0000000000000000000000000bf4a8e0d09c3b16bb6b90362bc4218589b0a567\
             000000000000000000000000000000000000000000000002b5e3af16b1880000"
        );
    }

    #[test]
    fn test_transfer_from_slot_order() {
        // The clause recipient lands in the ABI `sender` slot and the
        // supplied address in the `recipient` slot.
        let registry = MethodRegistry::new();
        let encoder = PayloadEncoder::new(&registry);

        let expected = ERC20::transferFromCall {
            sender: parse_address(ADDRESS).unwrap(),
            recipient: parse_address(FROM_ADDRESS).unwrap(),
            amount: U256::from(50_000_000_000_000_000_000u128),
        }
        .abi_encode();

        let payload = encoder
            .transfer_from(&clause(FIFTY_TOKENS), FROM_ADDRESS)
            .unwrap();
        assert_eq!(&payload[..], expected.as_slice());
    }

    #[test]
    fn test_transfer_from_uses_aux_address() {
        let registry = MethodRegistry::new();
        let encoder = PayloadEncoder::new(&registry);

        let with_aux = clause(FIFTY_TOKENS)
            .to_builder()
            .with_aux_address(FROM_ADDRESS)
            .build()
            .unwrap();

        let from_aux = encoder.payload(&with_aux, "transferFrom", None).unwrap();
        let from_arg = encoder
            .transfer_from(&clause(FIFTY_TOKENS), FROM_ADDRESS)
            .unwrap();
        assert_eq!(from_aux, from_arg);
    }

    #[test]
    fn test_transfer_from_without_address() {
        let registry = MethodRegistry::new();
        let encoder = PayloadEncoder::new(&registry);

        let result = encoder.payload(&clause("3"), "transferFrom", None);
        assert_eq!(
            result,
            Err(Error::InvalidAddress {
                field: AddressField::Argument,
                address: String::new(),
            })
        );
    }

    #[test]
    fn test_allowance_packs_single_address() {
        let registry = MethodRegistry::new();
        let encoder = PayloadEncoder::new(&registry);

        let payload = encoder.allowance(&clause("3"), FROM_ADDRESS).unwrap();
        assert_eq!(
            hex::encode(&payload),
            "dd62ed3e0000000000000000000000000bf4a8e0d09c3b16bb6b90362bc4218589b0a567"
        );

        // The full ABI call carries a second (spender) word that is not written here.
        let full = ERC20::allowanceCall {
            owner: parse_address(FROM_ADDRESS).unwrap(),
            spender: parse_address(ADDRESS).unwrap(),
        }
        .abi_encode();
        assert_eq!(full.len(), payload.len() + 32);
        assert_eq!(&full[..payload.len()], &payload[..]);
    }

    #[test]
    fn test_invalid_argument_address() {
        let registry = MethodRegistry::new();
        let encoder = PayloadEncoder::new(&registry);

        let result = encoder.allowance(&clause("3"), "0xnothex");
        assert_eq!(
            result,
            Err(Error::InvalidAddress {
                field: AddressField::Argument,
                address: "0xnothex".to_string(),
            })
        );
    }

    #[test]
    fn test_value_wider_than_a_word_is_not_truncated() {
        let registry = MethodRegistry::new();
        let encoder = PayloadEncoder::new(&registry);

        // 10^80 needs 34 bytes.
        let huge = format!("1{}", "0".repeat(80));
        let payload = encoder.transfer(&clause(&huge)).unwrap();

        assert_eq!(payload.len(), 4 + 32 + 34);
        assert_eq!(payload[36..], big_endian_bytes(&huge).unwrap()[..]);
    }

    #[test]
    fn test_zero_value() {
        let registry = MethodRegistry::new();
        let encoder = PayloadEncoder::new(&registry);

        let payload = encoder.transfer(&clause("0")).unwrap();
        assert_eq!(payload.len(), 4 + 2 * 32);
        assert!(payload[36..].iter().all(|b| *b == 0));
    }

    #[test]
    fn test_unknown_method() {
        let registry = MethodRegistry::new();
        let encoder = PayloadEncoder::new(&registry);

        for method in ["mint", "burn", "TRANSFER", ""] {
            assert_eq!(
                encoder.payload(&clause("3"), method, None),
                Err(Error::UnknownMethod(method.to_string()))
            );
        }
    }

    #[test]
    fn test_payload_accepts_signature() {
        let registry = MethodRegistry::new();
        let encoder = PayloadEncoder::new(&registry);
        let clause = clause(FIFTY_TOKENS);

        assert_eq!(
            encoder
                .payload(&clause, "transfer(address,uint256)", None)
                .unwrap(),
            encoder.payload(&clause, "transfer", None).unwrap()
        );
    }
}
