use proptest::prelude::*;

use cairn_core::stacks::c32::{c32_address, c32_address_decode, c32_decode, c32_encode};
use cairn_core::{
    get_bitcoin_derivation_path, get_segwit_derivation_path, get_taproot_derivation_path,
    validate_stx_address, Network,
};

proptest! {
    #[test]
    fn c32_encoding_roundtrips(data in prop::collection::vec(any::<u8>(), 0..40)) {
        let encoded = c32_encode(&data);
        let decoded = c32_decode(&encoded).expect("own encoding must decode");
        prop_assert_eq!(decoded, data);
    }

    #[test]
    fn c32_addresses_roundtrip(version in 0u8..32, hash in prop::array::uniform20(any::<u8>())) {
        let address = c32_address(version, &hash).expect("version in range");
        prop_assert!(address.starts_with('S'));

        let (decoded_version, decoded_hash) = c32_address_decode(&address).expect("own address must decode");
        prop_assert_eq!(decoded_version, version);
        prop_assert_eq!(decoded_hash, hash);
    }

    #[test]
    fn stx_validator_never_panics(input in ".{0,80}") {
        // Any input is either accepted or rejected, never a crash.
        let _ = validate_stx_address(&input, Network::Mainnet);
        let _ = validate_stx_address(&input, Network::Testnet);
    }

    #[test]
    fn btc_paths_keep_shape_under_any_index(
        account in prop::option::of(0u32..1000),
        index in 0u32..0x8000_0000,
    ) {
        let path = get_bitcoin_derivation_path(account, index, Network::Mainnet);
        let rendered = path.as_str().to_string();

        prop_assert!(rendered.starts_with("m/49'/0'/"));
        let expected_suffix = format!("/0/{}", index);
        prop_assert!(rendered.ends_with(&expected_suffix));
        prop_assert!(path.to_derivation_path().is_ok());

        // Switching network flips only the coin-type segment
        let testnet = get_bitcoin_derivation_path(account, index, Network::Testnet);
        prop_assert_eq!(
            rendered.replacen("m/49'/0'/", "m/49'/1'/", 1),
            testnet.as_str()
        );
    }

    #[test]
    fn purposes_differ_only_in_first_segment(index in 0u32..0x8000_0000) {
        let segwit = get_segwit_derivation_path(None, index, Network::Mainnet);
        let taproot = get_taproot_derivation_path(None, index, Network::Mainnet);

        prop_assert_eq!(
            segwit.as_str().replacen("m/84'", "m/86'", 1),
            taproot.as_str()
        );
    }
}
