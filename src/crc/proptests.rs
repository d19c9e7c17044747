use ::crc::{Crc, CRC_16_GENIBUS, CRC_16_IBM_3740, CRC_16_XMODEM};
use proptest::prelude::*;

use super::*;

const IBM_3740: Crc<u16> = Crc::<u16>::new(&CRC_16_IBM_3740);
const XMODEM: Crc<u16> = Crc::<u16>::new(&CRC_16_XMODEM);
const GENIBUS: Crc<u16> = Crc::<u16>::new(&CRC_16_GENIBUS);

proptest! {
    #[test]
    fn defaults_match_ibm_3740(data in proptest::collection::vec(any::<u8>(), 0..=4096)) {
        let table = generate_table(DEFAULT_POLYNOMIAL);
        prop_assert_eq!(compute(&data, &table, Options::default()), IBM_3740.checksum(&data));
    }

    #[test]
    fn zero_initial_matches_xmodem(data in proptest::collection::vec(any::<u8>(), 0..=4096)) {
        let table = generate_table(DEFAULT_POLYNOMIAL);
        let options = Options { initial: 0, invert: false };
        prop_assert_eq!(compute(&data, &table, options), XMODEM.checksum(&data));
    }

    #[test]
    fn inverted_matches_genibus(data in proptest::collection::vec(any::<u8>(), 0..=4096)) {
        let table = generate_table(DEFAULT_POLYNOMIAL);
        let options = Options { invert: true, ..Options::default() };
        prop_assert_eq!(compute(&data, &table, options), GENIBUS.checksum(&data));
    }

    #[test]
    fn chunking_is_invisible(
        data in proptest::collection::vec(any::<u8>(), 0..=4096),
        chunk in 1usize..=257,
        polynomial in any::<u16>(),
        initial in any::<u16>()
    ) {
        let table = generate_table(polynomial);
        let whole = update_slice(initial, &data, &table);
        let chunked = data
            .chunks(chunk)
            .fold(initial, |crc, part| update_slice(crc, part, &table));
        prop_assert_eq!(chunked, whole);
    }

    #[test]
    fn empty_input_law(polynomial in any::<u16>(), initial in any::<u16>(), invert in any::<bool>()) {
        let table = generate_table(polynomial);
        let expected = if invert { !initial } else { initial };
        prop_assert_eq!(compute(&[], &table, Options { initial, invert }), expected);
    }

    #[test]
    fn table_zero_for_any_polynomial(polynomial in any::<u16>()) {
        prop_assert_eq!(generate_table(polynomial)[0], 0);
    }
}
