use classic_ciphers::alphabet::TextError;
use classic_ciphers::cipher::Error;
use classic_ciphers::{decode, encode, key, Alphabet, Cipher};

use crate::common::{self, cyrillic, latin, round_trip};

#[test]
fn caesar_small_alphabet() {
    let alphabet = Alphabet::new("ABC").unwrap();
    let (ct, pt) = round_trip(Cipher::Caesar, "B", "AB", &alphabet);
    assert_eq!(ct, "BC");
    assert_eq!(pt, "AB");
}

#[test]
fn caesar_cyrillic_wraps_through_space() {
    let alphabet = cyrillic();
    // Я (32) shifted by В (2) lands on А (0) after passing the space
    let (ct, pt) = round_trip(Cipher::Caesar, "В", "ЯЗЫК", &alphabet);
    assert_eq!(ct, "АЙЭМ");
    assert_eq!(pt, "ЯЗЫК");
}

#[test]
fn caesar_every_shift() {
    let alphabet = latin();
    for &k in alphabet.symbols() {
        let (_, pt) = round_trip(Cipher::Caesar, &k.to_string(), "THEQUICKBROWNFOX", &alphabet);
        assert_eq!(pt, "THEQUICKBROWNFOX");
    }
}

#[test]
fn affine_coefficient_must_be_coprime() {
    let alphabet = latin();

    // E = 4, gcd(4, 26) = 2
    assert_eq!(
        Cipher::Affine.parse_key("EA", &alphabet),
        Err(key::Error::NonInvertibleCoefficient(4))
    );
    // F = 5, gcd(5, 26) = 1
    assert!(Cipher::Affine.parse_key("FA", &alphabet).is_ok());

    // exactly the units of Z/26 are accepted
    let accepted: Vec<usize> = (0..26)
        .filter(|&k1| {
            let raw: String = [alphabet.symbol_at(k1).unwrap(), 'A'].iter().collect();
            Cipher::Affine.parse_key(&raw, &alphabet).is_ok()
        })
        .collect();
    assert_eq!(accepted, [1, 3, 5, 7, 9, 11, 15, 17, 19, 21, 23, 25]);
}

#[test]
fn affine_round_trip_cyrillic() {
    let alphabet = cyrillic();
    assert_eq!(
        Cipher::Affine.parse_key("ВБ", &alphabet),
        Err(key::Error::NonInvertibleCoefficient(2))
    );

    let (ct, pt) = round_trip(Cipher::Affine, "ГБ", "СЪЕШЬ ЖЕ ЕЩЁ ЭТИХ МЯГКИХ", &alphabet);
    assert_ne!(ct, pt);
    assert_eq!(pt, "СЪЕШЬ ЖЕ ЕЩЁ ЭТИХ МЯГКИХ");
}

#[test]
fn substitution_key_must_be_full_permutation() {
    let alphabet = Alphabet::new("ABCDE").unwrap();

    assert_eq!(
        Cipher::Substitution.parse_key("EDCB", &alphabet),
        Err(key::Error::WrongLength(4))
    );
    assert_eq!(
        Cipher::Substitution.parse_key("EDCBE", &alphabet),
        Err(key::Error::DuplicateSymbol('E'))
    );
    assert_eq!(
        Cipher::Substitution.parse_key("EDCBF", &alphabet),
        Err(key::Error::UnknownSymbol('F'))
    );

    let (ct, pt) = round_trip(Cipher::Substitution, "EDCBA", "ABCDEEDCBA", &alphabet);
    assert_eq!(ct, "EDCBAABCDE");
    assert_eq!(pt, "ABCDEEDCBA");
}

#[test]
fn unknown_text_symbol_is_reported() {
    let alphabet = latin();
    let key = common::key(Cipher::Substitution, "QWERTYUIOPASDFGHJKLZXCVBNM", &alphabet);

    assert_eq!(
        encode("HELLO WORLD", &key, &alphabet, &mut common::rng()),
        Err(Error::Text(TextError::UnknownSymbol(' ')))
    );
    assert_eq!(
        decode("itssg", &key, &alphabet, 0),
        Err(Error::Text(TextError::UnknownSymbol('i')))
    );
}

#[test]
fn monoalphabetic_ciphers_never_pad() {
    let alphabet = latin();
    let mut rng = common::rng();

    for (cipher, raw) in [
        (Cipher::Caesar, "K"),
        (Cipher::Affine, "HC"),
        (Cipher::Substitution, "QWERTYUIOPASDFGHJKLZXCVBNM"),
    ]
    .iter()
    {
        let key = common::key(*cipher, raw, &alphabet);
        let encoded = encode("ODD", &key, &alphabet, &mut rng).unwrap();
        assert_eq!(encoded.padding, 0);
        assert_eq!(encoded.text.chars().count(), 3);
    }
}
