use classic_ciphers::cipher::Error;
use classic_ciphers::{decode, encode, key, Alphabet, Cipher};

use crate::common::{self, cyrillic, latin, round_trip};

#[test]
fn vigenere_textbook() {
    let alphabet = latin();
    let (ct, pt) = round_trip(Cipher::Vigenere, "LEMON", "ATTACKATDAWN", &alphabet);
    assert_eq!(ct, "LXFOPVEFRNHR");
    assert_eq!(pt, "ATTACKATDAWN");
}

#[test]
fn vigenere_leaves_punctuation_in_place() {
    let alphabet = latin();
    let key = common::key(Cipher::Vigenere, "KEY", &alphabet);

    let pt = "WE ATTACK, AT DAWN!";
    let encoded = encode(pt, &key, &alphabet, &mut common::rng()).unwrap();
    assert_eq!(encoded.padding, 0);

    let marks: Vec<(usize, char)> = pt
        .chars()
        .enumerate()
        .filter(|(_, c)| !alphabet.contains(*c))
        .collect();
    for &(i, c) in marks.iter() {
        assert_eq!(encoded.text.chars().nth(i), Some(c));
    }

    assert_eq!(decode(&encoded.text, &key, &alphabet, 0).unwrap(), pt);
}

#[test]
fn vigenere_key_symbols_must_be_in_alphabet() {
    let alphabet = latin();
    assert_eq!(
        Cipher::Vigenere.parse_key("lemon", &alphabet),
        Err(key::Error::UnknownSymbol('l'))
    );
    assert_eq!(
        Cipher::Vigenere.parse_key("", &alphabet),
        Err(key::Error::WrongLength(0))
    );
}

#[test]
fn hill_singular_matrix_rejected() {
    let alphabet = latin();
    // [[2, 4], [3, 6]]
    assert_eq!(
        Cipher::Hill.parse_key("CEDG", &alphabet),
        Err(key::Error::SingularMatrix)
    );
    // det 4*1 - 2*1 = 2, shares a factor with 26
    assert_eq!(
        Cipher::Hill.parse_key("ECBB", &alphabet),
        Err(key::Error::NonInvertibleDeterminant(2))
    );
}

#[test]
fn hill_even_length_round_trip() {
    let alphabet = latin();
    let (ct, pt) = round_trip(Cipher::Hill, "JEFH", "SHORTEXAMPLE", &alphabet);
    assert_eq!(ct.chars().count(), 12);
    assert_eq!(pt, "SHORTEXAMPLE");
}

#[test]
fn hill_odd_length_reports_padding() {
    let alphabet = cyrillic();
    let key = common::key(Cipher::Hill, "БВГЕ", &alphabet);

    let pt = "ШИФР ХИЛЛА";
    let odd = "ШИФР ХИЛЛ";

    let encoded = encode(pt, &key, &alphabet, &mut common::rng()).unwrap();
    assert_eq!(encoded.padding, 0);
    assert_eq!(decode(&encoded.text, &key, &alphabet, 0).unwrap(), pt);

    let encoded = encode(odd, &key, &alphabet, &mut common::rng()).unwrap();
    assert_eq!(encoded.padding, 1);
    assert_eq!(encoded.text.chars().count(), 10);
    assert_eq!(decode(&encoded.text, &key, &alphabet, 1).unwrap(), odd);
}

#[test]
fn hill_decode_rejects_odd_ciphertext() {
    let alphabet = latin();
    let key = common::key(Cipher::Hill, "JEFH", &alphabet);
    assert_eq!(
        decode("ABC", &key, &alphabet, 0),
        Err(Error::BlockLength { len: 3, block: 2 })
    );
}

#[test]
fn hill_composite_power() {
    // power 6, determinant must avoid factors 2 and 3
    let alphabet = Alphabet::new("ABCDEF").unwrap();

    // [[1, 1], [0, 5]], det 5
    let (_, pt) = round_trip(Cipher::Hill, "BBAF", "FACADE", &alphabet);
    assert_eq!(pt, "FACADE");

    // [[1, 1], [0, 3]], det 3
    assert_eq!(
        Cipher::Hill.parse_key("BBAD", &alphabet),
        Err(key::Error::NonInvertibleDeterminant(3))
    );
}
