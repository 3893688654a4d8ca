use classic_ciphers::{decode, encode, Alphabet, Cipher, Key};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[allow(dead_code)]
pub const LATIN: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

#[allow(dead_code)]
pub const CYRILLIC: &str = "АБВГДЕЁЖЗИЙКЛМНОПРСТУФХЦЧШЩЪЫЬЭЮЯ ";

#[allow(dead_code)]
pub fn latin() -> Alphabet {
    Alphabet::new(LATIN).unwrap()
}

#[allow(dead_code)]
pub fn cyrillic() -> Alphabet {
    Alphabet::new(CYRILLIC).unwrap()
}

// deterministic padding choices
#[allow(dead_code)]
pub fn rng() -> StdRng {
    StdRng::seed_from_u64(0x5eed)
}

#[allow(dead_code)]
pub fn key(cipher: Cipher, raw: &str, alphabet: &Alphabet) -> Key {
    cipher.parse_key(raw, alphabet).unwrap()
}

// encode then decode, returning the ciphertext and the recovered text
#[allow(dead_code)]
pub fn round_trip(cipher: Cipher, raw_key: &str, text: &str, alphabet: &Alphabet) -> (String, String) {
    let key = key(cipher, raw_key, alphabet);
    let encoded = encode(text, &key, alphabet, &mut rng()).unwrap();
    let decoded = decode(&encoded.text, &key, alphabet, encoded.padding).unwrap();
    (encoded.text, decoded)
}
