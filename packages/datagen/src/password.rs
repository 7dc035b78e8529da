use kiosk_config::constants::PASSWORD_CHARSET;
use rand::seq::SliceRandom;
use rand::Rng;

/// Generate a password of exactly `length` characters.
///
/// Characters are drawn independently (with replacement) from the fixed
/// charset, then the whole string is shuffled. Length 0 yields an empty
/// string.
pub fn generate_password(length: usize) -> String {
    let mut rng = rand::thread_rng();

    let mut chars: Vec<char> = (0..length)
        .map(|_| {
            let idx = rng.gen_range(0..PASSWORD_CHARSET.len());
            PASSWORD_CHARSET[idx] as char
        })
        .collect();
    chars.shuffle(&mut rng);

    chars.into_iter().collect()
}
