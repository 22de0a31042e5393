//! Random-offset round trip printed as a bordered trace.
//!
//! Ciphers a fixed German sentence with a random offset, recovers the
//! offset by frequency analysis and prints every step.
//!
//! Run with `cargo run --example round_trip`; set `RUST_LOG=debug` to see
//! the scoring log.

use caesarcrypt::utils::banner::{border, BannerStyle};
use caesarcrypt::{CaesarCipher, CaesarError, Language};
use rand::Rng;
use tracing_subscriber::EnvFilter;

const PLAINTEXT: &str = "Hallo, Ich bin Christian aus Deutschland und meine Arbeit ist wunderbar";

fn main() -> Result<(), CaesarError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let caesar = CaesarCipher::for_language(Language::German);
    let original = caesar.normalize(PLAINTEXT);
    let expected_offset = rand::rng().random_range(0..26);
    let ciphered = caesar.cipher(&original, expected_offset);
    let recovery = caesar.recover(ciphered.as_str())?;

    let trace = format!(
        "original: '{original}'\n↓\n\
         offset: {expected_offset}\n↓\n\
         ciphered: {ciphered}\n↓\n\
         statistic: {}\n↓\n\
         deciphered: {}",
        recovery.offset, recovery.plaintext
    );
    println!("{}", border(&trace, &BannerStyle::with_margins(2, 1)));
    Ok(())
}
