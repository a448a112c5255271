//! Alice and Bob agree on a secret over a binary curve.
//!
//! Usage: `cargo run --example ecdh_exchange [sect163k1|sect163r2|sect283k1]`

use gf2ecdh::prelude::*;
use rand::rngs::OsRng;

fn main() -> Result<()> {
    let name = std::env::args().nth(1).unwrap_or_else(|| "sect163r2".to_string());
    let params = match BINARY_CURVES.iter().find(|p| p.name == name) {
        Some(params) => *params,
        None => {
            eprintln!("unknown curve '{}', expected one of:", name);
            for p in BINARY_CURVES {
                eprintln!("  {}", p.name);
            }
            std::process::exit(2);
        }
    };

    let ecdh = Ecdh::new(params)?;
    println!("curve: {} (m = {}, h = {})", ecdh.name(), params.degree, params.cofactor);

    let (alice_pk, alice_sk) = ecdh.keypair(&mut OsRng)?;
    let (bob_pk, bob_sk) = ecdh.keypair(&mut OsRng)?;
    println!("alice public key: {}", hex::encode(&alice_pk));
    println!("bob public key:   {}", hex::encode(&bob_pk));

    let alice_ss = ecdh.shared_secret(&alice_sk, &bob_pk)?;
    let bob_ss = ecdh.shared_secret(&bob_sk, &alice_pk)?;

    if alice_ss != bob_ss {
        eprintln!("shared secrets differ");
        std::process::exit(1);
    }
    println!("shared secret:    {}", hex::encode(&alice_ss));
    Ok(())
}
