//! Demo: bit-level GSW FHE over LWE.

use bitfhe::{and, decrypt, encrypt, generate_key, nand, not, or, xor, Ciphertext, Params, PublicKey};
use rand::thread_rng;

fn main() {
    env_logger::init();

    println!("Bit-level GSW FHE over LWE - Demo\n");

    let params = Params::default();
    println!(
        "Parameters: n={}, m={}, l={}, N={}",
        params.n, params.m, params.ell, params.big_n
    );

    let mut rng = thread_rng();

    println!("\n--- Key Generation ---");
    let keys = generate_key(&mut rng, &params).expect("key generation");
    println!(
        "Secret key: 1x{}, public key: {}x{}",
        keys.secret_key.vector().cols(),
        keys.public_key.matrix().rows(),
        keys.public_key.matrix().cols()
    );

    println!("\n--- Basic Encryption ---");
    for bit in [false, true] {
        let ct = encrypt(&mut rng, &keys.public_key, bit).expect("encrypt");
        let dec = decrypt(&ct, &keys.secret_key).expect("decrypt");
        println!(
            "Encrypt({}) -> Decrypt -> {} {}",
            bit,
            dec,
            if dec == bit { "✓" } else { "✗" }
        );
    }

    println!("\n--- NOT ---");
    for bit in [false, true] {
        let ct = encrypt(&mut rng, &keys.public_key, bit).expect("encrypt");
        let inverted = not(&ct, &keys.public_key).expect("not");
        let dec = decrypt(&inverted, &keys.secret_key).expect("decrypt");
        println!(
            "NOT {} = {} {}",
            bit,
            dec,
            if dec == !bit { "✓" } else { "✗" }
        );
    }

    type Gate = fn(&Ciphertext, &Ciphertext, &PublicKey) -> bitfhe::Result<Ciphertext>;
    let gates: [(&str, Gate, fn(bool, bool) -> bool); 4] = [
        ("AND", and, |a, b| a & b),
        ("OR", or, |a, b| a | b),
        ("NAND", nand, |a, b| !(a & b)),
        ("XOR", xor, |a, b| a ^ b),
    ];

    for (name, gate, clear) in gates {
        println!("\n--- {name} ---");
        for b1 in [false, true] {
            for b2 in [false, true] {
                let c1 = encrypt(&mut rng, &keys.public_key, b1).expect("encrypt");
                let c2 = encrypt(&mut rng, &keys.public_key, b2).expect("encrypt");
                let out = gate(&c1, &c2, &keys.public_key).expect("gate");
                let dec = decrypt(&out, &keys.secret_key).expect("decrypt");
                let expected = clear(b1, b2);
                println!(
                    "{} {name} {} = {} (expected {}) {}",
                    b1,
                    b2,
                    dec,
                    expected,
                    if dec == expected { "✓" } else { "✗" }
                );
            }
        }
    }

    println!("\n--- Composed circuit ---");
    // (a XOR b) AND NOT c, for a=1, b=0, c=0: expects 1.
    let ca = encrypt(&mut rng, &keys.public_key, true).expect("encrypt");
    let cb = encrypt(&mut rng, &keys.public_key, false).expect("encrypt");
    let cc = encrypt(&mut rng, &keys.public_key, false).expect("encrypt");
    let circuit = and(
        &xor(&ca, &cb, &keys.public_key).expect("xor"),
        &not(&cc, &keys.public_key).expect("not"),
        &keys.public_key,
    )
    .expect("and");
    let dec = decrypt(&circuit, &keys.secret_key).expect("decrypt");
    println!(
        "(1 XOR 0) AND NOT 0 = {} {}",
        dec,
        if dec { "✓" } else { "✗" }
    );
}
