//! Self-contained textbook RSA over arbitrary-precision integers:
//! Miller-Rabin primality testing, prime search, key pair generation
//! via the extended Euclidean algorithm, and raw modular-exponentiation
//! encryption and decryption.
//!
//! This is deliberately not a production cryptosystem. There is no
//! padding (no OAEP or PKCS#1), no constant-time arithmetic and no
//! side-channel hardening; encryption is deterministic and malleable.
//! The default 128-bit primes give a 256-bit modulus that any modern
//! machine can factor.
//!
//! ```no_run
//! use rsa_core::rsa::{encrypt, decrypt, generate_keys};
//!
//! let mut rng = rand::thread_rng();
//! let (public, private) = generate_keys(128, &mut rng)?;
//! let ciphertext = encrypt(&public, "HELLO WORLD")?;
//! assert_eq!(decrypt(&private, &ciphertext)?, "HELLO WORLD");
//! # Ok::<(), rsa_core::rsa::RsaError>(())
//! ```

pub mod rsa;
