use anyhow::Context;
use clap::{Parser, Subcommand};

use rsa_core::rsa::{decrypt, encrypt, generate_keys, PrivateKey, PublicKey, DEFAULT_PRIME_BITS};

#[derive(Parser)]
#[command(name = "rsa_core", version, about = "Textbook RSA key generation, encryption and decryption")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a key pair and print both keys in e,n / d,n form
    Keygen {
        /// Prime size in bits (the modulus gets twice this)
        #[arg(long, default_value_t = DEFAULT_PRIME_BITS)]
        bits: u64,
    },
    /// Encrypt a message with a public key
    Encrypt {
        /// Public key as "e,n" (decimal)
        #[arg(long)]
        key: String,
        /// Message text
        message: String,
    },
    /// Decrypt a decimal ciphertext with a private key
    Decrypt {
        /// Private key as "d,n" (decimal)
        #[arg(long)]
        key: String,
        /// Ciphertext as a decimal integer
        ciphertext: String,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Keygen { bits } => {
            let mut rng = rand::thread_rng();
            let (public, private) =
                generate_keys(bits, &mut rng).context("key generation failed")?;
            println!("public:  {public}");
            println!("private: {private}");
        }
        Command::Encrypt { key, message } => {
            let public: PublicKey = key.parse().context("invalid public key")?;
            println!("{}", encrypt(&public, &message)?);
        }
        Command::Decrypt { key, ciphertext } => {
            let private: PrivateKey = key.parse().context("invalid private key")?;
            println!("{}", decrypt(&private, &ciphertext)?);
        }
    }

    Ok(())
}
