//! Command line front end for the cipher modes library
//!
//! Reads a hex encoded input file and a hex encoded AES key, runs the
//! selected mode of operation and writes the result as hex. Encryption
//! output is `IV ‖ ciphertext`; decryption expects the same layout.

use std::error::Error;
use std::fs;

use cipher_modes::{factory, AesBlockCipher, ModeCipherService, ModeType};
use clap::{Parser, ValueEnum};
use log::info;

/// Command-line arguments for the cipher modes program.
#[derive(Parser, Debug)]
struct Cli {
    /// Path to the input file.
    #[arg(short, long, help = "Path to the input file")]
    file: String,

    /// Key for the cipher.
    #[arg(short, long, help = "File contains the AES key (16, 24 or 32 bytes hex)")]
    key: String,

    /// Path to the output file.
    #[arg(short, long, help = "Path to the output file")]
    output: String,

    /// Mode of operation (encrypt or decrypt).
    #[arg(short, long, help = "Mode of operation (encrypt/decrypt)")]
    mode: OperationMode,

    /// Block cipher mode.
    #[arg(short, long, value_enum, default_value_t = BlockMode::Cbc, help = "Block cipher mode")]
    block_mode: BlockMode,
}

/// Enum representing the mode of operation for the cipher.
#[derive(Clone, Debug, ValueEnum)]
enum OperationMode {
    /// Encrypt mode.
    Encrypt,
    /// Decrypt mode.
    Decrypt,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum BlockMode {
    Ecb,
    Cbc,
    Cfb,
    Ofb,
    Ctr,
}

impl From<BlockMode> for ModeType {
    fn from(mode: BlockMode) -> Self {
        match mode {
            BlockMode::Ecb => ModeType::Ecb,
            BlockMode::Cbc => ModeType::Cbc,
            BlockMode::Cfb => ModeType::Cfb,
            BlockMode::Ofb => ModeType::Ofb,
            BlockMode::Ctr => ModeType::Ctr,
        }
    }
}

/// Decodes hex text, ignoring spaces and line breaks
fn parse_hex(content: &str) -> Result<Vec<u8>, hex::FromHexError> {
    let hex_string: String = content.chars().filter(|c| !c.is_whitespace()).collect();
    hex::decode(hex_string)
}

/// Formats bytes as lowercase hex pairs separated by a single space
fn format_hex(data: &[u8]) -> String {
    data.iter()
        .map(|b| format!("{:02x}", b))
        .collect::<Vec<String>>()
        .join(" ")
}

fn read_hex_from_file(filename: &str) -> Result<Vec<u8>, Box<dyn Error>> {
    let content = fs::read_to_string(filename)?;
    parse_hex(&content).map_err(|e| format!("{}: {}", filename, e).into())
}

fn run(cli: &Cli) -> Result<Vec<u8>, Box<dyn Error>> {
    let input = read_hex_from_file(&cli.file)?;
    let key = read_hex_from_file(&cli.key)?;

    let cipher = AesBlockCipher::new(&key)?;
    let mode_type = ModeType::from(cli.block_mode);
    let service = ModeCipherService::new(factory::create(mode_type, cipher));

    info!("{:?} {} bytes with {}", cli.mode, input.len(), mode_type);

    let output = match cli.mode {
        OperationMode::Encrypt => service.encrypt_with_header(&input)?,
        OperationMode::Decrypt => service.decrypt_with_header(&input)?,
    };
    Ok(output)
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    let result = run(&cli)?;

    fs::write(&cli.output, format_hex(&result))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_file(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "cipher-modes-cli-{}-{}",
            std::process::id(),
            name
        ));
        fs::write(&path, content).unwrap();
        path
    }

    fn cli(file: &PathBuf, key: &PathBuf, mode: OperationMode, block_mode: BlockMode) -> Cli {
        Cli {
            file: file.to_string_lossy().into_owned(),
            key: key.to_string_lossy().into_owned(),
            output: String::new(),
            mode,
            block_mode,
        }
    }

    #[test]
    fn test_parse_hex_ignores_whitespace() {
        assert_eq!(parse_hex("de ad\nbe\tef\n").unwrap(), vec![0xde, 0xad, 0xbe, 0xef]);
        assert!(parse_hex("abc").is_err());
        assert!(parse_hex("zz").is_err());
    }

    #[test]
    fn test_format_hex() {
        assert_eq!(format_hex(&[0x00, 0x0f, 0xff]), "00 0f ff");
        assert_eq!(format_hex(&[]), "");
    }

    #[test]
    fn test_default_block_mode_is_cbc() {
        let cli = Cli::parse_from([
            "cipher-modes", "-f", "in", "-k", "key", "-o", "out", "-m", "encrypt",
        ]);
        assert_eq!(cli.block_mode, BlockMode::Cbc);

        let cli = Cli::parse_from([
            "cipher-modes", "-f", "in", "-k", "key", "-o", "out", "-m", "decrypt", "-b", "ctr",
        ]);
        assert_eq!(ModeType::from(cli.block_mode), ModeType::Ctr);
    }

    #[test]
    fn test_encrypt_then_decrypt_through_files() {
        let key = temp_file("key", "2b7e151628aed2a6abf7158809cf4f3c\n");
        let plain = temp_file("plain", "6bc1bee22e409f96 e93d7e117393172a ae");

        let block_modes = [
            BlockMode::Ecb,
            BlockMode::Cbc,
            BlockMode::Cfb,
            BlockMode::Ofb,
            BlockMode::Ctr,
        ];
        for block_mode in block_modes {
            let encrypted = run(&cli(&plain, &key, OperationMode::Encrypt, block_mode)).unwrap();
            let cipher_file = temp_file("cipher", &format_hex(&encrypted));

            let decrypted =
                run(&cli(&cipher_file, &key, OperationMode::Decrypt, block_mode)).unwrap();
            assert_eq!(
                format_hex(&decrypted),
                "6b c1 be e2 2e 40 9f 96 e9 3d 7e 11 73 93 17 2a ae"
            );
        }
    }

    #[test]
    fn test_rejects_bad_key_length() {
        let key = temp_file("short-key", "00112233");
        let plain = temp_file("plain-short", "00");
        assert!(run(&cli(&plain, &key, OperationMode::Encrypt, BlockMode::Cbc)).is_err());
    }
}
