use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

use clap::Parser;
use env_logger::Env;
use log::info;

use md5_digest::codec::JsonCodec;
use md5_digest::Md5Digest;

#[derive(Parser, Debug)]
#[clap(version, about)]
/// Prints an MD5 digest in every representation md5-digest supports
struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Digests --file=<FILE> or --text=<TEXT>
    Sum {
        #[clap(long, conflicts_with = "text", required_unless_present = "text")]
        /// The file to digest
        file: Option<PathBuf>,
        #[clap(long)]
        /// A literal string to digest
        text: Option<String>,
    },
    /// Parses a digest given as <DIGEST> in the --format=<FORMAT> representation
    Decode {
        #[clap(long, value_enum, default_value = "base64-url")]
        format: Format,
        digest: String,
    },
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum Format {
    Hex,
    Base64Url,
    Base64Std,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let cli: Cli = Cli::parse();

    let digest = match cli.command {
        Commands::Sum { file, text } => match (file, text) {
            (Some(file), _) => {
                info!("Digesting {}", file.display());
                let mut content = Vec::<u8>::new();
                File::open(file)?.read_to_end(&mut content)?;
                Md5Digest::sum_of(&content)
            }
            (None, Some(text)) => {
                info!("Digesting {} bytes of text", text.len());
                Md5Digest::sum_of(text)
            }
            (None, None) => anyhow::bail!("one of --file or --text is required"),
        },
        Commands::Decode { format, digest } => {
            info!("Decoding {:?} digest {}", format, digest);
            match format {
                Format::Hex => Md5Digest::from_hex(&digest)?,
                Format::Base64Url => Md5Digest::from_base64_url(&digest)?,
                Format::Base64Std => Md5Digest::from_base64_std(&digest)?,
            }
        }
    };

    let (u0, u1) = digest.as_u64_pair();
    let (i0, i1) = digest.as_i64_pair();
    println!("hex:         {}", digest.to_hex());
    println!("base64 url:  {}", digest.to_base64_url());
    println!("base64 std:  {}", digest.to_base64_std());
    println!("json:        {}", String::from_utf8(digest.marshal_json()?)?);
    println!("u64 pair:    ({:#018x}, {:#018x})", u0, u1);
    println!("i64 pair:    ({}, {})", i0, i1);
    println!("empty:       {}", digest.is_empty());
    Ok(())
}
