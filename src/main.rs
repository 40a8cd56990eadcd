//! Numhide - Hide numbers in plain text
//!
//! A CLI for the invisible-character numeric codec: frame numeric fields
//! into invisible Unicode fragments, extract them back out of noisy text,
//! and convert between 128-bit integers and identifiers.

use std::io::{self, Read};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use uuid::Uuid;

use numhide::{
    decode_anon_invitation, decode_metadata, decode_naver_post, decode_primary,
    decode_short_decimal, encode_anon_invitation, encode_metadata, encode_naver_post,
    encode_primary, encode_short_decimal, identifier_from_decimal, identifier_to_int,
    new_identifier,
};

/// Numhide - Hide numbers in plain text
///
/// Embeds numeric identifiers invisibly inside human-readable text using
/// zero-width Unicode code points. The payload survives copy/paste and
/// message forwarding, but is not encrypted - anyone who knows the scheme
/// can decode it.
#[derive(Parser)]
#[command(name = "numhide")]
#[command(version)]
#[command(about = "Hide numeric payloads in plain text with invisible Unicode characters")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Payload channel selector.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum ChannelArg {
    /// Phone number + survey id (decoder falls back to short-decimal)
    Primary,
    /// Metadata type number + record uid
    Metadata,
    /// Naver post number + referrer tracking id
    NaverPost,
    /// Anonymous-invitation proxy id (dummy second field added)
    AnonInvitation,
    /// Single decimal value, dense digit alphabet
    ShortDecimal,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode numeric fields into an invisible text fragment
    ///
    /// The fragment is printed to stdout (wrapped in the host text when
    /// --host is given). It looks empty in a terminal - pipe it somewhere
    /// useful.
    Encode {
        /// Payload channel
        #[arg(short, long, value_enum)]
        channel: ChannelArg,

        /// First field (phone number, type number, post number, proxy id,
        /// or the short-decimal value). Non-digits are stripped.
        field1: String,

        /// Second field (survey id, uid, referrer). Not accepted by the
        /// short-decimal and anon-invitation channels.
        field2: Option<String>,

        /// Visible host text; the fragment is appended to it
        #[arg(long)]
        host: Option<String>,

        /// Show the fragment's code points on stderr
        #[arg(short, long)]
        verbose: bool,
    },

    /// Search text for a channel's frame and print its fields
    ///
    /// Prints "field1<TAB>field2" on success. Exits with status 1 when no
    /// frame of the requested channel is present (a routine outcome, not
    /// an error).
    Decode {
        /// Payload channel
        #[arg(short, long, value_enum)]
        channel: ChannelArg,

        /// Text to scan; reads stdin when omitted
        text: Option<String>,

        /// Show which matcher fired on stderr
        #[arg(short, long)]
        verbose: bool,
    },

    /// 128-bit integer / identifier conversions
    Ident {
        #[command(subcommand)]
        action: IdentAction,
    },
}

#[derive(Subcommand)]
enum IdentAction {
    /// Generate a fresh random identifier
    New,
    /// Convert a decimal integer to its identifier
    FromInt {
        /// Non-negative decimal integer up to 2^128 - 1
        value: String,
    },
    /// Convert an identifier to its decimal integer
    ToInt {
        /// Identifier in hyphenated or plain hex form
        id: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Encode {
            channel,
            field1,
            field2,
            host,
            verbose,
        } => cmd_encode(channel, &field1, field2.as_deref(), host.as_deref(), verbose),
        Commands::Decode {
            channel,
            text,
            verbose,
        } => cmd_decode(channel, text, verbose),
        Commands::Ident { action } => cmd_ident(action),
    }
}

fn cmd_encode(
    channel: ChannelArg,
    field1: &str,
    field2: Option<&str>,
    host: Option<&str>,
    verbose: bool,
) -> Result<()> {
    let fragment = match channel {
        ChannelArg::Primary => {
            let survey_id = field2.context("primary channel needs a second field (survey id)")?;
            encode_primary(field1, survey_id)
        }
        ChannelArg::Metadata => {
            let uid = field2.context("metadata channel needs a second field (uid)")?;
            encode_metadata(field1, uid)
        }
        ChannelArg::NaverPost => {
            let referrer =
                field2.context("naver-post channel needs a second field (referrer)")?;
            encode_naver_post(field1, referrer)
        }
        ChannelArg::AnonInvitation => {
            if field2.is_some() {
                bail!("anon-invitation channel carries a single field");
            }
            encode_anon_invitation(field1)
        }
        ChannelArg::ShortDecimal => {
            if field2.is_some() {
                bail!("short-decimal channel carries a single field");
            }
            encode_short_decimal(field1)
        }
    };

    if verbose {
        let points: Vec<String> = fragment.chars().map(|c| format!("U+{:04X}", c as u32)).collect();
        eprintln!(
            "fragment: {} invisible code points: {}",
            fragment.chars().count(),
            points.join(" ")
        );
    }

    match host {
        Some(host) => println!("{host}{fragment}"),
        None => println!("{fragment}"),
    }

    Ok(())
}

fn cmd_decode(channel: ChannelArg, text: Option<String>, verbose: bool) -> Result<()> {
    let text = match text {
        Some(text) => text,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read text from stdin")?;
            buf
        }
    };

    if verbose {
        eprintln!("scanning {} characters", text.chars().count());
    }

    let decoded = match channel {
        ChannelArg::Primary => decode_primary(&text),
        ChannelArg::Metadata => decode_metadata(&text),
        ChannelArg::NaverPost => decode_naver_post(&text),
        ChannelArg::AnonInvitation => decode_anon_invitation(&text),
        ChannelArg::ShortDecimal => decode_short_decimal(&text),
    }
    .context("frame located but its fields are malformed")?;

    match decoded {
        Some((field1, field2)) => {
            if verbose {
                eprintln!("frame found for channel {channel:?}");
            }
            println!("{field1}\t{field2}");
            Ok(())
        }
        None => {
            eprintln!("no frame found");
            std::process::exit(1);
        }
    }
}

fn cmd_ident(action: IdentAction) -> Result<()> {
    match action {
        IdentAction::New => {
            let id = new_identifier();
            println!("{id}\t{}", identifier_to_int(id));
        }
        IdentAction::FromInt { value } => {
            let id = identifier_from_decimal(&value)?;
            println!("{id}");
        }
        IdentAction::ToInt { id } => {
            let id: Uuid = id.parse().context("invalid identifier")?;
            println!("{}", identifier_to_int(id));
        }
    }
    Ok(())
}
