use crate::cli::{
    args::DecodeArgs,
    commands::{read_input, write_output},
    global::GlobalArgs,
};
use rcnb::{Codec, RcnbConfig, RcnbError};

pub fn handle(
    args: DecodeArgs,
    global: &GlobalArgs,
    config: &RcnbConfig,
    codec: Codec,
) -> Result<(), Box<dyn std::error::Error>> {
    let input = read_input(args.file.as_ref(), global, config)?;
    let text =
        String::from_utf8(input).map_err(|_| "Input data is not valid UTF-8 text for decoding")?;

    let (offsets, chars) = strip_whitespace(&text);
    let decoded = codec
        .decode_chars(&chars)
        .map_err(|e| locate_in_input(e, &offsets))?;

    if args.hex {
        let mut line = hex::encode(&decoded);
        line.push('\n');
        write_output(args.output.as_deref(), line.as_bytes())
    } else {
        write_output(args.output.as_deref(), &decoded)
    }
}

/// Characters of `text` minus whitespace, with each one's index in `text`.
///
/// Wrapped output and trailing newlines are not part of the encoding.
fn strip_whitespace(text: &str) -> (Vec<usize>, Vec<char>) {
    text.chars()
        .enumerate()
        .filter(|(_, c)| !c.is_whitespace())
        .unzip()
}

/// Rewrite error positions from the whitespace-free text to character
/// indices of the original input.
fn locate_in_input(err: RcnbError, offsets: &[usize]) -> RcnbError {
    let locate = |position: usize| offsets.get(position).copied().unwrap_or(position);
    match err {
        RcnbError::InvalidCharacter { char, position } => {
            RcnbError::invalid_character(char, locate(position))
        }
        RcnbError::Overflow {
            position,
            value,
            max,
        } => RcnbError::overflow(locate(position), value, max),
        other => other,
    }
}
