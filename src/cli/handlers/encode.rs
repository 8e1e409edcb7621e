use crate::cli::{
    args::EncodeArgs,
    commands::{read_input, wrap_lines, write_output},
    global::GlobalArgs,
};
use rcnb::{Codec, RcnbConfig};

pub fn handle(
    args: EncodeArgs,
    global: &GlobalArgs,
    config: &RcnbConfig,
    codec: Codec,
) -> Result<(), Box<dyn std::error::Error>> {
    let data = read_input(args.file.as_ref(), global, config)?;

    let encoded = codec.encode(&data);
    let width = args.wrap.unwrap_or(config.settings.wrap);

    let mut text = wrap_lines(&encoded, width);
    text.push('\n');
    write_output(args.output.as_deref(), text.as_bytes())
}
