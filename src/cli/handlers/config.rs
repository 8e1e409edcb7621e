use crate::cli::args::ConfigArgs;
use rcnb::{Alphabet, Codec, RcnbConfig};

pub fn handle(
    args: ConfigArgs,
    config: &RcnbConfig,
    codec: Codec,
) -> Result<(), Box<dyn std::error::Error>> {
    let alphabets: Vec<(String, String)> = Alphabet::ALL
        .iter()
        .map(|a| (a.name().to_string(), a.chars().iter().collect()))
        .collect();

    if args.json {
        let output = serde_json::json!({
            "settings": config.settings,
            "backend": codec.backend(),
            "acceleration_available": rcnb::is_acceleration_available(),
            "alphabets": alphabets
                .iter()
                .map(|(name, chars)| (name.clone(), serde_json::Value::from(chars.as_str())))
                .collect::<serde_json::Map<_, _>>(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("Settings:");
    println!("  backend:  {}", config.settings.backend.name());
    println!("  wrap:     {}", config.settings.wrap);
    println!("  max_size: {}", config.settings.max_size);
    println!();
    println!("Active backend: {}", codec.backend().name());
    println!(
        "AVX2 available: {}",
        if rcnb::is_acceleration_available() { "yes" } else { "no" }
    );
    println!();
    println!("Alphabets:");
    for (name, chars) in &alphabets {
        println!("  {} ({:>2}) {}", name, chars.chars().count(), chars);
    }

    Ok(())
}
