use rcnb::RcnbConfig;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use super::global::GlobalArgs;

/// Read a file, or stdin when no file is given, honoring the size limit.
pub fn read_input(
    file: Option<&PathBuf>,
    global: &GlobalArgs,
    config: &RcnbConfig,
) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    let max_size = config.settings.max_size;

    if let Some(file_path) = file {
        // Check file size if max_size is set
        if max_size > 0 {
            let metadata = fs::metadata(file_path)?;
            let file_size = metadata.len() as usize;

            if file_size > max_size {
                if global.force {
                    if !global.quiet {
                        eprintln!(
                            "Warning: Processing large file ({} bytes, limit: {} bytes)",
                            file_size, max_size
                        );
                    }
                } else {
                    return Err(format!(
                        "File size ({} bytes) exceeds limit ({} bytes). Use --force to process anyway.",
                        file_size, max_size
                    )
                    .into());
                }
            }
        }

        Ok(fs::read(file_path)?)
    } else {
        let mut buffer = Vec::new();
        io::stdin().read_to_end(&mut buffer)?;

        // Check stdin size after reading
        if max_size > 0 && buffer.len() > max_size && !global.force {
            return Err(format!(
                "Input size ({} bytes) exceeds maximum ({} bytes). Use --force to process anyway.",
                buffer.len(),
                max_size
            )
            .into());
        }

        Ok(buffer)
    }
}

/// Write to the given path (with `~` expanded) or to stdout.
pub fn write_output(output: Option<&Path>, data: &[u8]) -> Result<(), Box<dyn std::error::Error>> {
    match output {
        Some(path) => {
            let expanded = shellexpand::tilde(&path.to_string_lossy()).into_owned();
            fs::write(expanded, data)?;
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(data)?;
            stdout.flush()?;
        }
    }
    Ok(())
}

/// Break `text` into lines of at most `width` characters; 0 disables wrapping.
pub fn wrap_lines(text: &str, width: usize) -> String {
    if width == 0 {
        return text.to_string();
    }

    let mut wrapped = String::with_capacity(text.len() + text.len() / width + 1);
    for (i, c) in text.chars().enumerate() {
        if i > 0 && i % width == 0 {
            wrapped.push('\n');
        }
        wrapped.push(c);
    }
    wrapped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_disabled() {
        assert_eq!(wrap_lines("ɌcńƁȓČņÞ", 0), "ɌcńƁȓČņÞ");
    }

    #[test]
    fn test_wrap_counts_characters() {
        assert_eq!(wrap_lines("ɌcńƁȓČņÞ", 4), "ɌcńƁ\nȓČņÞ");
        assert_eq!(wrap_lines("ɌcńƁȓČņÞ", 3), "Ɍcń\nƁȓČ\nņÞ");
        assert_eq!(wrap_lines("", 4), "");
    }
}
