use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use sha2::{Digest, Sha256};

pub fn now_utc_string() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

pub fn sha256_file(path: &Path) -> Result<String> {
    let mut file = File::open(path)
        .with_context(|| format!("failed to open file for hashing: {}", path.display()))?;

    let mut hasher = Sha256::new();
    let mut buf = [0_u8; 8192];

    loop {
        let count = file
            .read(&mut buf)
            .with_context(|| format!("failed to read file for hashing: {}", path.display()))?;
        if count == 0 {
            break;
        }
        hasher.update(&buf[..count]);
    }

    Ok(format!("{:x}", hasher.finalize()))
}

pub fn write_json_stdout<T: Serialize>(value: &T) -> Result<()> {
    let mut output = io::BufWriter::new(io::stdout().lock());
    serde_json::to_writer_pretty(&mut output, value).context("failed to serialize json output")?;
    writeln!(output)?;
    output.flush()?;
    Ok(())
}

/// Keeps at most `max_lines` lines and `max_chars` characters, marking the cut
/// with an ellipsis.
pub fn clamp_text(input: &str, max_lines: usize, max_chars: usize) -> String {
    let lines = input.lines().collect::<Vec<&str>>();
    let mut clamped = lines
        .iter()
        .take(max_lines)
        .copied()
        .collect::<Vec<&str>>()
        .join("\n");
    let mut truncated = lines.len() > max_lines;

    if clamped.chars().count() > max_chars {
        clamped = clamped.chars().take(max_chars).collect();
        truncated = true;
    }

    if truncated {
        clamped = clamped.trim_end().to_string();
        clamped.push('…');
    }
    clamped
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn clamp_text_keeps_short_input() {
        assert_eq!(clamp_text("一行", 3, 10), "一行");
        assert_eq!(clamp_text("", 3, 10), "");
    }

    #[test]
    fn clamp_text_limits_lines_and_chars() {
        assert_eq!(clamp_text("a\nb\nc\nd", 3, 100), "a\nb\nc…");
        assert_eq!(clamp_text("情緒起伏很大", 4, 4), "情緒起伏…");
    }

    #[test]
    fn sha256_file_matches_known_digest() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("data.json");
        fs::write(&path, b"abc").expect("write");
        assert_eq!(
            sha256_file(&path).expect("hash"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }
}
