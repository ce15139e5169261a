#![no_main]

use bulkren_core::{build_preview, transform, ApplyMode, RenameSettings, ReplaceMode};
use libfuzzer_sys::fuzz_target;
use std::path::PathBuf;

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    let flags = data[0];
    let input = String::from_utf8_lossy(&data[1..]);
    let mut lines = input.lines().map(|s| s.chars().take(100).collect::<String>());

    let stem = lines.next().unwrap_or_default();
    let find = lines.next().unwrap_or_default();
    let replace = lines.next().unwrap_or_default();

    let settings = RenameSettings {
        replace_mode: if flags & 1 == 0 {
            ReplaceMode::PlainText
        } else {
            ReplaceMode::Regex
        },
        apply_mode: match (flags >> 1) % 3 {
            0 => ApplyMode::Anywhere,
            1 => ApplyMode::PrefixOnly,
            _ => ApplyMode::SuffixOnly,
        },
        case_sensitive: flags & 8 == 0,
        replace_whitespace: flags & 16 != 0,
        find_text: find,
        replace_text: replace,
        ..Default::default()
    };

    let _ = transform(&stem, &settings);

    let others: Vec<PathBuf> = lines.take(8).map(|s| PathBuf::from(format!("{}.bin", s))).collect();
    let mut paths = vec![PathBuf::from(format!("{}.bin", stem))];
    paths.extend(others);
    let _ = build_preview(&paths, &settings);
});
