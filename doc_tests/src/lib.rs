//! Checks that keep SECURITY.md in step with the contract sources.

use regex::Regex;

/// Lines from the `section_name` header up to the next header of equal or higher level.
pub fn extract_section(content: &str, section_name: &str) -> String {
    let mut out = String::new();
    let mut level = None;

    for line in content.lines() {
        if let Some((depth, title)) = header(line) {
            match level {
                Some(l) if depth <= l => break,
                None if title == section_name => level = Some(depth),
                _ => {}
            }
        }
        if level.is_some() {
            out.push_str(line);
            out.push('\n');
        }
    }
    out
}

pub fn section_exists(content: &str, section_name: &str) -> bool {
    content
        .lines()
        .filter_map(header)
        .any(|(_, title)| title == section_name)
}

fn header(line: &str) -> Option<(usize, &str)> {
    if !line.starts_with('#') {
        return None;
    }
    let depth = line.chars().take_while(|&c| c == '#').count();
    Some((depth, line[depth..].trim()))
}

/// `(name, code)` for every `Name = N,` variant in a `#[repr(u32)]` error enum.
pub fn error_variants(source: &str) -> Vec<(String, u32)> {
    let re = Regex::new(r"(?m)^\s*([A-Z][A-Za-z0-9]*)\s*=\s*(\d+),").unwrap();
    re.captures_iter(source)
        .filter_map(|c| Some((c[1].to_string(), c[2].parse().ok()?)))
        .collect()
}

/// `(code, name)` for every row of a markdown table shaped `| N | `Name` | ... |`.
pub fn documented_codes(content: &str) -> Vec<(u32, String)> {
    let re = Regex::new(r"(?m)^\|\s*(\d+)\s*\|\s*`([A-Za-z0-9]+)`\s*\|").unwrap();
    re.captures_iter(content)
        .filter_map(|c| Some((c[1].parse().ok()?, c[2].to_string())))
        .collect()
}

pub fn extract_urls(content: &str) -> Vec<String> {
    let re = Regex::new(r"https?://[^\s\)]+").unwrap();
    re.find_iter(content).map(|m| m.as_str().to_string()).collect()
}
