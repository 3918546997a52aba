//! `settings.conf` parsing.

use tracing::warn;

use super::Settings;

/// What: Check if a line should be skipped (empty or comment).
///
/// Details:
/// - Skips empty lines and lines starting with `#`, `//`, or `;`
fn skip_comment_or_empty(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty()
        || trimmed.starts_with('#')
        || trimmed.starts_with("//")
        || trimmed.starts_with(';')
}

/// What: Remove an inline `#` comment from a value.
///
/// Details:
/// - Only a `#` preceded by whitespace starts a comment, so URL fragments
///   and `//` inside URLs survive.
fn strip_inline_comment(s: &str) -> &str {
    let bytes = s.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        if b == b'#' && i > 0 && bytes[i - 1].is_ascii_whitespace() {
            return s[..i].trim();
        }
    }
    s.trim()
}

/// Interpret the usual truthy spellings.
fn parse_bool(val: &str) -> bool {
    let lv = val.to_ascii_lowercase();
    lv == "true" || lv == "1" || lv == "yes" || lv == "on"
}

/// What: Parse settings from `settings.conf` content.
///
/// Inputs:
/// - `content`: Content of the settings file as a string.
/// - `settings`: Mutable reference to `Settings` to populate.
///
/// Output:
/// - None (modifies `settings` in-place).
///
/// Details:
/// - Keys are lowercased and `.`, `-` and spaces are normalized to `_`.
/// - Unknown keys are ignored; invalid numbers keep the current value.
pub fn parse_settings(content: &str, settings: &mut Settings) {
    for line in content.lines() {
        if skip_comment_or_empty(line) {
            continue;
        }
        let Some((raw_key, val_raw)) = line.trim().split_once('=') else {
            continue;
        };
        let key = raw_key.trim().to_lowercase().replace(['.', '-', ' '], "_");
        let val = strip_inline_comment(val_raw);
        match key.as_str() {
            "page_origin" | "origin" => {
                if !val.is_empty() {
                    settings.page_origin = val.to_string();
                }
            }
            "api_base" | "base_url" | "movie_base_url" => {
                if !val.is_empty() {
                    settings.api_base = val.to_string();
                }
            }
            "image_base" | "img_base" => {
                if !val.is_empty() {
                    settings.image_base = val.to_string();
                }
            }
            "placeholder_image" | "poster_placeholder" => {
                if !val.is_empty() {
                    settings.placeholder_image = val.to_string();
                }
            }
            "embed_base" | "trailer_embed_base" => {
                if !val.is_empty() {
                    settings.embed_base = val.to_string();
                }
            }
            "request_timeout_secs" | "timeout" => match val.parse::<u64>() {
                Ok(v) if v > 0 => settings.request_timeout_secs = v,
                _ => warn!(value = val, "ignoring invalid request_timeout_secs"),
            },
            "discard_stale_responses" => {
                settings.discard_stale_responses = parse_bool(val);
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Parse a settings file with comments, aliases and bad values.
    ///
    /// Inputs:
    /// - Content mixing comment styles, normalized keys and an invalid timeout
    ///
    /// Output:
    /// - Known keys applied; URLs keep their `//`; invalid timeout keeps default
    fn parse_settings_applies_known_keys() {
        let content = "\
# catalog client settings
; legacy comment
// another comment
API-Base = /v2/   # trailing comment
page.origin = https://movies.example.org
image_base = https://img.example.org/w342
request_timeout_secs = soon
discard_stale_responses = yes
unknown_key = 42
not a pair
";
        let mut settings = Settings::default();
        parse_settings(content, &mut settings);
        assert_eq!(settings.api_base, "/v2/");
        assert_eq!(settings.page_origin, "https://movies.example.org");
        assert_eq!(settings.image_base, "https://img.example.org/w342");
        assert_eq!(
            settings.request_timeout_secs,
            Settings::default().request_timeout_secs
        );
        assert!(settings.discard_stale_responses);
    }

    #[test]
    fn inline_comment_requires_leading_whitespace() {
        assert_eq!(strip_inline_comment("a#b"), "a#b");
        assert_eq!(strip_inline_comment(" value  # note"), "value");
        assert_eq!(strip_inline_comment("https://x.org/#top"), "https://x.org/#top");
    }
}
