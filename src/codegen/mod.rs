//! Extraction/injection code generator.
//!
//! `generate` turns a preset into "code A": a self-contained script the
//! user runs in the logged-in browser context. Code A captures the
//! configured state, splices it into "code B" (a `javascript:` bookmarklet
//! that replays the state and navigates back), and hands code B to the
//! inline delivery fallback chain.

pub mod templates;

use serde_json::json;

use crate::error::ConfigError;
use crate::preset::{Preset, Source};
use crate::session::Payload;
use crate::settings::CodegenSettings;

use templates::render;

/// Generate code A for a preset. Refused with a [`ConfigError`] when the
/// preset is malformed (missing or empty key for a non-`all` source).
pub fn generate(preset: &Preset, settings: &CodegenSettings) -> Result<String, ConfigError> {
    preset.validate()?;

    let code_b = match preset.source {
        Source::All => all_code_b_template(settings),
        _ => single_code_b_template(preset, settings),
    };

    let extractor = match preset.source {
        Source::All => templates::ALL_EXTRACTOR.to_string(),
        _ => single_extractor(preset),
    };

    let delivery = render(
        templates::DELIVERY_CHAIN,
        &[("__OVERLAY_MS__", &settings.overlay_timeout_ms.to_string())],
    );

    Ok(render(
        templates::CODE_A_SHELL,
        &[
            ("__EXTRACTOR__", extractor.as_str()),
            ("__CODE_B__", code_b.as_str()),
            ("__DELIVERY__", delivery.as_str()),
        ],
    ))
}

/// Render the code-B string for an already-captured payload. Shares the
/// injector templates with [`generate`]; used by dry-run previews.
pub fn build_code_b(payload: &Payload, settings: &CodegenSettings) -> String {
    match payload {
        Payload::All { local, cookies, url } => {
            let data = json!({ "l": local, "c": cookies, "u": url }).to_string();
            let data = format!("d={}", data);
            render_all_body(settings, &data)
        }
        Payload::Single {
            source,
            key,
            value,
            url,
        } => {
            let data = format!(
                "u=\"{}\",k={},v={}",
                url,
                json_literal(key),
                json_literal(value)
            );
            render_single_body(source, settings, &data)
        }
    }
}

fn single_extractor(preset: &Preset) -> String {
    let key = preset.key();
    let prefix = format!("{}=", key);
    // JS String.slice counts UTF-16 code units
    let prefix_len = prefix.encode_utf16().count();

    render(
        templates::SINGLE_EXTRACTOR,
        &[
            ("__SOURCE__", json_literal(preset.source.as_str()).as_str()),
            ("__PREFIX_LEN__", prefix_len.to_string().as_str()),
            ("__PREFIX__", json_literal(&prefix).as_str()),
            ("__KEY__", json_literal(key).as_str()),
        ],
    )
}

/// Code-B body for `all`, with the payload spliced at code-A runtime via
/// `JSON.stringify`.
fn all_code_b_template(settings: &CodegenSettings) -> String {
    render_all_body(settings, "d='+JSON.stringify(d)+'")
}

/// Code-B body for single-key presets: the URL and value are spliced at
/// code-A runtime, the key at generation time.
fn single_code_b_template(preset: &Preset, settings: &CodegenSettings) -> String {
    let data = format!(
        "u=\"'+u+'\",k={},v='+JSON.stringify(v)+'",
        json_literal(preset.key())
    );
    render_single_body(&preset.source, settings, &data)
}

fn render_all_body(settings: &CodegenSettings, data: &str) -> String {
    let injector = render(
        templates::ALL_INJECTOR,
        &[("__MAX_AGE__", settings.cookie_max_age_secs.to_string().as_str())],
    );

    render(
        templates::ALL_CODE_B_BODY,
        &[
            ("__DATA__", data),
            ("__INJECTOR__", injector.as_str()),
            ("__DELAY_MS__", settings.navigate_delay_ms.to_string().as_str()),
        ],
    )
}

fn render_single_body(source: &Source, settings: &CodegenSettings, data: &str) -> String {
    let injector = render(
        templates::SINGLE_INJECTOR,
        &[
            ("__SOURCE__", json_literal(source.as_str()).as_str()),
            ("__MAX_AGE__", settings.cookie_max_age_secs.to_string().as_str()),
        ],
    );

    render(
        templates::SINGLE_CODE_B_BODY,
        &[
            ("__DATA__", data),
            ("__INJECTOR__", injector.as_str()),
            ("__DELAY_MS__", settings.navigate_delay_ms.to_string().as_str()),
        ],
    )
}

/// JSON-encode a string for splicing into generated code. This is the
/// only escaping applied to keys and source names; anything beyond it is
/// an accepted trust boundary of the tool.
fn json_literal(s: &str) -> String {
    serde_json::to_string(s).expect("string serialization cannot fail")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preset::builtins;
    use crate::settings::SettingsData;
    use std::collections::BTreeMap;

    fn settings() -> CodegenSettings {
        SettingsData::default().codegen
    }

    fn preset(source: Source, key: Option<&str>) -> Preset {
        Preset {
            id: "t".to_string(),
            display_name: "Test".to_string(),
            source,
            key: key.map(str::to_string),
            icon: None,
            description: None,
            is_custom: false,
            created_at: None,
        }
    }

    #[test]
    fn test_generate_refuses_missing_key() {
        let err = generate(&preset(Source::Cookie, None), &settings()).unwrap_err();
        assert!(matches!(err, ConfigError::MissingKey { .. }));
    }

    #[test]
    fn test_single_localstorage_contains_key_and_branch() {
        let code = generate(&preset(Source::LocalStorage, Some("token")), &settings()).unwrap();

        assert!(code.contains("localStorage.getItem(\"token\")"));
        assert!(code.contains("\"localStorage\"===\"localStorage\""));
        assert!(code.contains("javascript:"));
        assert!(code.contains("'sessionhop: key '+\"token\"+' not found'"));
    }

    #[test]
    fn test_single_cookie_scans_header() {
        let code = generate(&preset(Source::Cookie, Some("sid")), &settings()).unwrap();

        assert!(code.contains("document.cookie.split(';')"));
        assert!(code.contains("indexOf(\"sid=\")===0"));
        assert!(code.contains(".slice(4)")); // len of "sid="
    }

    #[test]
    fn test_all_enumerates_storage_by_index() {
        let code = generate(&preset(Source::All, None), &settings()).unwrap();

        assert!(code.contains("for(var i=0;i<localStorage.length;i++)"));
        assert!(code.contains("JSON.stringify(d)"));
        assert!(code.contains("location.href=d.u"));
    }

    #[test]
    fn test_settings_flow_into_code() {
        let mut s = settings();
        s.cookie_max_age_secs = 3600;
        s.navigate_delay_ms = 250;
        s.overlay_timeout_ms = 5000;

        let code = generate(&preset(Source::All, None), &s).unwrap();
        assert!(code.contains("max-age=3600"));
        assert!(code.contains("},250)"));
        assert!(code.contains("},5000)"));
    }

    #[test]
    fn test_delivery_chain_present_in_every_variant() {
        for preset in builtins() {
            let code = generate(preset, &settings()).unwrap();
            assert!(code.contains("navigator.clipboard"));
            assert!(code.contains("execCommand"));
            assert!(code.contains("Select and copy"));
            assert!(code.contains("f(b)"));
        }
    }

    #[test]
    fn test_no_placeholder_survives_rendering() {
        for preset in builtins() {
            let code = generate(preset, &settings()).unwrap();
            assert!(!code.contains("__"), "unrendered placeholder in {}", code);
        }
    }

    #[test]
    fn test_build_code_b_single() {
        let payload = Payload::Single {
            source: Source::LocalStorage,
            key: "token".to_string(),
            value: "abc123".to_string(),
            url: "https://app.example.com/home".to_string(),
        };

        let code_b = build_code_b(&payload, &settings());
        assert!(code_b.starts_with("javascript:(function(){"));
        assert!(code_b.contains("k=\"token\",v=\"abc123\""));
        assert!(code_b.contains("localStorage.setItem(k,v)"));
        assert!(code_b.contains("u=\"https://app.example.com/home\""));
    }

    #[test]
    fn test_build_code_b_all_embeds_payload() {
        let mut local = BTreeMap::new();
        local.insert("token".to_string(), "abc".to_string());
        let payload = Payload::All {
            local,
            cookies: BTreeMap::new(),
            url: "https://app.example.com/".to_string(),
        };

        let code_b = build_code_b(&payload, &settings());
        assert!(code_b.contains("\"l\":{\"token\":\"abc\"}"));
        assert!(code_b.contains("localStorage.setItem(k,d.l[k])"));
    }
}
