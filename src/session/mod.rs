//! In-memory model of the browser surface the generated scripts touch.
//!
//! [`capture`] and [`inject`] mirror the extractor and injector templates
//! operation for operation, so the round-trip behavior of generated code
//! can be exercised without a browser. The same model backs the CLI's
//! `preview` dry-run.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::CaptureError;
use crate::preset::{Preset, Source};
use crate::settings::CodegenSettings;

/// Everything `encodeURIComponent` leaves intact besides alphanumerics.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// `encodeURIComponent` equivalent.
pub fn encode_component(s: &str) -> String {
    utf8_percent_encode(s, COMPONENT).to_string()
}

/// `decodeURIComponent` equivalent (lossy on broken sequences).
pub fn decode_component(s: &str) -> String {
    percent_decode_str(s).decode_utf8_lossy().into_owned()
}

#[derive(Debug, Clone, PartialEq)]
struct CookieEntry {
    value: String,
    path: Option<String>,
    max_age: Option<u64>,
}

/// Fake browsing context: URL, localStorage, and a cookie jar that
/// renders a percent-encoded `document.cookie` header and accepts
/// cookie-assignment strings the way the injector writes them.
#[derive(Debug, Clone, Default)]
pub struct BrowserState {
    url: String,
    local: BTreeMap<String, String>,
    cookies: BTreeMap<String, CookieEntry>,
}

impl BrowserState {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn navigate(&mut self, url: impl Into<String>) {
        self.url = url.into();
    }

    pub fn local_set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.local.insert(key.into(), value.into());
    }

    pub fn local_get(&self, key: &str) -> Option<&str> {
        self.local.get(key).map(String::as_str)
    }

    pub fn local_entries(&self) -> &BTreeMap<String, String> {
        &self.local
    }

    /// Seed a cookie directly (decoded value), the way a site would have
    /// set it before capture.
    pub fn set_cookie(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.cookies.insert(
            name.into(),
            CookieEntry {
                value: value.into(),
                path: None,
                max_age: None,
            },
        );
    }

    /// Decoded cookie name/value pairs.
    pub fn cookie_values(&self) -> BTreeMap<String, String> {
        self.cookies
            .iter()
            .map(|(name, entry)| (name.clone(), entry.value.clone()))
            .collect()
    }

    pub fn cookie_max_age(&self, name: &str) -> Option<u64> {
        self.cookies.get(name).and_then(|entry| entry.max_age)
    }

    pub fn cookie_path(&self, name: &str) -> Option<&str> {
        self.cookies
            .get(name)
            .and_then(|entry| entry.path.as_deref())
    }

    /// Render the `document.cookie` read view: `name=encoded; ...`.
    pub fn cookie_header(&self) -> String {
        self.cookies
            .iter()
            .map(|(name, entry)| format!("{}={}", name, encode_component(&entry.value)))
            .collect::<Vec<_>>()
            .join("; ")
    }

    /// Apply a `document.cookie = "name=encoded; path=/; max-age=N"`
    /// assignment. The value is split on the first `=` and decoded.
    pub fn apply_cookie_string(&mut self, assignment: &str) {
        let mut parts = assignment.split(';');
        let Some(pair) = parts.next() else { return };
        let pair = pair.trim();
        let Some(eq) = pair.find('=') else { return };

        let name = pair[..eq].to_string();
        let value = decode_component(&pair[eq + 1..]);

        let mut path = None;
        let mut max_age = None;
        for attr in parts {
            let attr = attr.trim();
            if let Some(p) = attr.strip_prefix("path=") {
                path = Some(p.to_string());
            } else if let Some(a) = attr.strip_prefix("max-age=") {
                max_age = a.parse().ok();
            }
        }

        self.cookies.insert(
            name,
            CookieEntry {
                value,
                path,
                max_age,
            },
        );
    }
}

/// What the extractor half of code A captures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Payload {
    All {
        local: BTreeMap<String, String>,
        cookies: BTreeMap<String, String>,
        url: String,
    },
    Single {
        source: Source,
        key: String,
        value: String,
        url: String,
    },
}

impl Payload {
    pub fn url(&self) -> &str {
        match self {
            Payload::All { url, .. } => url,
            Payload::Single { url, .. } => url,
        }
    }
}

/// Mirror of the extractor templates. A missing key is a hard error:
/// no payload, and therefore no code B, ever exists for it.
pub fn capture(preset: &Preset, state: &BrowserState) -> Result<Payload, CaptureError> {
    match preset.source {
        Source::All => {
            let mut cookies = BTreeMap::new();
            for pair in state.cookie_header().split(';') {
                let pair = pair.trim();
                if let Some(eq) = pair.find('=') {
                    if eq > 0 {
                        cookies.insert(pair[..eq].to_string(), decode_component(&pair[eq + 1..]));
                    }
                }
            }

            Ok(Payload::All {
                local: state.local_entries().clone(),
                cookies,
                url: state.url().to_string(),
            })
        }
        Source::LocalStorage => {
            let key = preset.key();
            let value = state.local_get(key).ok_or_else(|| CaptureError::KeyNotFound {
                key: key.to_string(),
                mechanism: "localStorage".to_string(),
            })?;

            Ok(Payload::Single {
                source: preset.source,
                key: key.to_string(),
                value: value.to_string(),
                url: state.url().to_string(),
            })
        }
        // The generated script compares the source literal against
        // "localStorage", so cookie and custom share the cookie scan.
        Source::Cookie | Source::Custom => {
            let key = preset.key();
            let prefix = format!("{}=", key);

            let value = state
                .cookie_header()
                .split(';')
                .map(str::trim)
                .find(|pair| pair.starts_with(&prefix))
                .map(|pair| decode_component(&pair[prefix.len()..]))
                .ok_or_else(|| CaptureError::KeyNotFound {
                    key: key.to_string(),
                    mechanism: "cookies".to_string(),
                })?;

            Ok(Payload::Single {
                source: preset.source,
                key: key.to_string(),
                value,
                url: state.url().to_string(),
            })
        }
    }
}

/// Mirror of the injector half of code B: write the payload into the
/// target context, then navigate to the captured URL.
pub fn inject(payload: &Payload, state: &mut BrowserState, settings: &CodegenSettings) {
    match payload {
        Payload::All {
            local,
            cookies,
            url,
        } => {
            for (key, value) in local {
                state.local_set(key.clone(), value.clone());
            }
            for (name, value) in cookies {
                write_cookie(state, name, value, settings);
            }
            state.navigate(url.clone());
        }
        Payload::Single {
            source,
            key,
            value,
            url,
        } => {
            if *source == Source::LocalStorage {
                state.local_set(key.clone(), value.clone());
            } else {
                write_cookie(state, key, value, settings);
            }
            state.navigate(url.clone());
        }
    }
}

fn write_cookie(state: &mut BrowserState, name: &str, value: &str, settings: &CodegenSettings) {
    state.apply_cookie_string(&format!(
        "{}={}; path=/; max-age={}",
        name,
        encode_component(value),
        settings.cookie_max_age_secs
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::SettingsData;
    use pretty_assertions::assert_eq;

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
    fn test_component_coding_matches_js() {
        assert_eq!(encode_component("a b&c=d"), "a%20b%26c%3Dd");
        assert_eq!(encode_component("safe-_.!~*'()"), "safe-_.!~*'()");
        assert_eq!(decode_component("a%20b%26c%3Dd"), "a b&c=d");
    }

    #[test]
    fn test_cookie_header_round_trip() {
        let mut state = BrowserState::new("https://example.com/");
        state.set_cookie("sid", "x y=z");

        assert_eq!(state.cookie_header(), "sid=x%20y%3Dz");

        let mut target = BrowserState::new("about:blank");
        target.apply_cookie_string("sid=x%20y%3Dz; path=/; max-age=86400");
        assert_eq!(target.cookie_values().get("sid").unwrap(), "x y=z");
        assert_eq!(target.cookie_max_age("sid"), Some(86_400));
        assert_eq!(target.cookie_path("sid"), Some("/"));
    }

    #[test]
    fn test_capture_missing_key_is_hard_error() {
        let state = BrowserState::new("https://example.com/");

        let err = capture(&preset(Source::LocalStorage, Some("token")), &state).unwrap_err();
        assert_eq!(
            err,
            CaptureError::KeyNotFound {
                key: "token".to_string(),
                mechanism: "localStorage".to_string(),
            }
        );

        let err = capture(&preset(Source::Cookie, Some("sid")), &state).unwrap_err();
        assert_eq!(
            err,
            CaptureError::KeyNotFound {
                key: "sid".to_string(),
                mechanism: "cookies".to_string(),
            }
        );
    }

    #[test]
    fn test_capture_cookie_value_with_equals() {
        let mut state = BrowserState::new("https://example.com/");
        state.set_cookie("sid", "a=b=c");

        let payload = capture(&preset(Source::Cookie, Some("sid")), &state).unwrap();
        match payload {
            Payload::Single { value, .. } => assert_eq!(value, "a=b=c"),
            other => panic!("unexpected payload: {:?}", other),
        }
    }

    #[test]
    fn test_custom_source_takes_cookie_path() {
        let mut state = BrowserState::new("https://example.com/");
        state.set_cookie("sid", "xyz");

        let payload = capture(&preset(Source::Custom, Some("sid")), &state).unwrap();
        match payload {
            Payload::Single { source, value, .. } => {
                assert_eq!(source, Source::Custom);
                assert_eq!(value, "xyz");
            }
            other => panic!("unexpected payload: {:?}", other),
        }
    }

    #[test]
    fn test_inject_single_navigates_back() {
        let payload = Payload::Single {
            source: Source::LocalStorage,
            key: "token".to_string(),
            value: "abc123".to_string(),
            url: "https://app.example.com/dash".to_string(),
        };

        let mut target = BrowserState::new("about:blank");
        inject(&payload, &mut target, &settings());

        assert_eq!(target.local_get("token"), Some("abc123"));
        assert_eq!(target.url(), "https://app.example.com/dash");
    }
}
