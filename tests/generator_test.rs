use sessionhop::codegen;
use sessionhop::error::ConfigError;
use sessionhop::preset::{builtins, Preset, Source};
use sessionhop::settings::{CodegenSettings, SettingsData};

fn settings() -> CodegenSettings {
    SettingsData::default().codegen
}

fn preset(source: Source, key: Option<&str>) -> Preset {
    Preset {
        id: "test".to_string(),
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
fn every_builtin_generates() {
    for builtin in builtins() {
        let code = codegen::generate(builtin, &settings()).unwrap();
        assert!(code.starts_with("(function(){"));
        assert!(code.ends_with("})()"));
    }
}

#[test]
fn single_key_presets_embed_key_and_mechanism() {
    let code = codegen::generate(&preset(Source::LocalStorage, Some("token")), &settings()).unwrap();
    assert!(code.contains("\"token\""));
    assert!(code.contains("localStorage.getItem(\"token\")"));
    assert!(code.contains("\"localStorage\"===\"localStorage\""));

    let code = codegen::generate(&preset(Source::Cookie, Some("authToken")), &settings()).unwrap();
    assert!(code.contains("\"authToken\""));
    // The cookie branch scans the header for the key= prefix
    assert!(code.contains("indexOf(\"authToken=\")===0"));
    assert!(code.contains("\"cookie\"===\"localStorage\""));
}

#[test]
fn all_preset_enumerates_storage_without_key() {
    let code = codegen::generate(&preset(Source::All, None), &settings()).unwrap();

    // Index-based enumeration works for 0, 1, or N entries
    assert!(code.contains("for(var i=0;i<localStorage.length;i++)"));
    assert!(code.contains("localStorage.key(i)"));
    assert!(code.contains("document.cookie.split(';')"));
    // The whole payload is serialized at runtime, no per-key references
    assert!(code.contains("JSON.stringify(d)"));
}

#[test]
fn missing_key_refused_before_any_code_exists() {
    for source in [Source::LocalStorage, Source::Cookie, Source::Custom] {
        let err = codegen::generate(&preset(source, None), &settings()).unwrap_err();
        assert!(matches!(err, ConfigError::MissingKey { .. }));

        let err = codegen::generate(&preset(source, Some("")), &settings()).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyKey { .. }));
    }
}

#[test]
fn generated_extractor_guards_missing_values() {
    let code = codegen::generate(&preset(Source::LocalStorage, Some("token")), &settings()).unwrap();

    // Code A itself must bail out before building code B when the key is
    // absent at run time; no null/undefined payload may be embedded.
    let guard = code.find("if(v==null)").unwrap();
    let code_b = code.find("var b='javascript:").unwrap();
    assert!(guard < code_b);
    assert!(code.contains("not found"));
}

#[test]
fn code_b_is_a_bookmarklet() {
    for builtin in builtins() {
        let code = codegen::generate(builtin, &settings()).unwrap();
        assert!(code.contains("var b='javascript:(function(){"));
    }
}

#[test]
fn injector_writes_cookies_with_bounded_lifetime() {
    let code = codegen::generate(&preset(Source::Cookie, Some("sid")), &settings()).unwrap();
    assert!(code.contains("encodeURIComponent(v)"));
    assert!(code.contains("path=/; max-age=86400"));

    let code = codegen::generate(&preset(Source::All, None), &settings()).unwrap();
    assert!(code.contains("encodeURIComponent(d.c[k])"));
    assert!(code.contains("path=/; max-age=86400"));
}

#[test]
fn injector_navigates_back_after_delay() {
    let code = codegen::generate(&preset(Source::LocalStorage, Some("token")), &settings()).unwrap();
    assert!(code.contains("setTimeout(function(){location.href=u},500)"));

    let code = codegen::generate(&preset(Source::All, None), &settings()).unwrap();
    assert!(code.contains("setTimeout(function(){location.href=d.u},500)"));
}

#[test]
fn delivery_chain_tiers_in_order() {
    let code = codegen::generate(&preset(Source::All, None), &settings()).unwrap();

    let native = code.find("navigator.clipboard.writeText").unwrap();
    let legacy = code.find("document.execCommand('copy')").unwrap();
    let manual = code.find("Select and copy the code below").unwrap();
    assert!(native < legacy);
    assert!(legacy < manual);

    // Secure-context gate on tier 1, auto-dismiss on tier 3
    assert!(code.contains("window.isSecureContext"));
    assert!(code.contains("},10000)"));

    // Code A hands code B to the chain exactly once
    assert!(code.contains("f(b)"));
}

#[test]
fn keys_are_json_escaped_when_spliced() {
    let code = codegen::generate(
        &preset(Source::LocalStorage, Some("we\"ird\\key")),
        &settings(),
    )
    .unwrap();

    assert!(code.contains(r#"localStorage.getItem("we\"ird\\key")"#));
}
