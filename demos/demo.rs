use sessionhop::codegen;
use sessionhop::preset::{builtins, PresetDraft, Source};
use sessionhop::session::{capture, inject, BrowserState};
use sessionhop::settings::SettingsData;
use sessionhop::Sessionhop;
use tempfile::TempDir;

fn main() -> anyhow::Result<()> {
    println!("Sessionhop Demo - Carry a web session between browsers");
    println!("=====================================================\n");

    let data_dir = TempDir::new()?;
    let app = Sessionhop::new(Some(data_dir.path()))?;

    println!("Built-in presets:");
    for preset in builtins() {
        println!(
            "  {} {} (source={})",
            preset.icon.as_deref().unwrap_or("•"),
            preset.id,
            preset.source
        );
    }

    // Generate code A for the localStorage token preset
    let code = app.generate("token")?;
    println!("\nCode A for 'token' ({} chars):", code.len());
    println!("{}\n", code);

    // Custom preset for a session cookie
    let custom = app.add_preset(&PresetDraft {
        display_name: Some("Session id".to_string()),
        source: Some(Source::Cookie),
        key: Some("sid".to_string()),
        ..Default::default()
    })?;
    println!("Created custom preset {}", custom.id);

    // Dry-run the whole flow against a simulated browser
    let mut source = BrowserState::new("https://app.example.com/dashboard");
    source.local_set("token", "abc123");
    source.set_cookie("sid", "s3ss10n");

    let settings = SettingsData::default().codegen;
    let payload = capture(&app.find_preset("all")?, &source)?;
    let code_b = codegen::build_code_b(&payload, &settings);
    println!("\nCode B a capture on that page would produce:");
    println!("{}\n", code_b);

    let mut target = BrowserState::new("about:blank");
    inject(&payload, &mut target, &settings);
    println!(
        "After injection the target is at {} with token={:?} and sid={:?}",
        target.url(),
        target.local_get("token"),
        target.cookie_values().get("sid")
    );

    println!("\nHistory now holds {} record(s)", app.history().len());

    Ok(())
}
