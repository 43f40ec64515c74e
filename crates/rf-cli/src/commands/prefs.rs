//! Show and edit saved preferences.

use std::path::Path;

use rf_game::Preferences;
use rf_narrative::Mode;

pub fn show(path: &Path) -> Result<(), String> {
    let prefs = Preferences::load(path);
    println!("  File:           {}", path.display());
    println!("  Mode:           {}", prefs.mode);
    println!("  Muted:          {}", on_off(prefs.muted));
    println!("  High contrast:  {}", on_off(prefs.high_contrast));
    println!("  Reduced motion: {}", on_off(prefs.reduced_motion));
    Ok(())
}

pub fn set_mode(path: &Path, mode: &str) -> Result<(), String> {
    let mode = Mode::parse(mode).map_err(|e| e.to_string())?;
    let mut prefs = Preferences::load(path);
    prefs.mode = mode;
    prefs.save(path).map_err(|e| e.to_string())?;
    println!("  Mode set to {mode}.");
    Ok(())
}

pub fn toggle(path: &Path, toggle: &str) -> Result<(), String> {
    let mut prefs = Preferences::load(path);
    let (label, value) = match toggle.to_lowercase().as_str() {
        "muted" | "mute" | "sound" => ("Muted", prefs.toggle_muted()),
        "contrast" => ("High contrast", prefs.toggle_contrast()),
        "motion" | "reduced-motion" => ("Reduced motion", prefs.toggle_reduced_motion()),
        other => {
            return Err(format!(
                "unknown toggle: {other} (expected muted, contrast, or motion)"
            ));
        }
    };
    prefs.save(path).map_err(|e| e.to_string())?;
    println!("  {label}: {}", on_off(value));
    Ok(())
}

fn on_off(value: bool) -> &'static str {
    if value { "on" } else { "off" }
}
