// src/cli/handlers.rs
use std::error::Error;
use std::time::Duration;

use console::style;
use serde::Serialize;

use crate::cli::commands::{GenerateArgs, SettingsAction};
use crate::core::config::Config;
use crate::core::preferences::{Preferences, PreferencesStore};
use crate::education::{EducationManager, TipRotation};
use crate::generators::{strength, PasswordGenerator, StrengthScore};
use crate::utils::{is_valid_email, mask_secret, meets_password_policy, strength_bar};

#[derive(Debug, Serialize)]
struct GeneratedOutput {
    password: String,
    strength: StrengthScore,
    secure: bool,
}

#[derive(Debug, Serialize)]
struct ScoreOutput {
    strength: StrengthScore,
    label: &'static str,
    feedback: Vec<String>,
}

// Saved preferences, or defaults built from the config
pub fn load_preferences(config: &Config) -> Preferences {
    let defaults = Preferences::with_default_length(config.default_password_length);

    let store = match PreferencesStore::from_config(config) {
        Ok(store) => store,
        Err(_) => return defaults,
    };

    match store.load_or(defaults.clone()) {
        Ok(preferences) => preferences,
        Err(e) => {
            log::warn!("Ignoring unreadable settings at {}: {}", store.path().display(), e);
            defaults
        }
    }
}

/// Command-line switches layered over saved preferences.
pub fn apply_generate_args(mut preferences: Preferences, args: &GenerateArgs) -> Preferences {
    if let Some(length) = args.length {
        preferences.length = length;
    }
    if args.no_uppercase {
        preferences.uppercase = false;
    }
    if args.no_lowercase {
        preferences.lowercase = false;
    }
    if args.no_digits {
        preferences.digits = false;
    }
    if args.no_symbols {
        preferences.symbols = false;
    }
    preferences
}

pub fn print_strength(score: &StrengthScore) {
    let label = match score.value {
        0..=39 => style(score.tier.label()).red(),
        40..=69 => style(score.tier.label()).yellow(),
        70..=89 => style(score.tier.label()).cyan(),
        _ => style(score.tier.label()).green(),
    };
    println!("   Fortaleza: {} {:>3}/100 {}", strength_bar(score.value, 20), score.value, label);
}

pub fn handle_generate(config: &Config, args: &GenerateArgs) -> Result<(), Box<dyn Error>> {
    let preferences = apply_generate_args(load_preferences(config), args);
    let options = preferences.to_options();

    let mut generator = PasswordGenerator::new();
    if !generator.is_secure() && !args.json {
        eprintln!("{}", style("⚠️ Generador seguro no disponible: las contraseñas son de mejor esfuerzo").yellow());
    }

    let mut outputs = Vec::new();
    for _ in 0..args.count {
        // An empty selection surfaces here, before anything is printed
        let password = generator.generate_password(&options)?;
        let strength = strength::score(password.as_str());
        outputs.push(GeneratedOutput {
            password: password.into_string(),
            strength,
            secure: generator.is_secure(),
        });
    }

    if args.save {
        let store = PreferencesStore::from_config(config)?;
        store.save(&Preferences::from(&options))?;
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outputs)?);
        return Ok(());
    }

    for output in &outputs {
        println!("🔐 {}", style(&output.password).bold());
        print_strength(&output.strength);
    }

    Ok(())
}

pub fn handle_score(password: &str, json: bool) -> Result<(), Box<dyn Error>> {
    let score = strength::score(password);
    log::debug!("Scored {} at {}", mask_secret(password), score.value);

    let output = ScoreOutput {
        strength: score,
        label: score.tier.label(),
        feedback: strength::feedback(password),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    print_strength(&output.strength);
    for line in output.feedback.iter().skip(1) {
        println!("   • {}", line);
    }

    Ok(())
}

pub async fn handle_tips(rotate: bool, interval: u64, count: Option<usize>) -> Result<(), Box<dyn Error>> {
    let mut rotation = TipRotation::new();

    if !rotate {
        for tip in rotation.take(crate::education::SECURITY_TIPS.len()) {
            println!("{}", tip);
        }
        return Ok(());
    }

    let mut ticker = tokio::time::interval(Duration::from_secs(interval.max(1)));
    let mut shown = 0usize;
    loop {
        ticker.tick().await;
        println!("{}", rotation.next_tip());
        shown += 1;
        if count.is_some_and(|limit| shown >= limit) {
            return Ok(());
        }
    }
}

pub fn handle_topics() -> Result<(), Box<dyn Error>> {
    let manager = EducationManager::new();
    for topic in manager.get_all_topics() {
        println!("{:<16} {} {}", style(&topic.id).cyan(), topic.title, style(format!("({})", topic.category)).dim());
    }
    Ok(())
}

pub fn handle_topic(id: &str) -> Result<(), Box<dyn Error>> {
    let manager = EducationManager::new();
    let topic = manager
        .get_topic_by_id(id)
        .ok_or_else(|| format!("Tema no encontrado: {}", id))?;

    println!("{}", topic.content);
    if !topic.related_topics.is_empty() {
        println!("{} {}", style("Relacionados:").dim(), topic.related_topics.join(", "));
    }
    Ok(())
}

pub fn handle_check_email(address: &str) -> Result<(), Box<dyn Error>> {
    if is_valid_email(address) {
        println!("✅ {} parece una dirección válida", address);
        Ok(())
    } else {
        Err(format!("{} no es una dirección de correo válida", address).into())
    }
}

pub fn handle_check_policy(password: &str) -> Result<(), Box<dyn Error>> {
    if meets_password_policy(password) {
        println!("✅ La contraseña cumple la política");
        Ok(())
    } else {
        Err("La contraseña necesita 8+ caracteres con mayúscula, minúscula, número y uno de @$!%*?&".into())
    }
}

/// Merge `set` values into the current preferences; refuses to switch every category off.
pub fn merge_settings(mut preferences: Preferences, action: &SettingsAction) -> Result<Preferences, Box<dyn Error>> {
    if let SettingsAction::Set { length, uppercase, lowercase, digits, symbols } = action {
        if let Some(length) = length {
            preferences.length = crate::generators::password::clamp_length(Some(*length));
        }
        preferences.uppercase = uppercase.unwrap_or(preferences.uppercase);
        preferences.lowercase = lowercase.unwrap_or(preferences.lowercase);
        preferences.digits = digits.unwrap_or(preferences.digits);
        preferences.symbols = symbols.unwrap_or(preferences.symbols);

        if preferences.enabled_count() == 0 {
            return Err(crate::generators::GeneratorError::NoCategorySelected.into());
        }
    }
    Ok(preferences)
}

pub fn handle_settings(config: &Config, action: &SettingsAction) -> Result<(), Box<dyn Error>> {
    let store = PreferencesStore::from_config(config)?;

    match action {
        SettingsAction::Show => {
            let preferences = load_preferences(config);
            println!("{}", serde_json::to_string_pretty(&preferences)?);
            println!("{} {}", style("Archivo:").dim(), store.path().display());
        }
        SettingsAction::Reset => {
            store.reset()?;
            println!("✅ Preferencias restablecidas");
        }
        SettingsAction::Set { .. } => {
            let preferences = merge_settings(load_preferences(config), action)?;
            store.save(&preferences)?;
            println!("✅ Preferencias guardadas");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::GeneratorError;

    #[test]
    fn flags_switch_categories_off() {
        let args = GenerateArgs {
            length: Some(12),
            no_symbols: true,
            no_uppercase: true,
            ..GenerateArgs::default()
        };

        let preferences = apply_generate_args(Preferences::default(), &args);
        assert_eq!(preferences.length, 12);
        assert!(!preferences.symbols);
        assert!(!preferences.uppercase);
        assert!(preferences.lowercase && preferences.digits);
    }

    #[test]
    fn generate_fails_when_every_category_is_off() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config { settings_dir: Some(dir.path().to_path_buf()), ..Config::default() };
        let args = GenerateArgs {
            no_uppercase: true,
            no_lowercase: true,
            no_digits: true,
            no_symbols: true,
            count: 1,
            ..GenerateArgs::default()
        };

        let err = handle_generate(&config, &args).unwrap_err();
        assert_eq!(err.downcast_ref::<GeneratorError>(), Some(&GeneratorError::NoCategorySelected));
    }

    #[test]
    fn generate_can_save_preferences() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config { settings_dir: Some(dir.path().to_path_buf()), ..Config::default() };
        let args = GenerateArgs {
            length: Some(20),
            no_symbols: true,
            count: 2,
            json: true,
            save: true,
            ..GenerateArgs::default()
        };

        handle_generate(&config, &args).unwrap();

        let saved = load_preferences(&config);
        assert_eq!(saved.length, 20);
        assert!(!saved.symbols);
    }

    #[test]
    fn settings_refuse_to_disable_everything() {
        let action = SettingsAction::Set {
            length: None,
            uppercase: Some(false),
            lowercase: Some(false),
            digits: Some(false),
            symbols: Some(false),
        };
        assert!(merge_settings(Preferences::default(), &action).is_err());
    }

    #[test]
    fn settings_clamp_length() {
        let action = SettingsAction::Set {
            length: Some(3),
            uppercase: None,
            lowercase: None,
            digits: Some(false),
            symbols: None,
        };
        let merged = merge_settings(Preferences::default(), &action).unwrap();
        assert_eq!(merged.length, 8);
        assert!(!merged.digits);
    }

    #[test]
    fn unreadable_settings_fall_back_to_config_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("settings.json"), "{oops").unwrap();
        let config = Config {
            settings_dir: Some(dir.path().to_path_buf()),
            default_password_length: 24,
            ..Config::default()
        };

        assert_eq!(load_preferences(&config), Preferences::with_default_length(24));
    }

    #[test]
    fn email_and_policy_checks_report_errors() {
        assert!(handle_check_email("ana@example.com").is_ok());
        assert!(handle_check_email("ana@").is_err());
        assert!(handle_check_policy("Segura1!").is_ok());
        assert!(handle_check_policy("segura").is_err());
    }

    #[test]
    fn unknown_topic_is_an_error() {
        assert!(handle_topic("phishing").is_ok());
        assert!(handle_topic("nada").is_err());
    }
}
