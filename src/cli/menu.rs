// src/cli/menu.rs
use inquire::list_option::ListOption;
use inquire::validator::Validation;
use inquire::{Confirm, MultiSelect, Password, Select, Text};
use std::error::Error;

use crate::cli::handlers;
use crate::core::config::Config;
use crate::core::preferences::{Preferences, PreferencesStore};
use crate::education::{EducationManager, TipRotation};
use crate::generators::password::GenerationRequest;
use crate::generators::{strength, PasswordGenerator};
use crate::models::CharacterCategory;

const GENERATE: &str = "🔑 Generar contraseña";
const ANALYZE: &str = "📊 Analizar una contraseña";
const TIP: &str = "💡 Consejo de seguridad";
const TOPICS: &str = "📚 Temas de ciberseguridad";
const EXIT: &str = "🚪 Salir";

fn selected_indexes(preferences: &Preferences) -> Vec<usize> {
    [preferences.uppercase, preferences.lowercase, preferences.digits, preferences.symbols]
        .into_iter()
        .enumerate()
        .filter_map(|(i, enabled)| enabled.then_some(i))
        .collect()
}

fn preferences_from(categories: &[CharacterCategory], length: usize) -> Preferences {
    Preferences {
        length,
        uppercase: categories.contains(&CharacterCategory::Uppercase),
        lowercase: categories.contains(&CharacterCategory::Lowercase),
        digits: categories.contains(&CharacterCategory::Digits),
        symbols: categories.contains(&CharacterCategory::Symbols),
    }
}

pub fn run_cli_menu(config: &Config) -> Result<(), Box<dyn Error>> {
    println!("╔══════════════════════════════════════╗");
    println!("║         🛡️  CIBERCONSEJOS            ║");
    println!("╚══════════════════════════════════════╝");

    let mut generator = PasswordGenerator::new();
    if !generator.is_secure() {
        println!("⚠️ Generador seguro no disponible: las contraseñas son de mejor esfuerzo");
    }

    let mut preferences = handlers::load_preferences(config);
    let mut tips = TipRotation::new();
    let education = EducationManager::new();

    loop {
        println!();
        let choice = Select::new("¿Qué quieres hacer?", vec![GENERATE, ANALYZE, TIP, TOPICS, EXIT]).prompt()?;

        match choice {
            GENERATE => {
                let defaults = selected_indexes(&preferences);
                // The last category cannot be deselected
                let categories = MultiSelect::new("Tipos de carácter:", CharacterCategory::ALL.to_vec())
                    .with_default(&defaults)
                    .with_validator(|selected: &[ListOption<&CharacterCategory>]| {
                        if selected.is_empty() {
                            Ok(Validation::Invalid("Selecciona al menos un tipo de carácter".into()))
                        } else {
                            Ok(Validation::Valid)
                        }
                    })
                    .prompt()?;

                let raw_length = Text::new("Longitud (8-32):")
                    .with_default(&preferences.length.to_string())
                    .prompt()?;
                let request = GenerationRequest::from_raw_length(categories.iter().copied(), &raw_length);

                match generator.generate(&request) {
                    Ok(password) => {
                        println!("\n🔐 {}", console::style(password.as_str()).bold());
                        handlers::print_strength(&strength::score(password.as_str()));
                        preferences = preferences_from(&categories, request.length());
                    }
                    Err(e) => println!("⚠️ {}", e),
                }

                if let Ok(store) = PreferencesStore::from_config(config) {
                    let remember = Confirm::new("¿Recordar estas opciones?")
                        .with_default(false)
                        .prompt()?;
                    if remember {
                        match store.save(&preferences) {
                            Ok(()) => println!("✅ Preferencias guardadas"),
                            Err(e) => println!("❌ No se pudieron guardar las preferencias: {}", e),
                        }
                    }
                }
            }
            ANALYZE => {
                let password = Password::new("Contraseña a analizar:")
                    .with_display_mode(inquire::PasswordDisplayMode::Masked)
                    .without_confirmation()
                    .prompt()?;
                handlers::handle_score(&password, false)?;
            }
            TIP => println!("{}", tips.next_tip()),
            TOPICS => {
                let topics = education.get_all_topics();
                let titles: Vec<String> = topics.iter().map(|t| t.title.clone()).collect();
                let title = Select::new("Tema:", titles).prompt()?;

                if let Some(summary) = topics.iter().find(|t| t.title == title) {
                    handlers::handle_topic(&summary.id)?;
                }
            }
            _ => {
                println!("👋 ¡Hasta pronto!");
                return Ok(());
            }
        }
    }
}
