use serde::{Serialize, Deserialize};
use utoipa::ToSchema;

/// Qualitative strength, ordered from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum StrengthTier {
    VeryWeak,
    Medium,
    Strong,
    VeryStrong,
}

impl StrengthTier {
    /// Lower bounds are inclusive: 40 is `Medium`, 70 `Strong`, 90 `VeryStrong`.
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=39 => StrengthTier::VeryWeak,
            40..=69 => StrengthTier::Medium,
            70..=89 => StrengthTier::Strong,
            _ => StrengthTier::VeryStrong,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StrengthTier::VeryWeak => "Débil",
            StrengthTier::Medium => "Media",
            StrengthTier::Strong => "Fuerte",
            StrengthTier::VeryStrong => "Muy Fuerte",
        }
    }
}

impl std::fmt::Display for StrengthTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StrengthScore {
    /// 0-100
    pub value: u8,
    pub tier: StrengthTier,
}

impl StrengthScore {
    pub fn new(value: u8) -> Self {
        Self { value, tier: StrengthTier::from_score(value) }
    }
}

#[derive(Debug, Default, Clone, Copy)]
struct Composition {
    length: usize,
    lowercase: bool,
    uppercase: bool,
    digit: bool,
    other: bool,
}

impl Composition {
    fn of(password: &str) -> Self {
        let mut composition = Composition::default();
        for c in password.chars() {
            composition.length += 1;
            match c {
                'a'..='z' => composition.lowercase = true,
                'A'..='Z' => composition.uppercase = true,
                '0'..='9' => composition.digit = true,
                _ => composition.other = true,
            }
        }
        composition
    }
}

// Score a password on length and character variety
pub fn score(password: &str) -> StrengthScore {
    let composition = Composition::of(password);
    let mut value = 0u8;

    for threshold in [8, 12, 16] {
        if composition.length >= threshold {
            value += 20;
        }
    }

    for present in [composition.lowercase, composition.uppercase, composition.digit, composition.other] {
        if present {
            value += 10;
        }
    }

    StrengthScore::new(value)
}

/// Suggestions for improving a password. Does not affect the score.
pub fn feedback(password: &str) -> Vec<String> {
    let composition = Composition::of(password);
    let strength = score(password);
    let mut feedback = Vec::new();

    match strength.tier {
        StrengthTier::VeryWeak => feedback.push("Contraseña débil".to_string()),
        StrengthTier::Medium => feedback.push("Contraseña de fuerza media".to_string()),
        StrengthTier::Strong => feedback.push("Contraseña fuerte".to_string()),
        StrengthTier::VeryStrong => feedback.push("Contraseña muy fuerte".to_string()),
    }

    if !composition.uppercase {
        feedback.push("Añade letras mayúsculas".to_string());
    }
    if !composition.lowercase {
        feedback.push("Añade letras minúsculas".to_string());
    }
    if !composition.digit {
        feedback.push("Añade números".to_string());
    }
    if !composition.other {
        feedback.push("Añade símbolos como !, @ o #".to_string());
    }

    if composition.length < 12 {
        feedback.push("Usa al menos 12 caracteres".to_string());
    } else if composition.length < 16 {
        feedback.push("Para máxima seguridad, usa 16 caracteres o más".to_string());
    }

    if let Some(run) = ascending_run(password) {
        feedback.push(format!("Evita secuencias consecutivas como '{}'", run));
    }

    feedback
}

// First run of three ascending letters or digits, e.g. "abc" or "123"
fn ascending_run(password: &str) -> Option<String> {
    let chars: Vec<char> = password.chars().collect();

    chars.windows(3).find_map(|w| {
        let same_class = w.iter().all(|c| c.is_ascii_digit())
            || w.iter().all(|c| c.is_ascii_alphabetic());
        let ascending = w.windows(2).all(|p| p[1] as u32 == p[0] as u32 + 1);
        (same_class && ascending).then(|| w.iter().collect())
    })
}
