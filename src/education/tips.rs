// src/education/tips.rs

pub const SECURITY_TIPS: [&str; 8] = [
    "💡 Usa contraseñas diferentes para cada sitio",
    "🛡️ Activa la autenticación de dos factores siempre",
    "🔒 Nunca compartas tus contraseñas con nadie",
    "📱 Revisa regularmente la configuración de privacidad",
    "🔍 Desconfía de mensajes y enlaces sospechosos",
    "🌐 Mantén tus aplicaciones y navegador actualizados",
    "👁️ Sé cuidadoso con lo que compartes online",
    "🚫 No aceptes solicitudes de amistad de desconocidos",
];

/// Cycles through the tips forever, starting from the first.
#[derive(Debug, Default, Clone)]
pub struct TipRotation {
    current: usize,
}

impl TipRotation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the tip the next call will return.
    pub fn position(&self) -> usize {
        self.current
    }

    pub fn next_tip(&mut self) -> &'static str {
        let tip = SECURITY_TIPS[self.current];
        self.current = (self.current + 1) % SECURITY_TIPS.len();
        tip
    }
}

impl Iterator for TipRotation {
    type Item = &'static str;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.next_tip())
    }
}
