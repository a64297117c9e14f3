// src/education/mod.rs
use std::collections::HashMap;

pub mod tips;

pub use tips::{TipRotation, SECURITY_TIPS};

pub struct EducationManager {
    topics: HashMap<String, TopicContent>,
}

pub struct TopicContent {
    pub id: String,
    pub title: String,
    pub content: String,
    pub category: String,
    pub difficulty: String,
    pub related_topics: Vec<String>,
}

fn topic(id: &str, title: &str, category: &str, difficulty: &str, related: &[&str], content: &str) -> TopicContent {
    TopicContent {
        id: id.to_string(),
        title: title.to_string(),
        content: content.to_string(),
        category: category.to_string(),
        difficulty: difficulty.to_string(),
        related_topics: related.iter().map(|r| r.to_string()).collect(),
    }
}

impl EducationManager {
    pub fn new() -> Self {
        let topics = [
            topic(
                "contrasenas",
                "Contraseñas seguras",
                "Fundamentos",
                "beginner",
                &["2fa", "phishing"],
                r#"# Contraseñas seguras

Una contraseña fuerte es la primera barrera frente a un acceso no autorizado.

## La longitud importa
- Usa al menos 12 caracteres; 16 o más es mejor
- Cada carácter extra multiplica el trabajo de un atacante

## Variedad de caracteres
- Combina mayúsculas, minúsculas, números y símbolos
- Evita secuencias como "abc", "123" o "qwerty"

## Errores comunes
- No uses nombres, fechas de nacimiento ni datos personales
- No reutilices la misma contraseña en varios sitios
- No las compartas con nadie, ni siquiera con soporte técnico

## Recomendación
Usa el generador de CiberConsejos y guarda el resultado en un gestor de contraseñas.
"#,
            ),
            topic(
                "2fa",
                "Autenticación de dos factores",
                "Fundamentos",
                "beginner",
                &["contrasenas"],
                r#"# Autenticación de dos factores (2FA)

La 2FA añade una segunda prueba de identidad además de la contraseña.

## Factores
1. Algo que sabes (contraseña)
2. Algo que tienes (teléfono, llave de seguridad)
3. Algo que eres (huella, rostro)

## Métodos, del menos al más seguro
1. SMS (vulnerable al duplicado de SIM)
2. Correo electrónico
3. Aplicaciones de autenticación
4. Llaves de seguridad físicas

## Buenas prácticas
- Actívala siempre que el servicio lo permita
- Guarda los códigos de recuperación en un lugar seguro
- Nunca compartas un código de verificación
"#,
            ),
            topic(
                "phishing",
                "Cómo reconocer el phishing",
                "Amenazas",
                "beginner",
                &["contrasenas", "redes-sociales"],
                r#"# Cómo reconocer el phishing

El phishing intenta engañarte para que entregues datos o instales malware.

## Señales de alerta
- Urgencia o amenazas ("tu cuenta será bloqueada hoy")
- Remitentes que imitan a empresas conocidas
- Enlaces cuyo dominio no coincide con el de la empresa
- Archivos adjuntos inesperados

## Qué hacer
- Desconfía de mensajes y enlaces sospechosos
- Accede al servicio escribiendo la dirección tú mismo
- Reporta el mensaje y bórralo
"#,
            ),
            topic(
                "redes-sociales",
                "Seguridad en redes sociales",
                "Privacidad",
                "beginner",
                &["privacidad", "phishing"],
                r#"# Seguridad en redes sociales

## Lo que compartes
- Sé cuidadoso con lo que publicas: ubicación, rutinas, documentos
- Lo que subes puede quedar accesible para siempre

## Contactos
- No aceptes solicitudes de amistad de desconocidos
- Verifica perfiles que piden dinero o datos, aunque parezcan conocidos

## Cuentas
- Usa una contraseña distinta para cada red
- Activa la autenticación de dos factores
"#,
            ),
            topic(
                "privacidad",
                "Configuración de privacidad",
                "Privacidad",
                "intermediate",
                &["redes-sociales", "actualizaciones"],
                r#"# Configuración de privacidad

## Revisión periódica
- Revisa regularmente la configuración de privacidad de tus cuentas
- Limita quién puede ver tus publicaciones y tu lista de contactos

## Permisos de aplicaciones
- Retira permisos de ubicación, cámara y micrófono que no sean necesarios
- Elimina las aplicaciones que ya no uses

## Navegador
- Bloquea cookies de terceros
- Borra periódicamente los datos de navegación
"#,
            ),
            topic(
                "actualizaciones",
                "Mantén tu software actualizado",
                "Dispositivos",
                "beginner",
                &["privacidad"],
                r#"# Mantén tu software actualizado

Las actualizaciones corrigen vulnerabilidades que los atacantes ya conocen.

## Recomendaciones
- Mantén tus aplicaciones y navegador actualizados
- Activa las actualizaciones automáticas del sistema operativo
- Descarga software solo desde fuentes oficiales
- Sustituye los dispositivos que ya no reciben parches
"#,
            ),
        ];

        let topics = topics
            .into_iter()
            .map(|t| (t.id.clone(), t))
            .collect();

        Self { topics }
    }

    pub fn get_all_topics(&self) -> Vec<crate::api::types::EducationTopic> {
        let mut topics: Vec<_> = self.topics.values()
            .map(|t| crate::api::types::EducationTopic {
                id: t.id.clone(),
                title: t.title.clone(),
                description: t.content.lines().next().unwrap_or("").trim_start_matches("# ").to_string(),
                category: t.category.clone(),
                difficulty: t.difficulty.clone(),
            })
            .collect();
        topics.sort_by(|a, b| a.id.cmp(&b.id));
        topics
    }

    pub fn get_topic_by_id(&self, id: &str) -> Option<crate::api::types::TopicContent> {
        self.topics.get(id).map(|t| crate::api::types::TopicContent {
            id: t.id.clone(),
            title: t.title.clone(),
            content: t.content.clone(),
            category: t.category.clone(),
            difficulty: t.difficulty.clone(),
            related_topics: t.related_topics.clone(),
        })
    }
}

impl Default for EducationManager {
    fn default() -> Self {
        Self::new()
    }
}
