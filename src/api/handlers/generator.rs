// src/api/handlers/generator.rs

use actix_web::{web, HttpResponse, Responder};
use serde_json::Value;
use crate::api::AppState;
use crate::models::PasswordGenerationOptions;
use crate::generators::password::{clamp_signed, parse_length, DEFAULT_LENGTH, MAX_LENGTH, MIN_LENGTH};
use crate::generators::{strength, GeneratorError, PasswordGenerator};
use crate::api::types::{
    PasswordGenerationRequest, PasswordGenerationResponse,
    PasswordAnalysisResponse
};

/// Generate a secure password
///
/// Generates a password from the selected character categories. The length is
/// clamped to 8-32 and every selected category appears at least once.
#[utoipa::path(
    post,
    path = "/generator/password",
    tag = "Generator",
    request_body = PasswordGenerationRequest,
    responses(
        (status = 200, description = "Generated password", body = PasswordGenerationResponse),
        (status = 400, description = "No character category selected", body = PasswordGenerationResponse)
    )
)]
pub async fn generate_password(
    state: web::Data<AppState>,
    generation_req: web::Json<PasswordGenerationRequest>,
) -> impl Responder {
    // Create options with defaults or provided values
    let length = match &generation_req.length {
        None | Some(Value::Null) => state.default_length,
        Some(raw) => requested_length(raw).unwrap_or(DEFAULT_LENGTH),
    };
    let options = PasswordGenerationOptions {
        length,
        include_uppercase: generation_req.include_uppercase.unwrap_or(true),
        include_lowercase: generation_req.include_lowercase.unwrap_or(true),
        include_numbers: generation_req.include_numbers.unwrap_or(true),
        include_symbols: generation_req.include_symbols.unwrap_or(true),
    };

    let mut generator = PasswordGenerator::new();
    let secure = generator.is_secure();

    match generator.generate_password(&options) {
        Ok(password) => {
            let strength = strength::score(password.as_str());
            HttpResponse::Ok().json(PasswordGenerationResponse {
                success: true,
                password: Some(password.into_string()),
                strength: Some(strength),
                secure,
                error: None,
            })
        }
        Err(e @ GeneratorError::NoCategorySelected) => {
            HttpResponse::BadRequest().json(PasswordGenerationResponse {
                success: false,
                password: None,
                strength: None,
                secure,
                error: Some(e.to_string()),
            })
        }
    }
}

// Numbers and numeric strings are clamped; anything else is not a length.
fn requested_length(raw: &Value) -> Option<usize> {
    match raw {
        Value::String(text) => parse_length(text),
        Value::Number(n) => {
            if let Some(signed) = n.as_i64() {
                Some(clamp_signed(signed))
            } else if n.as_u64().is_some() {
                Some(MAX_LENGTH)
            } else {
                n.as_f64()
                    .map(|f| f.trunc().clamp(MIN_LENGTH as f64, MAX_LENGTH as f64) as usize)
            }
        }
        _ => None,
    }
}

/// Analyze password strength
///
/// Scores a password and provides feedback.
#[utoipa::path(
    get,
    path = "/generator/analysis/{pwd}",
    tag = "Generator",
    params(
        ("pwd" = String, Path, description = "Password to analyze")
    ),
    responses(
        (status = 200, description = "Password analysis result", body = PasswordAnalysisResponse)
    )
)]
pub async fn analyze_password(
    path: web::Path<String>,
) -> impl Responder {
    // Path already percent-decodes the segment
    let password = path.into_inner();
    let strength = strength::score(&password);

    HttpResponse::Ok().json(PasswordAnalysisResponse {
        success: true,
        strength,
        label: strength.tier.label().to_string(),
        feedback: strength::feedback(&password),
        error: None,
    })
}
