//! # API Server Module
//!
//! ## Purpose
//! REST API server exposing the incident analysis engine to drafting
//! clients, with request validation and structured JSON errors.
//!
//! ## Input/Output Specification
//! - **Input**: HTTP requests with incident descriptions and FIR details
//! - **Output**: JSON responses with analysis results, drafts, system status
//! - **Endpoints**: Analyze, FIR drafting, suggestions, health
//!
//! ## Key Features
//! - Typed request/response payloads (camelCase analysis contract)
//! - CORS support for web frontends
//! - Per-request analysis ids and timing
//! - Payload and description-length guards at the boundary

use crate::analysis::AnalysisResult;
use crate::errors::AnalysisError;
use crate::report::{draft_fir, FirDraftRequest};
use crate::utils::{TextUtils, Timer};
use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer, Result as ActixResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// API server over the shared application state
pub struct ApiServer {
    app_state: crate::AppState,
}

/// Analyze request payload
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    /// Free-text incident description
    pub description: String,
    /// Officer-selected incident type; optional and advisory
    #[serde(default)]
    pub incident_type: Option<String>,
}

/// Analyze response payload
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    /// Server-assigned id for this analysis, for log correlation
    pub analysis_id: Uuid,
    /// When the analysis ran
    pub analyzed_at: DateTime<Utc>,
    /// Wall-clock time spent analyzing
    pub query_time_ms: u64,
    #[serde(flatten)]
    pub result: AnalysisResult,
}

/// FIR drafting response payload
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FirGenerateResponse {
    /// Rendered FIR document text
    pub document: String,
    /// The analysis the draft was based on
    pub analysis: AnalysisResult,
}

/// Suggestions query parameters
#[derive(Debug, Deserialize)]
pub struct SuggestionsQuery {
    #[serde(default)]
    pub query: String,
}

/// Suggestions response payload
#[derive(Debug, Serialize)]
pub struct SuggestionsResponse {
    pub suggestions: Vec<String>,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: i64,
}

impl ApiServer {
    /// Create new API server
    pub fn new(app_state: crate::AppState) -> Self {
        Self { app_state }
    }

    /// Run the API server until it is stopped
    pub async fn run(self) -> crate::errors::Result<()> {
        let config = self.app_state.config.clone();
        let bind_addr = format!("{}:{}", config.server.host, config.server.port);
        let payload_limit = config.server.max_payload_size_mb as usize * 1024 * 1024;

        tracing::info!("Starting API server on {}", bind_addr);

        let app_state = self.app_state.clone();
        let server = HttpServer::new(move || {
            let cors = if app_state.config.server.enable_cors {
                Cors::permissive()
            } else {
                Cors::default()
            };

            App::new()
                .wrap(cors)
                .app_data(web::Data::new(app_state.clone()))
                .app_data(web::JsonConfig::default().limit(payload_limit))
                .route("/analyze", web::post().to(analyze_handler))
                .route("/fir/generate", web::post().to(fir_generate_handler))
                .route("/suggestions", web::get().to(suggestions_handler))
                .route("/health", web::get().to(health_handler))
                .route("/", web::get().to(index_handler))
        })
        .workers(config.server.workers)
        .bind(&bind_addr)
        .map_err(|e| AnalysisError::Internal {
            message: format!("Failed to bind server to {}: {}", bind_addr, e),
        })?
        .run();

        server.await.map_err(|e| AnalysisError::Internal {
            message: format!("Server error: {}", e),
        })?;

        Ok(())
    }
}

/// Map an engine error to a JSON error response
fn error_response(err: &AnalysisError) -> HttpResponse {
    let body = serde_json::json!({
        "error": err.category(),
        "message": err.to_string(),
    });

    if err.is_caller_error() {
        HttpResponse::BadRequest().json(body)
    } else {
        tracing::error!("Analysis error: {}", err);
        HttpResponse::InternalServerError().json(body)
    }
}

/// Reject descriptions above the configured boundary length
fn check_description_length(
    description: &str,
    max_length: usize,
) -> Result<(), AnalysisError> {
    if description.chars().count() > max_length {
        return Err(AnalysisError::ValidationFailed {
            field: "description".to_string(),
            reason: format!("Description too long: maximum {} characters", max_length),
        });
    }
    Ok(())
}

/// Analyze endpoint handler
async fn analyze_handler(
    app_state: web::Data<crate::AppState>,
    request: web::Json<AnalyzeRequest>,
) -> ActixResult<HttpResponse> {
    let timer = Timer::new("analyze");
    let analysis_id = Uuid::new_v4();
    let hint = request.incident_type.as_deref().unwrap_or("");

    tracing::debug!(
        %analysis_id,
        "Analyze request: {}",
        TextUtils::truncate(&request.description, 80)
    );

    if let Err(e) = check_description_length(
        &request.description,
        app_state.config.analysis.max_description_length,
    ) {
        return Ok(error_response(&e));
    }

    match app_state.engine.analyze(&request.description, hint) {
        Ok(result) => Ok(HttpResponse::Ok().json(AnalyzeResponse {
            analysis_id,
            analyzed_at: Utc::now(),
            query_time_ms: timer.stop(),
            result,
        })),
        Err(e) => Ok(error_response(&e)),
    }
}

/// FIR drafting endpoint handler
async fn fir_generate_handler(
    app_state: web::Data<crate::AppState>,
    request: web::Json<FirDraftRequest>,
) -> ActixResult<HttpResponse> {
    tracing::debug!(
        "FIR draft request: {}",
        TextUtils::extract_preview(&request.incident_description, 12)
    );

    if let Err(e) = check_description_length(
        &request.incident_description,
        app_state.config.analysis.max_description_length,
    ) {
        return Ok(error_response(&e));
    }

    match app_state.engine.analyze(&request.incident_description, "") {
        Ok(analysis) => {
            let document = draft_fir(&request, &analysis);
            Ok(HttpResponse::Ok().json(FirGenerateResponse { document, analysis }))
        }
        Err(e) => Ok(error_response(&e)),
    }
}

/// Suggestions endpoint handler
async fn suggestions_handler(
    app_state: web::Data<crate::AppState>,
    query: web::Query<SuggestionsQuery>,
) -> ActixResult<HttpResponse> {
    let suggestions = app_state
        .engine
        .suggest(&query.query, app_state.config.analysis.max_suggestions);

    Ok(HttpResponse::Ok().json(SuggestionsResponse { suggestions }))
}

/// Health check endpoint handler
async fn health_handler(app_state: web::Data<crate::AppState>) -> ActixResult<HttpResponse> {
    let status = match app_state.engine.health_check() {
        Ok(_) => "healthy",
        Err(_) => "unhealthy",
    };

    let response = HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: (Utc::now() - app_state.started_at).num_seconds(),
    };

    Ok(HttpResponse::Ok().json(response))
}

/// Index page handler
async fn index_handler() -> ActixResult<HttpResponse> {
    let html = r#"
    <!DOCTYPE html>
    <html>
    <head>
        <title>LegalAssist Analysis API</title>
        <style>
            body { font-family: Arial, sans-serif; margin: 40px; }
            .header { color: #2c3e50; }
            .endpoint { margin: 20px 0; padding: 15px; background: #f8f9fa; border-radius: 5px; }
            .method { font-weight: bold; color: #27ae60; }
        </style>
    </head>
    <body>
        <h1 class="header">LegalAssist Analysis API</h1>
        <p>Turns free-text incident descriptions into structured legal guidance for FIR drafting.</p>

        <h2>Available Endpoints</h2>

        <div class="endpoint">
            <span class="method">POST</span> /analyze
            <p>Analyze an incident description: category, sections, precedents, entities.</p>
        </div>

        <div class="endpoint">
            <span class="method">POST</span> /fir/generate
            <p>Draft an FIR document from incident details.</p>
        </div>

        <div class="endpoint">
            <span class="method">GET</span> /suggestions?query=...
            <p>Look up common incident phrasings.</p>
        </div>

        <div class="endpoint">
            <span class="method">GET</span> /health
            <p>Check the health status of the analysis engine.</p>
        </div>

        <h2>Example Analyze Request</h2>
        <pre>{
  "description": "Rajesh Kumar reported a theft at Main Street on 15 January 2024",
  "incidentType": "theft"
}</pre>
    </body>
    </html>
    "#;

    Ok(HttpResponse::Ok().content_type("text/html").body(html))
}
