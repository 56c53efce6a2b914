use career_fit::assessment::{AssessmentService, QuestionCatalog, ScoringConfig};
use career_fit::error::AppError;
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) question_count: usize,
}

/// Catalog from `path` when given, otherwise the built-in questionnaire.
pub(crate) fn load_catalog(path: Option<&Path>) -> Result<QuestionCatalog, AppError> {
    match path {
        Some(path) => Ok(QuestionCatalog::from_path(path)?),
        None => {
            let catalog = QuestionCatalog::standard();
            info!(questions = catalog.len(), "using built-in assessment catalog");
            Ok(catalog)
        }
    }
}

pub(crate) fn default_scoring_config() -> ScoringConfig {
    ScoringConfig::default()
}

pub(crate) fn build_service(catalog: QuestionCatalog) -> Arc<AssessmentService> {
    Arc::new(AssessmentService::new(
        Arc::new(catalog),
        default_scoring_config(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_path_uses_standard_catalog() {
        let catalog = load_catalog(None).expect("standard catalog");
        assert_eq!(catalog.len(), 14);
    }

    #[test]
    fn unreadable_catalog_surfaces_as_catalog_error() {
        let err = load_catalog(Some(Path::new("/nonexistent/catalog.json")))
            .expect_err("file missing");
        assert!(matches!(err, AppError::Catalog(_)));
    }

    #[test]
    fn built_service_exposes_catalog() {
        let service = build_service(QuestionCatalog::standard());
        assert_eq!(service.questions().len(), 14);
        assert_eq!(service.catalog().len(), 14);
    }
}
