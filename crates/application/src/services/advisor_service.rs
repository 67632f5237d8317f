//! Weather advisory generation
//!
//! Turns an assembled report into a single natural-language paragraph with
//! activity recommendations, via the inference port.

use std::sync::Arc;

use domain::entities::ForecastReport;
use tracing::{debug, instrument};

use crate::error::ApplicationError;
use crate::ports::InferencePort;

const SYSTEM_PROMPT: &str = "You are a skilled weather analyst who translates raw forecast data \
     into clear, actionable, safety-first advice for families.";

/// A generated weather advisory
#[derive(Debug, Clone)]
pub struct Advisory {
    /// The advisory paragraph
    pub text: String,
    /// Model that produced it
    pub model: String,
}

/// Service generating natural-language advisories from reports
pub struct AdvisorService {
    inference: Arc<dyn InferencePort>,
}

impl std::fmt::Debug for AdvisorService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdvisorService")
            .field("model", &self.inference.current_model())
            .finish()
    }
}

impl AdvisorService {
    /// Create a new advisor service
    #[must_use]
    pub fn new(inference: Arc<dyn InferencePort>) -> Self {
        Self { inference }
    }

    /// Generate an advisory paragraph for the given report
    #[instrument(skip(self, report))]
    pub async fn advise(&self, report: &ForecastReport) -> Result<Advisory, ApplicationError> {
        let report_json = report
            .to_json_pretty()
            .map_err(|e| ApplicationError::Internal(e.to_string()))?;

        let result = self
            .inference
            .generate_with_system(SYSTEM_PROMPT, &Self::build_prompt(&report_json))
            .await?;

        debug!(
            model = %result.model,
            latency_ms = result.latency_ms,
            "Generated weather advisory"
        );

        Ok(Advisory {
            text: result.content,
            model: result.model,
        })
    }

    /// Check whether the inference backend is reachable
    pub async fn is_healthy(&self) -> bool {
        self.inference.is_healthy().await
    }

    fn build_prompt(report_json: &str) -> String {
        format!(
            "Analyze the following JSON weather report and reply with one friendly, \
             natural-language paragraph.\n\
             \n\
             1. Start with the conditions right now: temperature, rain status, wind speed, \
             and a quick air quality assessment from the pm10 and pm2_5 values, using \
             simple terms like \"good\", \"moderate\", or \"poor\".\n\
             2. Give the outlook for the next two hours from the plus_1_hour and \
             plus_2_hour entries, saying whether conditions improve, worsen, or hold. \
             Briefly mention the flood risk for the coming days from the river_discharge \
             values.\n\
             3. Close with recommendations for two activities: a walk (only with little \
             or no rain, calm wind, and good air quality) and a swimming pool visit (only \
             when it is comfortably warm, above about 20\u{b0}C, and dry). If conditions are \
             poor, recommend staying indoors and being cautious instead.\n\
             \n\
             Write a single seamless paragraph, not a list.\n\
             \n\
             {report_json}"
        )
    }
}
