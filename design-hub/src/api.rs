use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::contrast::{Contrast, Tier};
use crate::scheme::{HarmonyRules, Scheme};
use crate::session::DesignSession;
use crate::swatch::Swatch;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteRequest {
    pub base: String,
    #[serde(default)]
    pub scheme: Scheme,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PaletteResponse {
    Ok {
        scheme: Scheme,
        base: String,
        colors: Vec<Swatch>,
    },
    Rejected {
        reason: String,
    },
}

impl PaletteResponse {
    pub fn from_session(session: &DesignSession) -> Self {
        PaletteResponse::Ok {
            scheme: session.scheme(),
            base: session.base().to_string(),
            colors: session.palette().to_vec(),
        }
    }

    pub fn rejected(reason: impl Display) -> Self {
        PaletteResponse::Rejected {
            reason: reason.to_string(),
        }
    }
}

/// Answers a one-shot request without touching stored preferences.
pub fn handle_palette_request(request: &PaletteRequest, rules: &HarmonyRules) -> PaletteResponse {
    match DesignSession::new(request.base.as_str(), request.scheme, rules.clone()) {
        Ok(session) => PaletteResponse::from_session(&session),
        Err(err) => PaletteResponse::rejected(err),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContrastResponse {
    pub first: String,
    pub second: String,
    pub ratio: f64,
    pub tier: Tier,
}

impl ContrastResponse {
    pub fn new(first: &str, second: &str, contrast: Contrast) -> Self {
        Self {
            first: first.to_string(),
            second: second.to_string(),
            ratio: contrast.ratio,
            tier: contrast.tier,
        }
    }
}
