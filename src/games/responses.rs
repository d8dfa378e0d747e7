use crate::games::models::{GuessOutcome, RoundStart, RoundStatus};
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGameResponse {
    pub game_id: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameStatusResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<GameStatusError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<RoundStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rounds_played: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_score: Option<u64>,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum GameStatusError {
    GameNotFound,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StartRoundResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<StartRoundError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub round: Option<RoundStart>,
}

/// All possible reasons why a round may fail to start.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum StartRoundError {
    GameNotFound,
    /// Every attempt missed; the client may try again.
    PanoramaNotFound,
    /// A newer round was started while this one was being resolved.
    RoundSuperseded,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitGuessResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<GuessSubmissionError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<GuessOutcome>,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum GuessSubmissionError {
    GameNotFound,
    InvalidCoordinates,
    NoRoundInProgress,
    AlreadyValidated,
}
