use crate::config::GameConfig;
use crate::games::responses::{GuessSubmissionError, StartRoundError};
use crate::map::models::LatLng;
use crate::map::{haversine_km, score_from_km};
use crate::rounds::ResolveError;
use serde::Serialize;

#[derive(Clone, Debug)]
pub struct Game {
    pub rounds_played: u64,
    pub total_score: u64,
    pub status: RoundStatus,
    /// Bumped on every round start, only the latest resolution may commit.
    generation: u64,
}

impl Game {
    pub fn new() -> Self {
        Self {
            rounds_played: 0,
            total_score: 0,
            status: RoundStatus::Idle,
            generation: 0,
        }
    }

    /// Starts a new round, superseding any resolution still in flight.
    pub fn begin_resolution(&mut self) -> ResolutionTicket {
        self.generation += 1;
        self.status = RoundStatus::Resolving;
        ResolutionTicket {
            generation: self.generation,
        }
    }

    pub fn complete_resolution(
        &mut self,
        ticket: ResolutionTicket,
        outcome: Result<LatLng, ResolveError>,
    ) -> Result<RoundStart, StartRoundError> {
        if ticket.generation != self.generation {
            return Err(StartRoundError::RoundSuperseded);
        }
        match outcome {
            Ok(location) => {
                let round_number = self.rounds_played + 1;
                self.status = RoundStatus::Playing {
                    round_number,
                    location,
                };
                Ok(RoundStart {
                    round_number,
                    location,
                })
            }
            Err(ResolveError::NotFound { .. }) => {
                self.status = RoundStatus::Idle;
                Err(StartRoundError::PanoramaNotFound)
            }
        }
    }

    /// Drops a resolution nobody is waiting for anymore. Newer rounds are left alone.
    pub fn abandon_resolution(&mut self, ticket: ResolutionTicket) -> bool {
        let abandoned =
            ticket.generation == self.generation && self.status == RoundStatus::Resolving;
        if abandoned {
            self.status = RoundStatus::Idle;
        }
        abandoned
    }

    pub fn submit_guess(
        &mut self,
        guess: LatLng,
        config: &GameConfig,
    ) -> Result<GuessOutcome, GuessSubmissionError> {
        if !guess.is_valid() {
            return Err(GuessSubmissionError::InvalidCoordinates);
        }
        let (round_number, location) = match self.status {
            RoundStatus::Playing {
                round_number,
                location,
            } => (round_number, location),
            RoundStatus::Scored { .. } => return Err(GuessSubmissionError::AlreadyValidated),
            RoundStatus::Idle | RoundStatus::Resolving => {
                return Err(GuessSubmissionError::NoRoundInProgress)
            }
        };
        let result = ScoreResult::between(guess, location, config);
        self.rounds_played += 1;
        self.total_score += result.score;
        self.status = RoundStatus::Scored {
            round_number,
            location,
            guess,
            result,
        };
        Ok(GuessOutcome {
            round_number,
            location,
            guess,
            result,
            distance_meters: (result.distance_km * 1000.0).round() as u64,
            max_score: config.max_score,
            total_score: self.total_score,
        })
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RoundStatus {
    Idle,
    Resolving,
    #[serde(rename_all = "camelCase")]
    Playing { round_number: u64, location: LatLng },
    #[serde(rename_all = "camelCase")]
    Scored {
        round_number: u64,
        location: LatLng,
        guess: LatLng,
        result: ScoreResult,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    pub distance_km: f64,
    pub score: u64,
}

impl ScoreResult {
    pub fn between(guess: LatLng, target: LatLng, config: &GameConfig) -> Self {
        let distance_km = haversine_km(guess, target);
        Self {
            distance_km,
            score: score_from_km(distance_km, config),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ResolutionTicket {
    generation: u64,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundStart {
    pub round_number: u64,
    pub location: LatLng,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuessOutcome {
    pub round_number: u64,
    pub location: LatLng,
    pub guess: LatLng,
    #[serde(flatten)]
    pub result: ScoreResult,
    pub distance_meters: u64,
    pub max_score: u64,
    pub total_score: u64,
}
