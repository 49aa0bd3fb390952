//! Handlers for the stateless game API.
//!
//! Clients hold the game: every request carries the full board and score,
//! and every response returns the next full state.

use axum::extract::rejection::JsonRejection;
use axum::extract::{ConnectInfo, Request, State};
use axum::middleware::Next;
use axum::response::Response;
use axum::Json;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use tracing::{debug, info};

use super::error::ApiError;
use super::models::{GameStateData, MoveRequestData, MoveResponseData, NewGameSettings};
use super::AppState;
use crate::core::{Board, Direction, GameConfig, GameRng, DEFAULT_SIZE, DEFAULT_WIN_TILE};
use crate::game::GameState;
use crate::rules::GameProgress;

const MIN_BOARD_SIZE: i64 = 2;

pub(crate) const NOT_EFFECTIVE: &str = "Move was not effective; board state unchanged by slide.";
pub(crate) const WON: &str = "Congratulations! You won!";
pub(crate) const LOST: &str = "Game Over. No more valid moves.";

/// Count the request against its client before the body is read.
pub async fn limit_requests(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let ip = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip())
        .unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED));

    if !state.limiter.check(ip).await {
        info!(%ip, "rate limit exceeded");
        return Err(ApiError::RateLimited);
    }
    Ok(next.run(request).await)
}

fn positive_win_tile(win_tile: i64) -> Result<u64, ApiError> {
    u64::try_from(win_tile)
        .ok()
        .filter(|&w| w > 0)
        .ok_or_else(|| ApiError::BadRequest(format!("win_tile must be greater than 0, got {win_tile}")))
}

/// `POST /game/new`
pub async fn new_game(
    body: Result<Json<NewGameSettings>, JsonRejection>,
) -> Result<Json<GameStateData>, ApiError> {
    let Json(settings) = body?;

    let size = settings.size.unwrap_or(DEFAULT_SIZE as i64);
    if size < MIN_BOARD_SIZE {
        return Err(ApiError::BadRequest(format!(
            "size must be at least {MIN_BOARD_SIZE}, got {size}"
        )));
    }
    let size = usize::try_from(size).map_err(|e| ApiError::BadRequest(e.to_string()))?;
    let win_tile = positive_win_tile(settings.win_tile.unwrap_or(DEFAULT_WIN_TILE as i64))?;

    let mut rng = GameRng::from_entropy();
    let game = GameState::new(GameConfig::new(size).with_win_tile(win_tile), &mut rng)?;
    debug!(size, win_tile, seed = rng.seed(), "created game");

    Ok(Json(GameStateData::from(&game)))
}

/// `POST /game/move`
pub async fn make_move(
    body: Result<Json<MoveRequestData>, JsonRejection>,
) -> Result<Json<MoveResponseData>, ApiError> {
    let Json(request) = body?;

    let board = Board::from_rows(request.board).map_err(|e| {
        ApiError::BadRequest(format!("Invalid board structure in request: {e}"))
    })?;
    let direction: Direction = request.direction.parse()?;
    let win_tile = positive_win_tile(request.win_tile)?;

    let game = GameState::resume(
        board,
        request.score,
        GameConfig::default().with_win_tile(win_tile),
    )?;
    let turn = game.apply(direction, &mut GameRng::from_entropy());
    debug!(%direction, effective = turn.effective, progress = %turn.progress, "processed move");

    let message = match turn.progress {
        GameProgress::Won => Some(WON),
        GameProgress::Lost => Some(LOST),
        GameProgress::InProgress if !turn.effective => Some(NOT_EFFECTIVE),
        GameProgress::InProgress => None,
    };

    Ok(Json(MoveResponseData {
        state: GameStateData::from(&turn.state),
        move_was_effective: turn.effective,
        message: message.map(str::to_string),
    }))
}
