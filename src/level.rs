//! Level data model and loading
//!
//! Levels come from a JSON document keyed by index, with all coordinates as
//! percentages of the arena. Malformed or missing pieces are recoverable:
//! the affected collection is left empty with a warning and the game keeps
//! running with degraded content.

use glam::Vec2;
use serde::Deserialize;
use thiserror::Error;

use crate::consts::*;
use crate::sim::Rect;

/// Bundled level document (the original game's `jsons/levels.json` shape)
const EMBEDDED_LEVELS: &str = include_str!("../assets/levels.json");

/// Level loading failures; all recoverable, none fatal to the game loop
#[derive(Debug, Error)]
pub enum LevelError {
    #[error("malformed level document: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("level fetch failed: {0}")]
    Fetch(String),
}

/// Raw document root
#[derive(Debug, Clone, Deserialize)]
pub struct LevelDoc {
    pub levels: Vec<LevelSpec>,
}

/// One level as authored; any section may be absent in hand-edited data
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LevelSpec {
    #[serde(default)]
    pub obstacles: Option<Vec<ObstacleSpec>>,
    #[serde(default)]
    pub coins: Option<Vec<CoinSpec>>,
    #[serde(default)]
    pub spawn: Option<Vec<PointSpec>>,
}

/// Obstacle region, percentage-of-arena coordinates
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ObstacleSpec {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Coin: percentage position, pixel radius
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct CoinSpec {
    pub radius: f32,
    pub position: PointSpec,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PointSpec {
    pub x: f32,
    pub y: f32,
}

/// A level resolved to pixel space, ready to install into the game state
#[derive(Debug, Clone, Default)]
pub struct LevelData {
    pub index: u32,
    pub obstacles: Vec<Rect>,
    pub coins: Vec<Rect>,
    /// None when the authored spawn list is missing or empty; the caller
    /// keeps its previous spawn point in that case
    pub spawn: Option<Vec2>,
}

/// Resolve one level out of a document, degrading gracefully
pub fn resolve_level(doc: &LevelDoc, index: u32) -> LevelData {
    let mut data = LevelData {
        index,
        ..Default::default()
    };

    let Some(spec) = doc.levels.get(index as usize) else {
        log::warn!(
            "level {} not in document ({} levels available), loading empty",
            index,
            doc.levels.len()
        );
        return data;
    };

    match &spec.obstacles {
        Some(obstacles) => {
            data.obstacles = obstacles.iter().map(obstacle_bounds).collect();
        }
        None => log::warn!("level {} has no obstacle list", index),
    }

    match &spec.coins {
        Some(coins) => {
            data.coins = coins.iter().map(coin_bounds).collect();
        }
        None => log::warn!("level {} has no coin list", index),
    }

    match spec.spawn.as_ref().and_then(|s| s.first()) {
        Some(p) => {
            data.spawn = Some(Vec2::new(
                p.x / 100.0 * ARENA_WIDTH,
                p.y / 100.0 * ARENA_HEIGHT,
            ));
        }
        None => log::warn!("level {} has no spawn point, keeping previous", index),
    }

    data
}

fn obstacle_bounds(spec: &ObstacleSpec) -> Rect {
    Rect::new(
        spec.x / 100.0 * ARENA_WIDTH,
        spec.y / 100.0 * ARENA_HEIGHT,
        spec.width / 100.0 * ARENA_WIDTH,
        spec.height / 100.0 * ARENA_HEIGHT,
    )
}

fn coin_bounds(spec: &CoinSpec) -> Rect {
    // The coin occupies the 2r square at its percent position
    Rect::new(
        spec.position.x / 100.0 * ARENA_WIDTH,
        spec.position.y / 100.0 * ARENA_HEIGHT,
        spec.radius * 2.0,
        spec.radius * 2.0,
    )
}

/// Where level documents come from (network fetch in the browser, embedded
/// data or a fixture in tests)
pub trait LevelSource {
    fn fetch(&self) -> Result<LevelDoc, LevelError>;
}

/// Level source backed by the bundled document
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedLevels;

impl LevelSource for EmbeddedLevels {
    fn fetch(&self) -> Result<LevelDoc, LevelError> {
        Ok(serde_json::from_str(EMBEDDED_LEVELS)?)
    }
}

/// Sequenced level-load requests
///
/// Loads resolve out-of-band, so a reset or advance can race an in-flight
/// load. Every request gets a sequence number and only the response matching
/// the newest request may be applied; stale responses are dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct LevelLoader {
    latest_seq: u64,
}

/// Handle for one outstanding load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadRequest {
    pub seq: u64,
    pub index: u32,
}

impl LevelLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new load request, superseding any outstanding one
    pub fn begin(&mut self, index: u32) -> LoadRequest {
        self.latest_seq += 1;
        LoadRequest {
            seq: self.latest_seq,
            index,
        }
    }

    /// Whether a completed request is still the newest one
    pub fn is_current(&self, request: &LoadRequest) -> bool {
        request.seq == self.latest_seq
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(json: &str) -> LevelDoc {
        serde_json::from_str(json).expect("test document parses")
    }

    #[test]
    fn test_embedded_document_parses() {
        let doc = EmbeddedLevels.fetch().expect("bundled levels parse");
        assert_eq!(doc.levels.len(), LEVEL_COUNT as usize);
        for (i, level) in doc.levels.iter().enumerate() {
            let data = resolve_level(&doc, i as u32);
            assert!(!data.coins.is_empty(), "level {} needs coins", i);
            assert!(data.spawn.is_some(), "level {} needs a spawn", i);
            assert!(level.obstacles.is_some());
        }
    }

    #[test]
    fn test_percent_to_pixel_conversion() {
        let doc = doc(
            r#"{"levels":[{
                "obstacles":[{"x":50,"y":50,"width":10,"height":20}],
                "coins":[{"radius":15,"position":{"x":25,"y":75}}],
                "spawn":[{"x":10,"y":10}]
            }]}"#,
        );
        let data = resolve_level(&doc, 0);

        assert_eq!(data.obstacles[0], Rect::new(400.0, 300.0, 80.0, 120.0));
        assert_eq!(data.coins[0], Rect::new(200.0, 450.0, 30.0, 30.0));
        assert_eq!(data.spawn, Some(Vec2::new(80.0, 60.0)));
    }

    #[test]
    fn test_missing_coin_list_degrades() {
        // Obstacles present, coins missing: obstacles populated, coins
        // empty, no crash
        let doc = doc(
            r#"{"levels":[{
                "obstacles":[{"x":0,"y":0,"width":10,"height":10}],
                "spawn":[{"x":5,"y":5}]
            }]}"#,
        );
        let data = resolve_level(&doc, 0);

        assert_eq!(data.obstacles.len(), 1);
        assert!(data.coins.is_empty());
    }

    #[test]
    fn test_out_of_range_index_loads_empty() {
        let doc = doc(r#"{"levels":[]}"#);
        let data = resolve_level(&doc, 7);

        assert!(data.obstacles.is_empty());
        assert!(data.coins.is_empty());
        assert!(data.spawn.is_none());
    }

    #[test]
    fn test_empty_spawn_list_keeps_previous() {
        let doc = doc(r#"{"levels":[{"obstacles":[],"coins":[],"spawn":[]}]}"#);
        let data = resolve_level(&doc, 0);
        assert!(data.spawn.is_none());
    }

    #[test]
    fn test_malformed_document_is_an_error() {
        let result: Result<LevelDoc, _> =
            serde_json::from_str(r#"{"levels": "nope"}"#).map_err(LevelError::from);
        assert!(matches!(result, Err(LevelError::Malformed(_))));
    }

    #[test]
    fn test_loader_discards_stale_requests() {
        let mut loader = LevelLoader::new();
        let first = loader.begin(1);
        let second = loader.begin(2);

        assert!(!loader.is_current(&first));
        assert!(loader.is_current(&second));
    }
}
