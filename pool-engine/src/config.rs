//! Scene description files.
//!
//! A scene lists the balls resting on a default table and the velocity the
//! cue ball is struck with, written in RON:
//!
//! ```text
//! (
//!     balls: [
//!         (number: 0, x: 675.0, y: 2025.0),
//!         (number: 1, x: 675.0, y: 675.0),
//!     ],
//!     cue_velocity: (0.0, -1000.0),
//! )
//! ```

use std::{ fmt, fs, path::Path };

use glam::DVec2;
use itertools::Itertools;
use serde::{ Deserialize, Serialize };

use crate::{ SimError, StillBall, TABLE_LENGTH, TABLE_WIDTH, Table, ball_number };

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(ron::error::SpannedError),
    Serialize(ron::Error),
    Invalid(SimError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "RON parse error: {}", e),
            ConfigError::Serialize(e) => write!(f, "RON serialization error: {}", e),
            ConfigError::Invalid(e) => write!(f, "Invalid scene: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            ConfigError::Serialize(e) => Some(e),
            ConfigError::Invalid(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::Io(err)
    }
}

impl From<ron::error::SpannedError> for ConfigError {
    fn from(err: ron::error::SpannedError) -> Self {
        ConfigError::Parse(err)
    }
}

impl From<ron::Error> for ConfigError {
    fn from(err: ron::Error) -> Self {
        ConfigError::Serialize(err)
    }
}

impl From<SimError> for ConfigError {
    fn from(err: SimError) -> Self {
        ConfigError::Invalid(err)
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
pub struct BallConfig {
    pub number: u8,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct SceneConfig {
    pub balls: Vec<BallConfig>,
    pub cue_velocity: (f64, f64),
}

impl SceneConfig {
    pub fn from_ron_str(text: &str) -> Result<Self, ConfigError> {
        Ok(ron::from_str(text)?)
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_ron_str(&text)
    }

    pub fn to_ron_string(&self) -> Result<String, ConfigError> {
        Ok(ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())?)
    }

    pub fn cue_velocity(&self) -> DVec2 {
        DVec2::new(self.cue_velocity.0, self.cue_velocity.1)
    }

    /// Default table with every ball of the scene resting on it, added in
    /// the order they are listed
    pub fn build_table(&self) -> Result<Table, ConfigError> {
        if let Some(number) = self.balls.iter().map(|ball| ball.number).duplicates().next() {
            return Err(SimError::InvalidArgument(format!("ball {number} is listed more than once")).into());
        }

        let mut table = Table::new();
        for ball in &self.balls {
            let number = ball_number(ball.number)?;
            let pos = DVec2::new(ball.x, ball.y);
            let on_table = pos.is_finite()
                && (0. ..=TABLE_WIDTH).contains(&pos.x)
                && (0. ..=TABLE_LENGTH).contains(&pos.y);
            if !on_table {
                return Err(SimError::InvalidArgument(format!("ball {} at {pos} is off the table", ball.number)).into());
            }
            table.add_object(StillBall::new(number, pos))?;
        }
        Ok(table)
    }

    /// [`Self::build_table`] with the cue ball already struck
    pub fn struck_table(&self) -> Result<Table, ConfigError> {
        let mut table = self.build_table()?;
        table.strike_cue(self.cue_velocity())?;
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TableObject;

    const SCENE: &str = r#"
        (
            balls: [
                (number: 0, x: 675.0, y: 2025.0),
                (number: 1, x: 675.0, y: 675.0),
                (number: 2, x: 646.5, y: 625.6),
            ],
            cue_velocity: (0.0, -1000.0),
        )
    "#;

    #[test]
    fn test_load_scene_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scene.ron");
        fs::write(&path, SCENE).unwrap();

        let scene = SceneConfig::load_from_file(&path).unwrap();
        assert_eq!(scene.balls.len(), 3);
        assert_eq!(scene.balls[2], BallConfig { number: 2, x: 646.5, y: 625.6 });
        assert_eq!(scene.cue_velocity(), DVec2::new(0., -1000.));

        let table = scene.struck_table().unwrap();
        assert_eq!(table.rolling_count(), 1);
        assert!(table[10].unwrap().is_rolling());
        assert_eq!(table[11], Some(TableObject::from(StillBall::new(ball_number(1).unwrap(), DVec2::new(675., 675.)))));
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let scene = SceneConfig::from_ron_str("(balls: [(number: 0, x: 10.0, y: 10.0)])").unwrap();
        assert_eq!(scene.cue_velocity, (0., 0.));

        let table = scene.struck_table().unwrap();
        let cue = table[10].as_ref().and_then(TableObject::as_rolling).unwrap();
        assert_eq!(cue.vel, DVec2::ZERO);
        assert_eq!(cue.acc, DVec2::ZERO);
    }

    #[test]
    fn test_saved_scene_loads_back() {
        let scene = SceneConfig::from_ron_str(SCENE).unwrap();
        let text = scene.to_ron_string().unwrap();
        assert_eq!(SceneConfig::from_ron_str(&text).unwrap(), scene);
    }

    #[test]
    fn test_errors() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            SceneConfig::load_from_file(dir.path().join("missing.ron")),
            Err(ConfigError::Io(_))
        ));
        assert!(matches!(SceneConfig::from_ron_str("(balls: [(number: 0,"), Err(ConfigError::Parse(_))));

        let invalid = [
            "(balls: [(number: 16, x: 10.0, y: 10.0)])",
            "(balls: [(number: 3, x: 10.0, y: 10.0), (number: 3, x: 90.0, y: 10.0)])",
            "(balls: [(number: 3, x: -10.0, y: 10.0)])",
            "(balls: [(number: 3, x: 10.0, y: 2800.0)])",
        ];
        for text in invalid {
            let scene = SceneConfig::from_ron_str(text).unwrap();
            assert!(matches!(scene.build_table(), Err(ConfigError::Invalid(SimError::InvalidArgument(_)))), "{text}");
        }

        // No cue ball to strike
        let scene = SceneConfig::from_ron_str("(balls: [(number: 3, x: 10.0, y: 10.0)])").unwrap();
        assert!(scene.build_table().is_ok());
        assert!(matches!(scene.struck_table(), Err(ConfigError::Invalid(_))));
    }
}
