use pool_engine::{ BALL_DIAMETER, TABLE_WIDTH, config::{ BallConfig, SceneConfig } };

pub trait Scene {
    fn name(&self) -> &'static str;
    fn create_scene(&self) -> SceneConfig;
}

fn ball(number: u8, x: f64, y: f64) -> BallConfig {
    BallConfig { number, x, y }
}

/// Cue ball on the head spot
fn cue() -> BallConfig {
    ball(0, TABLE_WIDTH / 2., 2025.)
}

pub struct StraightShot;

impl Scene for StraightShot {
    fn name(&self) -> &'static str {
        "straight"
    }

    fn create_scene(&self) -> SceneConfig {
        SceneConfig {
            balls: vec![cue(), ball(1, TABLE_WIDTH / 2., 675.)],
            cue_velocity: (0., -1000.),
        }
    }
}

/// Full rack of 15 balls broken from the head spot
pub struct Break {
    pub speed: f64,
}

impl Scene for Break {
    fn name(&self) -> &'static str {
        "break"
    }

    fn create_scene(&self) -> SceneConfig {
        // A millimetre between neighbours so no two balls start in contact
        let spacing = BALL_DIAMETER + 1.;
        let row_height = spacing * 3f64.sqrt() / 2.;

        let rack = (0..5)
            .flat_map(|row| (0..=row).map(move |col| (row, col)))
            .zip(1..=15)
            .map(|((row, col), number)| {
                let x = TABLE_WIDTH / 2. + (col as f64 - row as f64 / 2.) * spacing;
                let y = 675. - row as f64 * row_height;
                ball(number, x, y)
            });

        SceneConfig {
            balls: std::iter::once(cue()).chain(rack).collect(),
            cue_velocity: (0., -self.speed),
        }
    }
}

pub struct CushionBank;

impl Scene for CushionBank {
    fn name(&self) -> &'static str {
        "bank"
    }

    fn create_scene(&self) -> SceneConfig {
        SceneConfig {
            balls: vec![ball(0, 300., 1800.), ball(9, 1000., 600.)],
            cue_velocity: (-400., -600.),
        }
    }
}

pub struct CornerPocket;

impl Scene for CornerPocket {
    fn name(&self) -> &'static str {
        "corner"
    }

    fn create_scene(&self) -> SceneConfig {
        SceneConfig {
            balls: vec![ball(0, 400., 400.), ball(8, 200., 200.)],
            cue_velocity: (-700., -700.),
        }
    }
}

pub fn get_all_scenes() -> Vec<Box<dyn Scene + Send + Sync>> {
    vec![
        Box::new(StraightShot),
        Box::new(Break { speed: 2000. }),
        Box::new(CushionBank),
        Box::new(CornerPocket),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_build() {
        for scene in get_all_scenes() {
            let table = scene.create_scene().struck_table().unwrap();
            assert_eq!(table.rolling_count(), 1, "{}", scene.name());
        }
    }

    #[test]
    fn test_rack_balls_do_not_touch() {
        let scene = Break { speed: 2000. }.create_scene();
        assert_eq!(scene.balls.len(), 16);
        for (i, a) in scene.balls.iter().enumerate() {
            for b in &scene.balls[i + 1..] {
                assert!((a.x - b.x).hypot(a.y - b.y) > BALL_DIAMETER);
            }
        }
    }
}
