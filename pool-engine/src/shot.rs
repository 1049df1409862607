//! A whole shot: striking the cue ball, chaining segments until every ball
//! rests, and sampling evenly spaced frames in between.

use std::iter::{ FusedIterator, once };

use glam::DVec2;
use log::{ debug, trace };
use typed_floats::StrictlyPositive;

use crate::{ RollingBall, Segment, SegmentOutcome, SimError, Table, TableObject, physics_utils::drag_acceleration };

/// Default time between two sampled frames
pub const FRAME_RATE: f64 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShotOptions {
    pub frame_rate: StrictlyPositive<f64>,
}

impl Default for ShotOptions {
    fn default() -> Self {
        Self {
            frame_rate: StrictlyPositive::<f64>::new(FRAME_RATE).expect("strictly positive"),
        }
    }
}

impl ShotOptions {
    pub fn with_frame_rate(frame_rate: f64) -> Result<Self, SimError> {
        let frame_rate = StrictlyPositive::<f64>::new(frame_rate)
            .map_err(|_| SimError::InvalidArgument(format!("frame rate {frame_rate} is not strictly positive")))?;
        Ok(Self { frame_rate })
    }
}

impl Table {
    /// Sets the resting cue ball in motion with drag opposing `vel`, and
    /// returns its slot. The table is unchanged on error.
    pub fn strike_cue(&mut self, vel: DVec2) -> Result<usize, SimError> {
        if !vel.is_finite() {
            return Err(SimError::InvalidArgument(format!("cue velocity {vel} is not finite")));
        }

        let (slot, cue) = self.objects()
            .find_map(|(slot, object)| match object {
                TableObject::StillBall(ball) if ball.is_cue() => Some((slot, *ball)),
                _ => None,
            })
            .ok_or_else(|| SimError::InvalidArgument("no cue ball resting on the table".to_owned()))?;

        let struck = RollingBall {
            vel,
            acc: drag_acceleration(vel).unwrap_or(DVec2::ZERO),
            ..cue.into_rolling()
        };
        trace!("cue ball in slot {slot} struck: {}", TableObject::from(struck));
        self.slots[slot] = Some(struck.into());

        Ok(slot)
    }

    /// The table `t` seconds later assuming no ball meets anything on the
    /// way. Slots are kept as they are.
    pub fn roll(&self, t: f64) -> Table {
        let mut table = self.clone();
        table.time = self.time + t;
        for object in table.slots.iter_mut().flatten() {
            *object = object.rolled(t);
        }
        table
    }

    /// Successive segments starting from this table, until no ball rolls.
    /// A timed out segment is the last one.
    pub fn segments(&self) -> Segments {
        Segments {
            last: Some(self.clone()),
        }
    }
}

pub struct Segments {
    last: Option<Table>,
}

impl Iterator for Segments {
    type Item = Segment;

    fn next(&mut self) -> Option<Self::Item> {
        let segment = self.last.take()?.segment()?;
        if segment.outcome != SegmentOutcome::TimedOut {
            self.last = Some(segment.table.clone());
        }
        Some(segment)
    }
}

impl FusedIterator for Segments {}

/// Frames every `frame_rate` seconds from the start of a segment up to its
/// end, rolled from the table the segment started from
pub fn frames(start: &Table, segment: &Segment, options: &ShotOptions) -> Vec<Table> {
    let frame_rate = options.frame_rate.get();
    let count = ((segment.table.time - start.time) / frame_rate).floor() as usize;
    trace!("sampling {count} frames from t = {:.4}s", start.time);

    (0..count)
        .map(|i| start.roll(i as f64 * frame_rate))
        .collect()
}

#[derive(Debug, Clone)]
pub struct Shot {
    pub initial: Table,
    pub segments: Vec<Segment>,
}

impl Shot {
    /// Runs every segment of the shot until all balls rest
    pub fn play(initial: Table) -> Self {
        let segments = initial.segments().collect::<Vec<_>>();
        debug!(
            "shot played in {} segments, {:.4}s",
            segments.len(),
            segments.last().map_or(0., |s| s.table.time - initial.time),
        );
        Self { initial, segments }
    }

    pub fn final_table(&self) -> &Table {
        self.segments.last()
            .map_or(&self.initial, |segment| &segment.table)
    }

    pub fn duration(&self) -> f64 {
        self.final_table().time - self.initial.time
    }

    /// Every segment along with the table it started from
    pub fn segments_with_start(&self) -> impl Iterator<Item = (&Table, &Segment)> {
        once(&self.initial)
            .chain(self.segments.iter().map(|segment| &segment.table))
            .zip(&self.segments)
    }

    pub fn frames(&self, options: &ShotOptions) -> Vec<Table> {
        self.segments_with_start()
            .flat_map(|(start, segment)| frames(start, segment, options))
            .collect()
    }
}
