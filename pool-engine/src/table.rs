use std::{ fmt, ops::Index };

use glam::DVec2;
use itertools::Itertools;

use crate::{
    BallNumber, Hole, HorizontalCushion, MAX_OBJECTS, SimError, TABLE_LENGTH, TABLE_WIDTH,
    TableObject, VerticalCushion,
};

/// Snapshot of the whole table at a given time.
///
/// Slots are positional: an object keeps its slot for as long as it exists
/// and an emptied slot is simply `None`. Cloning gives a fully independent
/// copy.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub(crate) time: f64,
    pub(crate) slots: [Option<TableObject>; MAX_OBJECTS],
}

impl Table {
    /// Table with the four cushions in slots 0 to 3 and the six holes in
    /// slots 4 to 9, every other slot is empty
    pub fn new() -> Self {
        let mut table = Self::empty();

        let fixtures: [TableObject; 10] = [
            HorizontalCushion { y: 0. }.into(),
            HorizontalCushion { y: TABLE_LENGTH }.into(),
            VerticalCushion { x: 0. }.into(),
            VerticalCushion { x: TABLE_WIDTH }.into(),
            Hole { pos: DVec2::new(0., 0.) }.into(),
            Hole { pos: DVec2::new(0., TABLE_LENGTH / 2.) }.into(),
            Hole { pos: DVec2::new(0., TABLE_LENGTH) }.into(),
            Hole { pos: DVec2::new(TABLE_WIDTH, 0.) }.into(),
            Hole { pos: DVec2::new(TABLE_WIDTH, TABLE_LENGTH / 2.) }.into(),
            Hole { pos: DVec2::new(TABLE_WIDTH, TABLE_LENGTH) }.into(),
        ];
        for (slot, fixture) in table.slots.iter_mut().zip(fixtures) {
            *slot = Some(fixture);
        }

        table
    }

    /// Table without cushions nor holes
    pub fn empty() -> Self {
        Self {
            time: 0.,
            slots: [None; MAX_OBJECTS],
        }
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn slots(&self) -> &[Option<TableObject>; MAX_OBJECTS] {
        &self.slots
    }

    /// Places the object in the first empty slot and returns that slot.
    /// A full table is left untouched.
    pub fn add_object(&mut self, object: impl Into<TableObject>) -> Result<usize, SimError> {
        let (slot_idx, slot) = self.slots.iter_mut()
            .find_position(|slot| slot.is_none())
            .ok_or(SimError::TableFull)?;
        *slot = Some(object.into());
        Ok(slot_idx)
    }

    /// Every present object along with its slot
    pub fn objects(&self) -> impl Iterator<Item = (usize, &TableObject)> {
        self.slots.iter()
            .enumerate()
            .filter_map(|(idx, slot)| slot.as_ref().map(|object| (idx, object)))
    }

    pub fn rolling_count(&self) -> usize {
        self.objects()
            .filter(|(_, object)| object.is_rolling())
            .count()
    }

    /// Slot of the ball with the given number, rolling or not
    pub fn find_ball(&self, number: BallNumber) -> Option<usize> {
        self.objects()
            .find(|(_, object)| object.ball_number() == Some(number))
            .map(|(idx, _)| idx)
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<usize> for Table {
    type Output = Option<TableObject>;

    fn index(&self, slot: usize) -> &Self::Output {
        &self.slots[slot]
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "time = {:6.1};", self.time)?;
        for (idx, slot) in self.slots.iter().enumerate() {
            match slot {
                Some(object) => writeln!(f, "  [{:02}] = {}", idx, object)?,
                None => writeln!(f, "  [{:02}] = NULL;", idx)?,
            }
        }
        Ok(())
    }
}
