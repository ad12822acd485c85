//! Room graph for the mansion
//!
//! The mansion is a finite binary tree of rooms stored in an arena:
//! - [`Room`]: a named location, optionally holding one clue
//! - [`RoomId`]: index of a room inside its [`Mansion`]
//! - [`Exit`]: the two directions a player can leave a room by
//! - [`RoomPlan`]: nested owned description used to build a mansion
//! - [`layout`]: the fixed mansion used by the game and its case file
//!
//! # Ownership
//!
//! A [`RoomPlan`] owns its children exclusively, so every plan is a tree by
//! construction (no shared sub-trees, no cycles). [`Mansion::from_plan`]
//! flattens the plan into the arena in pre-order, so the entry room is always
//! `RoomId(0)`. Once built, the mansion exposes no mutation.

pub mod layout;

use std::fmt;
use thiserror::Error;

/// Index of a room inside a [`Mansion`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoomId(pub usize);

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Direction of travel out of a room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Exit {
    Left,
    Right,
}

impl fmt::Display for Exit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Exit::Left => write!(f, "left"),
            Exit::Right => write!(f, "right"),
        }
    }
}

/// A location in the mansion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    name: String,
    clue: String, // Empty means nothing to find here
    left: Option<RoomId>,
    right: Option<RoomId>,
}

impl Room {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The clue found in this room, if any
    pub fn clue(&self) -> Option<&str> {
        if self.clue.is_empty() {
            None
        } else {
            Some(&self.clue)
        }
    }

    pub fn left(&self) -> Option<RoomId> {
        self.left
    }

    pub fn right(&self) -> Option<RoomId> {
        self.right
    }

    /// The child reached through `exit`
    pub fn exit(&self, exit: Exit) -> Option<RoomId> {
        match exit {
            Exit::Left => self.left,
            Exit::Right => self.right,
        }
    }

    pub fn is_dead_end(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// Errors raised while assembling a mansion
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// A room was planned without a name
    #[error("room {index} in pre-order has an empty name")]
    EmptyRoomName { index: usize },
}

/// Nested description of a room and the rooms below it
#[derive(Debug, Clone)]
pub struct RoomPlan {
    name: String,
    clue: String,
    left: Option<Box<RoomPlan>>,
    right: Option<Box<RoomPlan>>,
}

impl RoomPlan {
    /// Plan a room; pass an empty `clue` for a room with nothing in it
    pub fn new(name: impl Into<String>, clue: impl Into<String>) -> Self {
        RoomPlan {
            name: name.into(),
            clue: clue.into(),
            left: None,
            right: None,
        }
    }

    pub fn with_left(mut self, child: RoomPlan) -> Self {
        self.left = Some(Box::new(child));
        self
    }

    pub fn with_right(mut self, child: RoomPlan) -> Self {
        self.right = Some(Box::new(child));
        self
    }
}

/// Immutable binary tree of rooms
#[derive(Debug, Clone)]
pub struct Mansion {
    rooms: Vec<Room>,
}

impl Mansion {
    /// Flatten a plan into a mansion. The plan's top room becomes the entry.
    pub fn from_plan(plan: RoomPlan) -> Result<Self, LayoutError> {
        let mut rooms = Vec::new();
        place(&mut rooms, plan)?;
        Ok(Mansion { rooms })
    }

    /// The entry room
    pub fn root(&self) -> RoomId {
        RoomId(0)
    }

    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(id.0)
    }

    pub fn left(&self, id: RoomId) -> Option<RoomId> {
        self.room(id).and_then(Room::left)
    }

    pub fn right(&self, id: RoomId) -> Option<RoomId> {
        self.room(id).and_then(Room::right)
    }

    pub fn child(&self, id: RoomId, exit: Exit) -> Option<RoomId> {
        self.room(id).and_then(|room| room.exit(exit))
    }

    /// Number of rooms
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// All rooms in pre-order
    pub fn iter(&self) -> impl Iterator<Item = (RoomId, &Room)> {
        self.rooms.iter().enumerate().map(|(i, room)| (RoomId(i), room))
    }

    /// Exits taken from the entry to reach `target`, or `None` if it is not in this mansion
    pub fn path_to(&self, target: RoomId) -> Option<Vec<Exit>> {
        let mut stack = vec![(self.root(), Vec::new())];
        while let Some((id, path)) = stack.pop() {
            if id == target {
                return Some(path);
            }
            let room = self.room(id)?;
            for exit in [Exit::Right, Exit::Left] {
                if let Some(child) = room.exit(exit) {
                    let mut next = path.clone();
                    next.push(exit);
                    stack.push((child, next));
                }
            }
        }
        None
    }
}

fn place(rooms: &mut Vec<Room>, plan: RoomPlan) -> Result<RoomId, LayoutError> {
    if plan.name.trim().is_empty() {
        return Err(LayoutError::EmptyRoomName { index: rooms.len() });
    }

    let id = RoomId(rooms.len());
    rooms.push(Room {
        name: plan.name,
        clue: plan.clue,
        left: None,
        right: None,
    });

    let left = plan.left.map(|child| place(rooms, *child)).transpose()?;
    let right = plan.right.map(|child| place(rooms, *child)).transpose()?;
    rooms[id.0].left = left;
    rooms[id.0].right = right;

    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_plan() -> RoomPlan {
        RoomPlan::new("Hall", "Footprints")
            .with_left(RoomPlan::new("Parlour", "").with_right(RoomPlan::new("Attic", "Rope")))
            .with_right(RoomPlan::new("Pantry", "Flour"))
    }

    #[test]
    fn test_from_plan_is_preorder() {
        let mansion = Mansion::from_plan(small_plan()).unwrap();
        let names: Vec<&str> = mansion.iter().map(|(_, r)| r.name()).collect();
        assert_eq!(names, vec!["Hall", "Parlour", "Attic", "Pantry"]);
        assert_eq!(mansion.root(), RoomId(0));
    }

    #[test]
    fn test_children_and_missing_exits() {
        let mansion = Mansion::from_plan(small_plan()).unwrap();
        let parlour = mansion.left(mansion.root()).unwrap();
        assert_eq!(mansion.room(parlour).unwrap().name(), "Parlour");
        assert_eq!(mansion.left(parlour), None);
        let attic = mansion.child(parlour, Exit::Right).unwrap();
        assert!(mansion.room(attic).unwrap().is_dead_end());
        assert_eq!(mansion.room(RoomId(99)), None);
    }

    #[test]
    fn test_empty_clue_reads_as_none() {
        let mansion = Mansion::from_plan(small_plan()).unwrap();
        assert_eq!(mansion.room(RoomId(1)).unwrap().clue(), None);
        assert_eq!(mansion.room(RoomId(0)).unwrap().clue(), Some("Footprints"));
    }

    #[test]
    fn test_empty_name_rejected() {
        let plan = RoomPlan::new("Hall", "").with_right(RoomPlan::new("  ", ""));
        assert_eq!(
            Mansion::from_plan(plan).unwrap_err(),
            LayoutError::EmptyRoomName { index: 1 }
        );
    }

    #[test]
    fn test_path_to() {
        let mansion = Mansion::from_plan(small_plan()).unwrap();
        assert_eq!(mansion.path_to(RoomId(0)), Some(vec![]));
        assert_eq!(mansion.path_to(RoomId(2)), Some(vec![Exit::Left, Exit::Right]));
        assert_eq!(mansion.path_to(RoomId(42)), None);
    }
}
