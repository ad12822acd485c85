//! The fixed mansion and the facts of the case
//!
//! ```text
//!                  Entrance Hall
//!                /               \
//!        Living Room            Kitchen
//!        /        \            /       \
//!    Library     Garden   Wine Cellar   Study
//! ```

use super::{LayoutError, Mansion, RoomPlan};

/// Clue text and the suspect it implicates
pub const CASE_FILE: &[(&str, &str)] = &[
    ("Muddy footprints on the rug", "Pedro"),
    ("Broken wine glass", "Ana"),
    ("Knife missing from the block", "Carlos"),
    ("Torn book with the initials P.A.", "Pedro"),
    ("Bottle labelled from vineyard X", "Ana"),
    ("Torn letter signed S.", "Sofia"),
];

/// Build the seven-room mansion the game is played in
pub fn standard_mansion() -> Result<Mansion, LayoutError> {
    let living_room = RoomPlan::new("Living Room", "Broken wine glass")
        .with_left(RoomPlan::new("Library", "Torn book with the initials P.A."))
        .with_right(RoomPlan::new("Garden", ""));

    let kitchen = RoomPlan::new("Kitchen", "Knife missing from the block")
        .with_left(RoomPlan::new("Wine Cellar", "Bottle labelled from vineyard X"))
        .with_right(RoomPlan::new("Study", "Torn letter signed S."));

    Mansion::from_plan(
        RoomPlan::new("Entrance Hall", "Muddy footprints on the rug")
            .with_left(living_room)
            .with_right(kitchen),
    )
}
