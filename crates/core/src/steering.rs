//! Steering - turns raw joystick readings into a direction
//!
//! Only one axis counts per sample: whichever deviates further from centre.
//! That axis must then leave the 400..=600 dead zone to express an intent.

use crate::types::{AxisReading, Direction, AXIS_CENTER, AXIS_HIGH, AXIS_LOW};

/// Force the weaker axis to centre. On a tie the X axis is centred.
pub fn normalize(reading: AxisReading) -> AxisReading {
    let dx = (reading.x - AXIS_CENTER).abs();
    let dy = (reading.y - AXIS_CENTER).abs();
    if dx > dy {
        AxisReading::new(reading.x, AXIS_CENTER)
    } else {
        AxisReading::new(AXIS_CENTER, reading.y)
    }
}

/// Direction the player is pushing towards, if any.
pub fn intent(reading: AxisReading) -> Option<Direction> {
    let r = normalize(reading);
    if r.y > AXIS_HIGH {
        Some(Direction::Up)
    } else if r.y < AXIS_LOW {
        Some(Direction::Down)
    } else if r.x < AXIS_LOW {
        Some(Direction::Left)
    } else if r.x > AXIS_HIGH {
        Some(Direction::Right)
    } else {
        None
    }
}

/// Direction for the next move: the intent unless it reverses `current`.
pub fn resolve(intent: Option<Direction>, current: Direction) -> Direction {
    intent
        .filter(|d| *d != current.opposite())
        .unwrap_or(current)
}
