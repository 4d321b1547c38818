//! Show invariants:
//!
//! 1. A show references exactly one venue and exactly one artist
//! 2. Both references must exist when the show is created
//! 3. A show goes away with its venue or its artist
//! 4. "Upcoming" means start_time >= now; everything else is past

pub mod entity;
pub mod schedule;

pub use entity::{format_start_time, parse_start_time, NewShow, ShowId};
pub use schedule::{partition_by_start_time, PartitionedShows};
