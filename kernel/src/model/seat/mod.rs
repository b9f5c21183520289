use std::collections::HashMap;

use shared::error::{AppError, AppResult};

use crate::model::id::SeatId;

/// Grid size used when a space is created without an explicit layout.
pub const DEFAULT_ROWS: u32 = 5;
pub const DEFAULT_COLS: u32 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seat {
    pub id: SeatId,
    pub row: u32,
    pub col: u32,
    pub available: bool,
    pub reserved_by: Option<String>,
}

/// Rectangular seat grid of a coworking space: the row-major layout plus a
/// per-seat record keyed by ID. The two stay in bijection; `generate` is the
/// only constructor that builds both.
///
/// Seat count is intentionally independent of the space's `capacity`:
/// capacity bounds the occupancy counter, the layout bounds which physical
/// seats exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatMap {
    pub layout: Vec<Vec<SeatId>>,
    pub seats: HashMap<SeatId, Seat>,
}

impl SeatMap {
    /// Builds a `rows` x `cols` grid of seats `"{r}-{c}"`, 1-based, all
    /// initially available. Deterministic for a given shape.
    pub fn generate(rows: u32, cols: u32) -> Self {
        let mut layout = Vec::with_capacity(rows as usize);
        let mut seats = HashMap::with_capacity((rows * cols) as usize);
        for row in 1..=rows {
            let mut line = Vec::with_capacity(cols as usize);
            for col in 1..=cols {
                let id = SeatId::new(row, col);
                line.push(id.clone());
                seats.insert(
                    id.clone(),
                    Seat {
                        id,
                        row,
                        col,
                        available: true,
                        reserved_by: None,
                    },
                );
            }
            layout.push(line);
        }
        Self { layout, seats }
    }

    pub fn seat(&self, seat_id: &SeatId) -> Option<&Seat> {
        self.seats.get(seat_id)
    }

    /// Marks the seat as taken by `holder`. A failed claim never mutates the
    /// map, so callers can abort a larger operation without rollback.
    pub fn claim(&mut self, seat_id: &SeatId, holder: &str) -> AppResult<()> {
        let seat = self.seats.get_mut(seat_id).ok_or_else(|| {
            AppError::SeatNotFound(format!("Seat ({seat_id}) does not exist"))
        })?;
        if !seat.available {
            return Err(AppError::SeatUnavailable(format!(
                "Seat ({seat_id}) is already reserved"
            )));
        }
        seat.available = false;
        seat.reserved_by = Some(holder.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(1, 1)]
    #[case(2, 2)]
    #[case(2, 3)]
    #[case(5, 5)]
    #[case(10, 4)]
    fn generate_produces_full_available_grid(#[case] rows: u32, #[case] cols: u32) {
        let map = SeatMap::generate(rows, cols);

        assert_eq!(map.layout.len(), rows as usize);
        assert!(map.layout.iter().all(|line| line.len() == cols as usize));
        assert_eq!(map.seats.len(), (rows * cols) as usize);

        let grid_ids: HashSet<_> = map.layout.iter().flatten().collect();
        assert_eq!(grid_ids.len(), (rows * cols) as usize);
        // Every grid cell has a seat record and vice versa.
        let map_ids: HashSet<_> = map.seats.keys().collect();
        assert_eq!(grid_ids, map_ids);

        assert!(map
            .seats
            .values()
            .all(|s| s.available && s.reserved_by.is_none()));
    }

    #[test]
    fn generate_is_deterministic() {
        assert_eq!(SeatMap::generate(3, 4), SeatMap::generate(3, 4));
    }

    #[test]
    fn seat_ids_carry_their_coordinates() {
        let map = SeatMap::generate(2, 2);
        let seat = map.seat(&SeatId::new(2, 1)).unwrap();
        assert_eq!(seat.row, 2);
        assert_eq!(seat.col, 1);
        assert_eq!(seat.id.as_str(), "2-1");
    }

    #[test]
    fn claim_marks_seat_taken() {
        let mut map = SeatMap::generate(2, 2);
        map.claim(&SeatId::new(1, 1), "John Doe").unwrap();

        let seat = map.seat(&SeatId::new(1, 1)).unwrap();
        assert!(!seat.available);
        assert_eq!(seat.reserved_by.as_deref(), Some("John Doe"));
    }

    #[test]
    fn claim_of_taken_seat_fails_without_mutation() {
        let mut map = SeatMap::generate(2, 2);
        map.claim(&SeatId::new(1, 1), "Alice Smith").unwrap();

        let before = map.clone();
        let err = map.claim(&SeatId::new(1, 1), "Bob Johnson").unwrap_err();
        assert!(matches!(err, AppError::SeatUnavailable(_)));
        assert_eq!(map, before);

        // Repeating the claim reports the same failure.
        let err = map.claim(&SeatId::new(1, 1), "Bob Johnson").unwrap_err();
        assert!(matches!(err, AppError::SeatUnavailable(_)));
    }

    #[test]
    fn claim_of_unknown_seat_fails_without_mutation() {
        let mut map = SeatMap::generate(2, 2);
        let before = map.clone();
        let err = map.claim(&SeatId::from("99-99"), "John Doe").unwrap_err();
        assert!(matches!(err, AppError::SeatNotFound(_)));
        assert_eq!(map, before);
    }
}
