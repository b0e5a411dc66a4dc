use crate::models::lodging::{LodgingQuote, RoomType, Sharing};
use crate::services::fare_service::EstimateError;

/// Sample price-per-night table, keyed by (room type, sharing).
pub fn price_per_night(room_type: RoomType, sharing: Sharing) -> f64 {
    match (room_type, sharing) {
        (RoomType::Ac, Sharing::Double) => 2500.0,
        (RoomType::Ac, Sharing::Triple) => 3500.0,
        (RoomType::Ac, Sharing::Quad) => 4500.0,
        (RoomType::NonAc, Sharing::Double) => 1500.0,
        (RoomType::NonAc, Sharing::Triple) => 2500.0,
        (RoomType::NonAc, Sharing::Quad) => 3500.0,
    }
}

pub fn parse_room_type(key: &str) -> Result<RoomType, EstimateError> {
    RoomType::from_key(key)
        .ok_or_else(|| EstimateError::InvalidInput(format!("unsupported room type '{}'", key)))
}

pub fn parse_sharing(key: &str) -> Result<Sharing, EstimateError> {
    Sharing::from_key(key).ok_or_else(|| {
        EstimateError::InvalidInput(format!("unsupported sharing capacity '{}'", key))
    })
}

/// Compute a lodging total. Counts below 1 are clamped to 1 rather than
/// rejected, matching how the booking form treats user-entered numbers.
/// Note the asymmetry with the fare estimator, which rejects instead.
pub fn estimate_lodging(
    room_type: RoomType,
    sharing: Sharing,
    nights: u32,
    rooms: u32,
) -> LodgingQuote {
    let nights = nights.max(1);
    let rooms = rooms.max(1);
    let price = price_per_night(room_type, sharing);

    LodgingQuote {
        room_type,
        sharing,
        price_per_night: price,
        nights,
        rooms,
        total: price * nights as f64 * rooms as f64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ac_triple_two_nights() {
        // 3500/night * 2 nights * 1 room
        let quote = estimate_lodging(RoomType::Ac, Sharing::Triple, 2, 1);
        assert_eq!(quote.total, 7000.0);
    }

    #[test]
    fn test_total_is_linear_in_nights_and_rooms() {
        for room_type in [RoomType::Ac, RoomType::NonAc] {
            for sharing in [Sharing::Double, Sharing::Triple, Sharing::Quad] {
                let base = price_per_night(room_type, sharing);
                for nights in 1..=4 {
                    for rooms in 1..=3 {
                        let quote = estimate_lodging(room_type, sharing, nights, rooms);
                        assert_eq!(quote.total, base * nights as f64 * rooms as f64);
                    }
                }
            }
        }
    }

    #[test]
    fn test_doubling_nights_doubles_total() {
        let single = estimate_lodging(RoomType::NonAc, Sharing::Double, 2, 1);
        let double = estimate_lodging(RoomType::NonAc, Sharing::Double, 4, 1);
        assert_eq!(double.total, 2.0 * single.total);
    }

    #[test]
    fn test_zero_counts_are_clamped_to_one() {
        let clamped_nights = estimate_lodging(RoomType::Ac, Sharing::Double, 0, 2);
        let one_night = estimate_lodging(RoomType::Ac, Sharing::Double, 1, 2);
        assert_eq!(clamped_nights.total, one_night.total);
        assert_eq!(clamped_nights.nights, 1);

        let clamped_rooms = estimate_lodging(RoomType::Ac, Sharing::Double, 2, 0);
        let one_room = estimate_lodging(RoomType::Ac, Sharing::Double, 2, 1);
        assert_eq!(clamped_rooms.total, one_room.total);
        assert_eq!(clamped_rooms.rooms, 1);
    }

    #[test]
    fn test_sharing_enum_is_closed() {
        assert!(parse_sharing("2").is_ok());
        assert!(parse_sharing("3").is_ok());
        assert!(parse_sharing("4").is_ok());
        assert!(parse_sharing("5").is_err());
        assert!(parse_room_type("dormitory").is_err());
    }
}
