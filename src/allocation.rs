// Room allocation engine: maps each room request to a room-type offer and
// sums the price. Pure computation, no I/O, no logging; safe to run
// concurrently across hotels.

use crate::model::{AssignedRoom, RoomRequest, RoomTypeOffer};

// Whether a single offer may satisfy any number of requests within one
// allocation, or whether each assignment consumes one of its units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CapacityPolicy {
    // Current booking behavior: an offer never runs out within one search.
    #[default]
    UnlimitedReuse,
    // Stricter opt-in: each assignment consumes one unit of the offer's
    // available_rooms; exhausted offers stop matching.
    ConsumeInventory,
}

// Result of allocating one hotel's offers against a list of requests.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Allocation {
    pub assigned: Vec<AssignedRoom>,
    pub total_price: f64,
}

// First-fit allocation under the default unlimited-reuse policy.
//
// Requests are processed in their given order; each takes the first offer
// whose max_adults covers its adult count, regardless of price or fit
// quality. A request no offer can cover is dropped from the output without
// an error marker. Always returns a value; never fails.
pub fn allocate(requests: &[RoomRequest], offers: &[RoomTypeOffer]) -> Allocation {
    allocate_with_policy(requests, offers, CapacityPolicy::UnlimitedReuse)
}

pub fn allocate_with_policy(
    requests: &[RoomRequest],
    offers: &[RoomTypeOffer],
    policy: CapacityPolicy,
) -> Allocation {
    // Remaining units per offer, only consulted under ConsumeInventory.
    // Negative counts from malformed data behave like zero.
    let mut remaining: Vec<i32> = match policy {
        CapacityPolicy::UnlimitedReuse => Vec::new(),
        CapacityPolicy::ConsumeInventory => offers.iter().map(|o| o.available_rooms).collect(),
    };

    let mut allocation = Allocation::default();

    for request in requests {
        let suitable = offers.iter().enumerate().find(|(idx, offer)| {
            if offer.max_adults < request.number_of_adults {
                return false;
            }
            match policy {
                CapacityPolicy::UnlimitedReuse => true,
                CapacityPolicy::ConsumeInventory => remaining[*idx] > 0,
            }
        });

        if let Some((idx, offer)) = suitable {
            if policy == CapacityPolicy::ConsumeInventory {
                remaining[idx] -= 1;
            }

            allocation.assigned.push(AssignedRoom {
                room_name: offer.name.clone(),
                max_adults: offer.max_adults,
                price: offer.total_price,
                assigned_adults: request.number_of_adults,
            });
            allocation.total_price += offer.total_price;
        }
    }

    allocation
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn offer(name: &str, max_adults: i32, total_price: f64) -> RoomTypeOffer {
        RoomTypeOffer {
            name: name.to_string(),
            max_adults,
            total_price,
            available_rooms: 1,
        }
    }

    fn requests(adults: &[i32]) -> Vec<RoomRequest> {
        adults.iter().copied().map(RoomRequest::new).collect()
    }

    #[test]
    fn test_empty_offers_yields_empty_allocation() {
        let result = allocate(&requests(&[2, 1, 4]), &[]);
        assert!(result.assigned.is_empty());
        assert_eq!(result.total_price, 0.0);
    }

    #[test]
    fn test_empty_requests_yields_empty_allocation() {
        let offers = vec![offer("Deluxe Room", 2, 100.0)];
        let result = allocate(&[], &offers);
        assert!(result.assigned.is_empty());
        assert_eq!(result.total_price, 0.0);
    }

    #[test]
    fn test_first_fit_ignores_cheaper_later_offer() {
        // B is cheaper, but A appears first and has capacity, so A wins.
        let offers = vec![offer("A", 2, 100.0), offer("B", 2, 80.0)];
        let result = allocate(&requests(&[2]), &offers);

        assert_eq!(result.assigned.len(), 1);
        assert_eq!(result.assigned[0].room_name, "A");
        assert_eq!(result.assigned[0].price, 100.0);
        assert_eq!(result.total_price, 100.0);
    }

    #[test]
    fn test_offer_reused_across_requests() {
        let offers = vec![offer("C", 4, 50.0)];
        let result = allocate(&requests(&[2, 3]), &offers);

        assert_eq!(result.assigned.len(), 2);
        assert_eq!(result.assigned[0].room_name, "C");
        assert_eq!(result.assigned[1].room_name, "C");
        assert_eq!(result.assigned[0].assigned_adults, 2);
        assert_eq!(result.assigned[1].assigned_adults, 3);
        assert_eq!(result.total_price, 100.0);
    }

    #[test]
    fn test_unsatisfiable_request_is_dropped() {
        let offers = vec![offer("D", 1, 30.0)];
        let result = allocate(&requests(&[2, 1]), &offers);

        assert_eq!(result.assigned.len(), 1);
        assert_eq!(result.assigned[0].room_name, "D");
        assert_eq!(result.assigned[0].assigned_adults, 1);
        assert_eq!(result.total_price, 30.0);
    }

    #[test]
    fn test_satisfied_subset_preserves_request_order() {
        let offers = vec![offer("Standard Twin", 2, 90.0), offer("Family Suite", 4, 210.0)];
        // The 6-adult request cannot be satisfied; the rest keep their order.
        let result = allocate(&requests(&[4, 6, 1, 3]), &offers);

        let assigned_adults: Vec<i32> =
            result.assigned.iter().map(|r| r.assigned_adults).collect();
        assert_eq!(assigned_adults, vec![4, 1, 3]);
        assert_eq!(result.assigned[0].room_name, "Family Suite");
        assert_eq!(result.assigned[1].room_name, "Standard Twin");
        assert_eq!(result.assigned[2].room_name, "Family Suite");
    }

    #[test]
    fn test_total_price_is_exact_sum_of_assignments() {
        let offers = vec![offer("A", 2, 84.82), offer("B", 4, 129.99)];
        let result = allocate(&requests(&[1, 3, 2]), &offers);

        assert_eq!(result.assigned.len(), 3);
        let sum: f64 = result.assigned.iter().map(|r| r.price).sum();
        assert_eq!(result.total_price, sum);
    }

    #[test]
    fn test_allocation_is_idempotent() {
        let offers = vec![offer("A", 2, 100.0), offer("B", 3, 150.0)];
        let reqs = requests(&[3, 2, 5, 1]);

        let first = allocate(&reqs, &offers);
        let second = allocate(&reqs, &offers);
        assert_eq!(first, second);
    }

    // Non-positive adult counts are not validated here; the capacity
    // comparison alone decides whether an offer matches.
    #[test_case(0, 1 ; "zero adults matches any offer")]
    #[test_case(-1, 1 ; "negative adults matches any offer")]
    #[test_case(3, 0 ; "over capacity matches nothing")]
    fn test_degenerate_adult_counts(adults: i32, expected_assigned: usize) {
        let offers = vec![offer("A", 2, 100.0)];
        let result = allocate(&requests(&[adults]), &offers);
        assert_eq!(result.assigned.len(), expected_assigned);
    }

    #[test]
    fn test_assignment_does_not_mutate_offers() {
        let offers = vec![offer("A", 2, 100.0)];
        let before = offers.clone();
        let _ = allocate(&requests(&[2, 2, 2]), &offers);
        assert_eq!(offers, before);
    }

    #[test]
    fn test_consume_inventory_exhausts_offer() {
        // One unit of A: the second 2-adult request falls through to B,
        // the third finds nothing left.
        let mut a = offer("A", 2, 100.0);
        a.available_rooms = 1;
        let mut b = offer("B", 2, 80.0);
        b.available_rooms = 1;

        let result = allocate_with_policy(
            &requests(&[2, 2, 2]),
            &[a, b],
            CapacityPolicy::ConsumeInventory,
        );

        assert_eq!(result.assigned.len(), 2);
        assert_eq!(result.assigned[0].room_name, "A");
        assert_eq!(result.assigned[1].room_name, "B");
        assert_eq!(result.total_price, 180.0);
    }

    #[test]
    fn test_consume_inventory_treats_nonpositive_units_as_empty() {
        let mut a = offer("A", 2, 100.0);
        a.available_rooms = 0;
        let mut b = offer("B", 2, 80.0);
        b.available_rooms = -3;

        let result = allocate_with_policy(
            &requests(&[1]),
            &[a, b],
            CapacityPolicy::ConsumeInventory,
        );
        assert!(result.assigned.is_empty());
        assert_eq!(result.total_price, 0.0);
    }

    #[test]
    fn test_unlimited_reuse_ignores_available_rooms() {
        let mut a = offer("A", 4, 50.0);
        a.available_rooms = 0;

        let result = allocate(&requests(&[2, 3, 4]), &[a]);
        assert_eq!(result.assigned.len(), 3);
        assert_eq!(result.total_price, 150.0);
    }

    // First-fit selection table: earliest capacity-sufficient offer wins.
    #[test_case(1, "Single" ; "one adult takes the single")]
    #[test_case(2, "Double" ; "two adults skip to the double")]
    #[test_case(4, "Family Suite" ; "four adults skip to the suite")]
    #[test_case(5, "" ; "five adults find nothing")]
    fn test_first_fit_selection(adults: i32, expected_room: &str) {
        let offers = vec![
            offer("Single", 1, 40.0),
            offer("Double", 2, 70.0),
            offer("Family Suite", 4, 150.0),
        ];

        let result = allocate(&requests(&[adults]), &offers);
        if expected_room.is_empty() {
            assert!(result.assigned.is_empty());
        } else {
            assert_eq!(result.assigned[0].room_name, expected_room);
        }
    }
}
