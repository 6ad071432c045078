use catalog::Spot;
use foundation::CategoryId;

/// Spots visible under the active category filter.
///
/// - `None`: every spot, in repository order.
/// - `Some(c)`: exactly the spots whose category id is `c`, in repository
///   order. Uncategorized spots never pass an active filter.
///
/// The result borrows from `all`; the source slice is never reordered or
/// modified.
pub fn visible_spots(all: &[Spot], active: Option<CategoryId>) -> Vec<&Spot> {
    match active {
        None => all.iter().collect(),
        Some(category) => all
            .iter()
            .filter(|spot| spot.category_id() == Some(category))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::visible_spots;
    use catalog::{Category, Spot};
    use foundation::{CategoryId, LatLng, SpotId};
    use pretty_assertions::assert_eq;

    fn spot(id: u64, category: Option<u64>) -> Spot {
        Spot {
            id: SpotId::new(id),
            position: LatLng::try_new(48.29, 25.93).unwrap(),
            name: format!("spot {id}"),
            description: String::new(),
            category: category.map(|c| Category {
                id: CategoryId::new(c),
                name: format!("cat {c}"),
                icon_url: None,
            }),
            images: Vec::new(),
        }
    }

    fn ids(spots: &[&Spot]) -> Vec<u64> {
        spots.iter().map(|s| s.id.get()).collect()
    }

    #[test]
    fn no_filter_returns_everything_in_order() {
        let all = vec![spot(3, None), spot(1, Some(5)), spot(2, Some(6))];
        assert_eq!(ids(&visible_spots(&all, None)), vec![3, 1, 2]);
    }

    #[test]
    fn category_filter_selects_matching_spots() {
        let all = vec![spot(1, None), spot(2, Some(5)), spot(3, Some(5))];
        let visible = visible_spots(&all, Some(CategoryId::new(5)));
        assert_eq!(ids(&visible), vec![2, 3]);
    }

    #[test]
    fn uncategorized_spots_fail_every_active_filter() {
        let all = vec![spot(1, None), spot(2, None)];
        for c in [0, 1, 5, u64::MAX] {
            assert!(visible_spots(&all, Some(CategoryId::new(c))).is_empty());
        }
    }

    #[test]
    fn result_is_a_subset_of_the_source() {
        let all = vec![spot(1, Some(1)), spot(2, Some(2)), spot(3, None), spot(4, Some(1))];
        for filter in [None, Some(1), Some(2), Some(3)] {
            let visible = visible_spots(&all, filter.map(CategoryId::new));
            assert!(visible.iter().all(|v| all.iter().any(|s| std::ptr::eq(*v, s))));
        }
    }

    #[test]
    fn unknown_category_yields_nothing() {
        let all = vec![spot(1, Some(5))];
        assert!(visible_spots(&all, Some(CategoryId::new(42))).is_empty());
    }
}
