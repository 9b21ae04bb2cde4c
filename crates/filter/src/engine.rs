//! The Filter Engine: point collection + Filter State → surviving points.
//!
//! Pure and order preserving. Every call is a single O(n) pass over the
//! collection; nothing is re-sampled or copied.

use sagdec_core::SyntheticPoint;

use crate::state::FilterState;

impl FilterState {
    /// Test if a point passes every constrained dimension.
    ///
    /// `shift` is not consulted: points carry no shift field.
    pub fn matches(&self, point: &SyntheticPoint) -> bool {
        self.zone.matches(&point.zone)
            && self.authority.matches(&point.authority)
            && self.stratum.matches(&point.stratum)
            && self.cluster.matches(&point.cluster)
    }
}

/// Points matching `state`, in collection order.
pub fn apply<'a>(points: &'a [SyntheticPoint], state: &FilterState) -> Vec<&'a SyntheticPoint> {
    points.iter().filter(|p| state.matches(p)).collect()
}

/// Positions of the points matching `state`, ascending.
pub fn apply_indices(points: &[SyntheticPoint], state: &FilterState) -> Vec<usize> {
    points
        .iter()
        .enumerate()
        .filter(|(_, p)| state.matches(p))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sagdec_core::{Authority, ClusterId, Shift, Stratum, Zone};

    fn point(zone: Zone, authority: Authority, stratum: u8, cluster: u8) -> SyntheticPoint {
        SyntheticPoint {
            sites: 0.5,
            stratum: Stratum::new(stratum).unwrap(),
            cluster: ClusterId(cluster),
            zone,
            authority,
        }
    }

    #[test]
    fn test_empty_state_matches_all() {
        let p = point(Zone::Rural, Authority::Valle, 1, 1);
        assert!(FilterState::new().matches(&p));
    }

    #[test]
    fn test_each_dimension_narrows() {
        let p = point(Zone::Urban, Authority::Bogota, 4, 2);
        assert!(FilterState::new().zone(Zone::Urban).matches(&p));
        assert!(!FilterState::new().zone(Zone::Rural).matches(&p));
        assert!(FilterState::new().authority(Authority::Bogota).matches(&p));
        assert!(!FilterState::new().authority(Authority::Valle).matches(&p));
        assert!(FilterState::new().stratum(Stratum::new(4).unwrap()).matches(&p));
        assert!(!FilterState::new().stratum(Stratum::new(5).unwrap()).matches(&p));
        assert!(FilterState::new().cluster(ClusterId(2)).matches(&p));
        assert!(!FilterState::new().cluster(ClusterId(3)).matches(&p));
    }

    #[test]
    fn test_all_dimensions_must_match() {
        let p = point(Zone::Urban, Authority::Bogota, 4, 2);
        let state = FilterState::new()
            .zone(Zone::Urban)
            .authority(Authority::Bogota)
            .stratum(Stratum::new(4).unwrap())
            .cluster(ClusterId(3));
        assert!(!state.matches(&p));
    }

    #[test]
    fn test_shift_has_no_effect() {
        let points = vec![
            point(Zone::Urban, Authority::Valle, 1, 1),
            point(Zone::Rural, Authority::Antioquia, 6, 8),
        ];
        for shift in Shift::ALL {
            let state = FilterState::new().shift(shift);
            assert_eq!(apply(&points, &state).len(), 2);
        }
    }

    #[test]
    fn test_apply_indices_agree_with_apply() {
        let points = vec![
            point(Zone::Urban, Authority::Valle, 1, 1),
            point(Zone::Rural, Authority::Valle, 1, 1),
            point(Zone::Urban, Authority::Atlantico, 2, 3),
        ];
        let state = FilterState::new().zone(Zone::Urban);
        let idx = apply_indices(&points, &state);
        assert_eq!(idx, vec![0, 2]);
        let matched = apply(&points, &state);
        assert_eq!(matched.len(), 2);
        assert!(std::ptr::eq(matched[0], &points[0]));
        assert!(std::ptr::eq(matched[1], &points[2]));
    }
}
