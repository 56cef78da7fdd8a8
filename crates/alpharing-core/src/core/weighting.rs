//! Closed-form interaction-weight formulas.
//!
//! Each recognized interaction kind carries its own formula combining the
//! contact's energy, distance, and (for orientation-dependent kinds) angle.
//! The distance and angle divisors are the upper bounds of each interaction
//! kind's geometric range, so every term is normalized before scaling by the
//! interaction energy.

const HBOND_DISTANCE_NORM: f64 = 5.3; // In Å
const HBOND_ANGLE_NORM: f64 = 180.0; // In degrees
const IONIC_DISTANCE_NORM: f64 = 4.5;
const PICATION_DISTANCE_NORM: f64 = 6.7;
const PICATION_ANGLE_NORM: f64 = 45.0;
const PIPISTACK_DISTANCE_NORM: f64 = 7.3;
const PIPISTACK_ANGLE_NORM: f64 = 90.0;
const PIHBOND_DISTANCE_NORM: f64 = 5.0;

#[inline]
pub fn hydrogen_bond(energy: f64, distance: f64, angle: f64) -> f64 {
    energy * ((1.0 - distance / HBOND_DISTANCE_NORM) + angle / HBOND_ANGLE_NORM)
}

#[inline]
pub fn ionic(energy: f64, distance: f64) -> f64 {
    energy * 2.0 * (1.0 - distance / IONIC_DISTANCE_NORM)
}

#[inline]
pub fn pi_cation(energy: f64, distance: f64, angle: f64) -> f64 {
    energy * ((1.0 - distance / PICATION_DISTANCE_NORM) + (1.0 - angle / PICATION_ANGLE_NORM))
}

#[inline]
pub fn pi_pi_stack(energy: f64, distance: f64, angle: f64) -> f64 {
    energy * ((1.0 - distance / PIPISTACK_DISTANCE_NORM) + (1.0 - angle / PIPISTACK_ANGLE_NORM))
}

#[inline]
pub fn pi_hydrogen_bond(energy: f64, distance: f64) -> f64 {
    energy * 2.0 * (1.0 - distance / PIHBOND_DISTANCE_NORM)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    #[test]
    fn hydrogen_bond_matches_closed_form() {
        let weight = hydrogen_bond(2.0, 2.9, 155.0);
        assert!(f64_approx_equal(weight, 2.6278825995807127));
    }

    #[test]
    fn hydrogen_bond_at_distance_bound_keeps_only_angle_term() {
        let weight = hydrogen_bond(3.0, 5.3, 90.0);
        assert!(f64_approx_equal(weight, 1.5));
    }

    #[test]
    fn ionic_matches_closed_form() {
        let weight = ionic(1.4, 3.1);
        assert!(f64_approx_equal(weight, 0.8711111111111111));
    }

    #[test]
    fn ionic_at_distance_bound_is_zero() {
        assert!(f64_approx_equal(ionic(5.0, 4.5), 0.0));
    }

    #[test]
    fn pi_cation_matches_closed_form() {
        let weight = pi_cation(1.5, 4.2, 20.0);
        assert!(f64_approx_equal(weight, 1.3930348258706466));
    }

    #[test]
    fn pi_pi_stack_matches_closed_form() {
        let weight = pi_pi_stack(1.2, 5.1, 30.0);
        assert!(f64_approx_equal(weight, 1.1616438356164385));
    }

    #[test]
    fn pi_hydrogen_bond_matches_closed_form() {
        let weight = pi_hydrogen_bond(0.9, 3.4);
        assert!(f64_approx_equal(weight, 0.576));
    }

    #[test]
    fn weights_scale_linearly_with_energy() {
        assert!(f64_approx_equal(ionic(2.0, 3.0), 2.0 * ionic(1.0, 3.0)));
        assert!(f64_approx_equal(
            pi_pi_stack(3.0, 5.0, 45.0),
            3.0 * pi_pi_stack(1.0, 5.0, 45.0)
        ));
    }
}
