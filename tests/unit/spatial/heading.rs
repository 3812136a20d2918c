//! Tests for grid headings, rotation and flank positions

#[cfg(test)]
mod tests {
    use mondriant::spatial::Heading;

    // Tests quarter turns cycle through all four headings
    // Verified by rotating the other way
    #[test]
    fn test_rotation_cycle() {
        assert_eq!(Heading::UP.rotated(), Heading::RIGHT);
        assert_eq!(Heading::RIGHT.rotated(), Heading::DOWN);
        assert_eq!(Heading::DOWN.rotated(), Heading::LEFT);
        assert_eq!(Heading::LEFT.rotated(), Heading::UP);
    }

    // Tests reversal is a half turn
    // Verified by negating only dx
    #[test]
    fn test_reversed_is_two_rotations() {
        for heading in [Heading::UP, Heading::DOWN, Heading::LEFT, Heading::RIGHT] {
            assert_eq!(heading.reversed(), heading.rotated().rotated());
            assert_eq!(heading.reversed().reversed(), heading);
        }
    }

    // Tests stepping moves by the unit vector
    // Verified by treating UP as increasing y
    #[test]
    fn test_step_from() {
        assert_eq!(Heading::UP.step_from(2, 2), (2, 1));
        assert_eq!(Heading::DOWN.step_from(2, 2), (2, 3));
        assert_eq!(Heading::LEFT.step_from(2, 2), (1, 2));
        assert_eq!(Heading::RIGHT.step_from(2, 2), (3, 2));
    }

    // Tests flanks are perpendicular neighbours
    // Verified by returning forward neighbours
    #[test]
    fn test_flanks_are_perpendicular() {
        assert_eq!(Heading::UP.flanks(2, 1), [(1, 1), (3, 1)]);
        assert_eq!(Heading::RIGHT.flanks(2, 1), [(2, 2), (2, 0)]);

        for heading in [Heading::UP, Heading::DOWN, Heading::LEFT, Heading::RIGHT] {
            for (fx, fy) in heading.flanks(5, 5) {
                let (ox, oy) = (fx - 5, fy - 5);
                assert_eq!(ox * heading.dx + oy * heading.dy, 0);
                assert_eq!(ox.abs() + oy.abs(), 1);
            }
        }
    }
}
