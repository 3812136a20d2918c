//! Tests for base settings defaults and clamping

#[cfg(test)]
mod tests {
    use mondriant::io::configuration::{PADDING_MAX, PARAMETER_EPSILON, SPEED_MAX, SPEED_MIN};
    use mondriant::params::BaseSettings;
    use mondriant::spatial::PixelColor;

    fn wild() -> BaseSettings {
        BaseSettings {
            speed: 0,
            padding: 50,
            split_dt_start: -3.0,
            split_dt_factor: f64::NAN,
            split_dt_min: 10.0,
            split_dt_max: 4.0,
            split_rate_start: -1.0,
            split_rate_factor: 0.0,
            end_pause_time: -5.0,
            color_freq: f64::NAN,
            ..BaseSettings::default()
        }
    }

    // Tests defaults already satisfy every domain
    // Verified by changing a default outside its domain
    #[test]
    fn test_defaults_are_valid() {
        let defaults = BaseSettings::default();

        assert_eq!(defaults.clone().validated(), defaults);
        assert_eq!(defaults.speed, 6);
        assert_eq!(defaults.padding, 1);
        assert_eq!(defaults.background, PixelColor::BLACK);
        assert!(defaults.colored_trails);
    }

    // Tests dimensions are carried by with_dimensions only
    // Verified by ignoring the height argument
    #[test]
    fn test_with_dimensions() {
        let settings = BaseSettings::with_dimensions(320, 200);

        assert_eq!(settings.width, 320);
        assert_eq!(settings.height, 200);
        assert_eq!(settings.speed, BaseSettings::default().speed);
    }

    // Tests out-of-range values are pulled into their domains
    // Verified by removing the speed clamp
    #[test]
    fn test_validate_clamps_everything() {
        let settings = wild().validated();

        assert_eq!(settings.speed, SPEED_MIN);
        assert_eq!(settings.padding, PADDING_MAX);
        assert!((settings.split_dt_factor - PARAMETER_EPSILON).abs() < f64::EPSILON);
        assert!((settings.split_dt_min - 10.0).abs() < f64::EPSILON);
        assert!(settings.split_dt_max >= settings.split_dt_min);
        assert!(settings.split_dt_start >= settings.split_dt_min);
        assert!(settings.split_dt_start <= settings.split_dt_max);
        assert!((settings.split_rate_start - PARAMETER_EPSILON).abs() < f64::EPSILON);
        assert!((settings.split_rate_factor - PARAMETER_EPSILON).abs() < f64::EPSILON);
        assert!(settings.end_pause_time.abs() < f64::EPSILON);
        assert!((settings.color_freq - PARAMETER_EPSILON).abs() < f64::EPSILON);
    }

    // Tests speed upper clamp
    // Verified by clamping to SPEED_MAX + 1
    #[test]
    fn test_validate_speed_upper_bound() {
        let settings = BaseSettings {
            speed: 99,
            ..BaseSettings::default()
        }
        .validated();

        assert_eq!(settings.speed, SPEED_MAX);
    }

    // Tests validation is idempotent
    // Verified by reordering the min and max clamps
    #[test]
    fn test_validate_idempotent() {
        let once = wild().validated();
        let twice = once.clone().validated();

        assert_eq!(once, twice);
    }

    // Tests the start interval is clamped into [min, max]
    // Verified by skipping the upper clamp on split_dt_start
    #[test]
    fn test_split_dt_start_clamped_to_range() {
        let settings = BaseSettings {
            split_dt_start: 500.0,
            split_dt_min: 2.0,
            split_dt_max: 64.0,
            ..BaseSettings::default()
        }
        .validated();

        assert!((settings.split_dt_start - 64.0).abs() < f64::EPSILON);
    }

    // Tests a zero pause is kept
    // Verified by flooring the pause at epsilon
    #[test]
    fn test_zero_pause_allowed() {
        let settings = BaseSettings {
            end_pause_time: 0.0,
            ..BaseSettings::default()
        }
        .validated();

        assert!(settings.end_pause_time.abs() < f64::EPSILON);
    }
}
