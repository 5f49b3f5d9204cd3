//! Weather conditions as the route optimiser understands them.
//!
//! The upstream weather feed reports free-form condition strings. Only three
//! of them mark bad weather; everything else, including readouts the engine
//! has never seen, counts as good.
//!
//! # Examples
//! ```
//! use lumi_core::Weather;
//!
//! assert!(Weather::from_condition("Rain").is_bad());
//! assert!(!Weather::from_condition("Drizzle").is_bad());
//! ```

/// An enumerated weather condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weather {
    /// Overcast skies.
    Clouds,
    /// Rainfall.
    Rain,
    /// Snowfall.
    Snow,
    /// Clear weather; also the reading for any unrecognised condition.
    Sunny,
}

impl Weather {
    /// Map a raw condition string from the weather feed onto a variant.
    ///
    /// Matching is exact and case-sensitive on the three bad-weather
    /// literals; every other string maps to [`Weather::Sunny`]. The
    /// conversion is total so route optimisation never fails on an
    /// unexpected readout.
    ///
    /// # Examples
    /// ```
    /// use lumi_core::Weather;
    ///
    /// assert_eq!(Weather::from_condition("Snow"), Weather::Snow);
    /// assert_eq!(Weather::from_condition("snow"), Weather::Sunny);
    /// ```
    pub fn from_condition(condition: &str) -> Self {
        match condition {
            "Clouds" => Self::Clouds,
            "Rain" => Self::Rain,
            "Snow" => Self::Snow,
            _ => Self::Sunny,
        }
    }

    /// Report whether the condition calls for indoor-first sequencing.
    pub const fn is_bad(self) -> bool {
        !matches!(self, Self::Sunny)
    }

    /// Return the condition as its canonical `&str`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Clouds => "Clouds",
            Self::Rain => "Rain",
            Self::Snow => "Snow",
            Self::Sunny => "Sunny",
        }
    }
}

impl Default for Weather {
    fn default() -> Self {
        Self::Sunny
    }
}

impl std::fmt::Display for Weather {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Weather {
    type Err = String;

    /// Strict, case-insensitive parse for operator-supplied values.
    ///
    /// Unlike [`Weather::from_condition`], unknown names are rejected so a
    /// mistyped flag cannot silently select good weather.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sunny" => Ok(Self::Sunny),
            "clouds" => Ok(Self::Clouds),
            "rain" => Ok(Self::Rain),
            "snow" => Ok(Self::Snow),
            _ => Err(format!("unknown weather '{s}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    #[rstest]
    #[case("Clouds", Weather::Clouds)]
    #[case("Rain", Weather::Rain)]
    #[case("Snow", Weather::Snow)]
    #[case("Sunny", Weather::Sunny)]
    #[case("Drizzle", Weather::Sunny)]
    #[case("rain", Weather::Sunny)]
    #[case("", Weather::Sunny)]
    fn condition_mapping(#[case] condition: &str, #[case] expected: Weather) {
        assert_eq!(Weather::from_condition(condition), expected);
    }

    #[rstest]
    #[case(Weather::Clouds, true)]
    #[case(Weather::Rain, true)]
    #[case(Weather::Snow, true)]
    #[case(Weather::Sunny, false)]
    fn bad_weather_classification(#[case] weather: Weather, #[case] expected: bool) {
        assert_eq!(weather.is_bad(), expected);
    }

    #[test]
    fn display_matches_as_str() {
        assert_eq!(Weather::Rain.to_string(), Weather::Rain.as_str());
    }

    #[test]
    fn parsing_rejects_unknown() {
        let err = Weather::from_str("hail").unwrap_err();
        assert!(err.contains("unknown weather"));
    }

    #[test]
    fn parsing_is_case_insensitive() {
        assert_eq!(Weather::from_str("SNOW"), Ok(Weather::Snow));
    }
}
