//! Wind speed scales and compass directions

use serde::{Deserialize, Serialize};

/// Upper bounds in km/h of Beaufort forces 0..=11; anything faster is 12
const BEAUFORT_LIMITS_KMH: [f64; 12] = [
    1.0, 5.0, 11.0, 19.0, 28.0, 38.0, 49.0, 61.0, 74.0, 88.0, 102.0, 117.0,
];

const LAND_NAMES: [&str; 13] = [
    "Lugnt",
    "Svag vind",
    "Svag vind",
    "Måttlig vind",
    "Måttlig vind",
    "Frisk vind",
    "Frisk vind",
    "Hård vind",
    "Hård vind",
    "Hård vind",
    "Storm",
    "Storm",
    "Orkan",
];

const SEA_NAMES: [&str; 13] = [
    "Stiltje", "Bris", "Bris", "Bris", "Bris", "Bris", "Bris", "Kuling", "Kuling", "Kuling",
    "Storm", "Storm", "Orkan",
];

const COMPASS: [&str; 16] = [
    "N", "NNO", "NO", "ONO", "O", "OSO", "SO", "SSO", "S", "SSV", "SV", "VSV", "V", "VNV", "NV",
    "NNV",
];

/// How wind speed is presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindUnit {
    /// Swedish land scale names
    #[default]
    Land,
    /// Swedish sea scale names
    Sjo,
    Beaufort,
    Ms,
    Kmh,
}

impl WindUnit {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "land" => Some(WindUnit::Land),
            "sjo" | "sjö" => Some(WindUnit::Sjo),
            "beaufort" => Some(WindUnit::Beaufort),
            "ms" | "m/s" => Some(WindUnit::Ms),
            "kmh" | "km/h" => Some(WindUnit::Kmh),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WindUnit::Land => "land",
            WindUnit::Sjo => "sjo",
            WindUnit::Beaufort => "beaufort",
            WindUnit::Ms => "ms",
            WindUnit::Kmh => "kmh",
        }
    }
}

/// Beaufort force (0..=12) for a speed in km/h
pub fn beaufort_force(speed_kmh: f64) -> usize {
    BEAUFORT_LIMITS_KMH
        .iter()
        .position(|max| speed_kmh <= *max)
        .unwrap_or(BEAUFORT_LIMITS_KMH.len())
}

/// Format a speed given in m/s. Calm, absent and unreadable speeds show `0`.
pub fn format_wind(speed_ms: Option<f64>, unit: WindUnit) -> String {
    let Some(ms) = speed_ms.filter(|v| v.is_finite() && *v != 0.0) else {
        return "0".to_string();
    };
    let kmh = ms * 3.6;
    let force = beaufort_force(kmh);
    match unit {
        WindUnit::Land => LAND_NAMES[force].to_string(),
        WindUnit::Sjo => SEA_NAMES[force].to_string(),
        WindUnit::Beaufort => force.to_string(),
        WindUnit::Ms => format!("{:.1} m/s", ms),
        WindUnit::Kmh => format!("{} km/h", kmh.round() as i64),
    }
}

/// 16-point Swedish compass name for a bearing in degrees
pub fn compass_direction(degrees: Option<f64>) -> Option<&'static str> {
    let deg = degrees.filter(|v| v.is_finite())?;
    let index = ((deg / 22.5).round() as i64).rem_euclid(16) as usize;
    Some(COMPASS[index])
}

/// Speed followed by direction when known, e.g. `Svag vind SV`
pub fn describe_wind(speed_ms: Option<f64>, direction: Option<f64>, unit: WindUnit) -> String {
    let speed = format_wind(speed_ms, unit);
    match compass_direction(direction) {
        Some(dir) => format!("{} {}", speed, dir),
        None => speed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_names() {
        // 3 m/s = 10.8 km/h
        assert_eq!(format_wind(Some(3.0), WindUnit::Land), "Svag vind");
        assert_eq!(format_wind(Some(3.0), WindUnit::Sjo), "Bris");
        assert_eq!(format_wind(Some(3.0), WindUnit::Beaufort), "2");
        assert_eq!(format_wind(Some(40.0), WindUnit::Land), "Orkan");
    }

    #[test]
    fn numeric_units() {
        assert_eq!(format_wind(Some(3.0), WindUnit::Ms), "3.0 m/s");
        assert_eq!(format_wind(Some(3.0), WindUnit::Kmh), "11 km/h");
    }

    #[test]
    fn calm_or_missing_is_zero() {
        assert_eq!(format_wind(None, WindUnit::Land), "0");
        assert_eq!(format_wind(Some(0.0), WindUnit::Kmh), "0");
        assert_eq!(format_wind(Some(f64::NAN), WindUnit::Ms), "0");
    }

    #[test]
    fn compass() {
        assert_eq!(compass_direction(Some(0.0)), Some("N"));
        assert_eq!(compass_direction(Some(225.0)), Some("SV"));
        assert_eq!(compass_direction(Some(355.0)), Some("N"));
        assert_eq!(compass_direction(Some(90.0)), Some("O"));
        assert_eq!(compass_direction(None), None);
    }

    #[test]
    fn parse_units() {
        assert_eq!(WindUnit::parse("SJO"), Some(WindUnit::Sjo));
        assert_eq!(WindUnit::parse("m/s"), Some(WindUnit::Ms));
        assert_eq!(WindUnit::parse("knots"), None);
    }
}
