use crate::TrackerError;
use crate::profile::PersonalProfile;

pub const DEFAULT_NAME: &str = "Гоша";
pub const DEFAULT_WEIGHT: f64 = 85.0;
pub const DEFAULT_HEIGHT: f64 = 1.85;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputMode {
    #[default]
    Text,
    Json,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub profile: PersonalProfile,
    pub output: OutputMode,
}

impl Config {
    pub fn from_env() -> Result<Self, TrackerError> {
        Self::from_env_with(|k| std::env::var(k).ok())
    }

    /// Reads configuration through `get` so tests never touch the process
    /// environment. Weight and height positivity is checked when metrics
    /// are computed, not here.
    pub fn from_env_with<F>(mut get: F) -> Result<Self, TrackerError>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let name = get("TRACKER_USER_NAME").unwrap_or_else(|| DEFAULT_NAME.into());
        let weight = parse_number(&mut get, "TRACKER_USER_WEIGHT", DEFAULT_WEIGHT)?;
        let height = parse_number(&mut get, "TRACKER_USER_HEIGHT", DEFAULT_HEIGHT)?;
        let output = match get("TRACKER_OUTPUT").as_deref() {
            None | Some("text") => OutputMode::Text,
            Some("json") => OutputMode::Json,
            Some(other) => {
                return Err(TrackerError::Config(format!(
                    "TRACKER_OUTPUT must be text or json, got {other:?}"
                )));
            }
        };
        Ok(Self {
            profile: PersonalProfile::new(name, weight, height),
            output,
        })
    }
}

fn parse_number<F>(get: &mut F, key: &str, default: f64) -> Result<f64, TrackerError>
where
    F: FnMut(&str) -> Option<String>,
{
    match get(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| TrackerError::Config(format!("{key} is not a number: {raw:?}"))),
    }
}
