//! Simulator configuration from the environment.
use std::env;
use std::path::PathBuf;

/// Settings shared by every subcommand.
///
/// Command-line flags override whatever the environment provides.
#[derive(Clone, Debug)]
pub struct SimConfig {
    /// Directory holding `config.toml`, `archetypes.ron`, `stages.ron` and
    /// `roster.ron`. Bundled content is used when unset.
    pub data_dir: Option<PathBuf>,
    /// Battle seed; drawn from OS entropy when unset.
    pub seed: Option<u64>,
    /// Turns after which an undecided battle is conceded.
    pub max_turns: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            seed: None,
            max_turns: Self::DEFAULT_MAX_TURNS,
        }
    }
}

impl SimConfig {
    pub const DEFAULT_MAX_TURNS: u64 = 500;

    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `SQUAD_DATA_DIR` - Content directory (default: bundled content)
    /// - `SQUAD_SEED` - Battle seed (default: random)
    /// - `SQUAD_MAX_TURNS` - Turn limit per battle (default: 500)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(dir) = env::var_os("SQUAD_DATA_DIR").filter(|dir| !dir.is_empty()) {
            config.data_dir = Some(PathBuf::from(dir));
        }
        if let Some(seed) = read_env::<u64>("SQUAD_SEED") {
            config.seed = Some(seed);
        }
        if let Some(turns) = read_env::<u64>("SQUAD_MAX_TURNS") {
            config.max_turns = turns.max(1);
        }

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
