//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.typewriter/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use clap::ValueEnum;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use simplelog::LevelFilter;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::Output;
use crate::core::delay::Delay;
use crate::core::options::{DEFAULT_PAUSE_MS, SequenceOptions};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TypewriterConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub timing: TimingConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub output: Option<String>,
    pub words: Option<Vec<String>>,
    pub log_file: Option<String>,
    pub log_level: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TimingConfig {
    pub typing_delay: Option<Delay>,
    pub deleting_delay: Option<Delay>,
    pub pause_ms: Option<i64>,
    #[serde(rename = "loop")]
    pub looping: Option<bool>,
    pub seed: Option<u64>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_FILE: &str = "typewriter.log";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;

pub const DEFAULT_WORDS: &[&str] = &[
    "Hello, world.",
    "One character at a time.",
    "Then all of it, gone again.",
];

// ============================================================================
// CLI overrides (None = flag not given)
// ============================================================================

#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub output: Option<Output>,
    pub typing_delay: Option<Delay>,
    pub deleting_delay: Option<Delay>,
    pub pause_ms: Option<i64>,
    pub no_loop: bool,
    pub seed: Option<u64>,
    pub words: Vec<String>,
}

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub output: Output,
    pub words: Vec<String>,
    pub sequence: SequenceOptions,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Where the loaded config came from. Loading runs before the logger exists,
/// so the outcome is carried back and logged by [`ConfigSource::log`].
#[derive(Debug)]
pub enum ConfigSource {
    File(PathBuf),
    Generated(PathBuf),
    GenerateFailed(PathBuf, std::io::Error),
    NoHomeDir,
}

impl ConfigSource {
    pub fn log(&self) {
        match self {
            ConfigSource::File(path) => info!("Loaded config from {}", path.display()),
            ConfigSource::Generated(path) => {
                info!("No config file found, generated default at {}", path.display())
            }
            ConfigSource::GenerateFailed(path, e) => {
                warn!("Failed to write default config to {}: {}", path.display(), e)
            }
            ConfigSource::NoHomeDir => {
                warn!("Could not determine home directory, using default config")
            }
        }
    }
}

/// Returns the path to `~/.typewriter/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".typewriter").join("config.toml"))
}

/// Load config from `~/.typewriter/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `TypewriterConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<(TypewriterConfig, ConfigSource), ConfigError> {
    let Some(path) = config_path() else {
        return Ok((TypewriterConfig::default(), ConfigSource::NoHomeDir));
    };

    if !path.exists() {
        let source = match generate_default_config(&path) {
            Ok(()) => ConfigSource::Generated(path),
            Err(e) => ConfigSource::GenerateFailed(path, e),
        };
        return Ok((TypewriterConfig::default(), source));
    }

    let config = load_config_from(&path)?;
    Ok((config, ConfigSource::File(path)))
}

/// Load and parse a config file at an explicit path.
pub fn load_config_from(path: &Path) -> Result<TypewriterConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    toml::from_str(&contents).map_err(ConfigError::Parse)
}

const DEFAULT_CONFIG_CONTENT: &str = r#"# Typewriter Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# output = "tui"                     # "tui" or "plain"
# words = ["Hello, world.", "One character at a time."]
# log_file = "typewriter.log"
# log_level = "debug"                # "off", "error", "warn", "info", "debug", "trace"

# [timing]
# typing_delay = [70, 100]           # milliseconds: fixed (80) or [min, max]
# deleting_delay = [70, 100]         # or TYPEWRITER_DELETING_DELAY="40..60"
# pause_ms = 1700                    # dwell between words in a sequence
# loop = true                        # wrap back to the first word
# seed = 42                          # fixed seed for reproducible timing
"#;

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, DEFAULT_CONFIG_CONTENT)
}

// ============================================================================
// Logging settings (file config only, needed before anything else logs)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct LogSettings {
    pub file: PathBuf,
    pub level: LevelFilter,
}

/// Log destination and level from the config file alone, so the logger can
/// be installed before env and CLI resolution start warning.
pub fn log_settings(config: &TypewriterConfig) -> LogSettings {
    let level = config
        .general
        .log_level
        .as_deref()
        .and_then(|s| s.parse::<LevelFilter>().ok())
        .unwrap_or(DEFAULT_LOG_LEVEL);
    let file = config
        .general
        .log_file
        .as_deref()
        .unwrap_or(DEFAULT_LOG_FILE);
    LogSettings {
        file: PathBuf::from(file),
        level,
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Reads an env var and parses it, logging and ignoring values that don't parse.
fn env_parsed<T>(name: &str) -> Option<T>
where
    T: std::str::FromStr,
    T::Err: fmt::Display,
{
    let raw = std::env::var(name).ok()?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Ignoring {name}={raw:?}: {e}");
            None
        }
    }
}

fn parse_output(raw: &str) -> Option<Output> {
    match Output::from_str(raw, true) {
        Ok(output) => Some(output),
        Err(e) => {
            warn!("Unknown output {raw:?}: {e}");
            None
        }
    }
}

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &TypewriterConfig, cli: &Overrides) -> ResolvedConfig {
    // Output: CLI → env → config → default
    let output = cli
        .output
        .clone()
        .or_else(|| {
            std::env::var("TYPEWRITER_OUTPUT")
                .ok()
                .and_then(|s| parse_output(&s))
        })
        .or_else(|| config.general.output.as_deref().and_then(parse_output))
        .unwrap_or_default();

    // Words: CLI → config → default
    let words = if !cli.words.is_empty() {
        cli.words.clone()
    } else {
        config
            .general
            .words
            .clone()
            .unwrap_or_else(|| DEFAULT_WORDS.iter().map(|w| w.to_string()).collect())
    };

    let typing_delay = cli
        .typing_delay
        .or_else(|| env_parsed("TYPEWRITER_TYPING_DELAY"))
        .or(config.timing.typing_delay)
        .unwrap_or_default();

    let deleting_delay = cli
        .deleting_delay
        .or_else(|| env_parsed("TYPEWRITER_DELETING_DELAY"))
        .or(config.timing.deleting_delay)
        .unwrap_or_default();

    let pause_ms = cli
        .pause_ms
        .or_else(|| env_parsed("TYPEWRITER_PAUSE_MS"))
        .or(config.timing.pause_ms)
        .unwrap_or(DEFAULT_PAUSE_MS as i64);

    // --no-loop can only turn looping off
    let looping = !cli.no_loop
        && env_parsed("TYPEWRITER_LOOP")
            .or(config.timing.looping)
            .unwrap_or(true);

    let seed = cli.seed.or(config.timing.seed);

    if let Some(raw) = config.general.log_level.as_deref() {
        if raw.parse::<LevelFilter>().is_err() {
            warn!("Unknown log level {raw:?}, using {DEFAULT_LOG_LEVEL}");
        }
    }

    let sequence = SequenceOptions {
        typing_delay,
        deleting_delay,
        looping,
        seed,
        ..SequenceOptions::default()
    }
    .with_pause_ms(pause_ms);

    ResolvedConfig {
        output,
        words,
        sequence,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Mutex, MutexGuard, PoisonError};
    use std::time::Duration;

    const ENV_VARS: &[&str] = &[
        "TYPEWRITER_OUTPUT",
        "TYPEWRITER_TYPING_DELAY",
        "TYPEWRITER_DELETING_DELAY",
        "TYPEWRITER_PAUSE_MS",
        "TYPEWRITER_LOOP",
    ];

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    /// Holds the env lock; the env layer is empty on entry and on drop.
    struct EnvGuard {
        _lock: MutexGuard<'static, ()>,
    }

    impl EnvGuard {
        fn set(&self, name: &str, value: &str) {
            // SAFETY: env access in this module only happens under ENV_LOCK.
            unsafe { std::env::set_var(name, value) };
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            clear_env_vars();
        }
    }

    fn clear_env_vars() {
        for name in ENV_VARS {
            // SAFETY: only called while ENV_LOCK is held.
            unsafe { std::env::remove_var(name) };
        }
    }

    /// Serializes every test that calls `resolve`.
    fn clean_env() -> EnvGuard {
        let lock = ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
        clear_env_vars();
        EnvGuard { _lock: lock }
    }

    #[test]
    fn test_default_config_parses() {
        let config = TypewriterConfig::default();
        assert!(config.general.words.is_none());
        assert!(config.timing.typing_delay.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let _env = clean_env();
        let config = TypewriterConfig::default();
        let resolved = resolve(&config, &Overrides::default());
        assert_eq!(resolved.words.len(), DEFAULT_WORDS.len());
        assert_eq!(resolved.sequence.pause, Duration::from_millis(DEFAULT_PAUSE_MS));
        let log = log_settings(&config);
        assert_eq!(log.file, PathBuf::from(DEFAULT_LOG_FILE));
        assert_eq!(log.level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let _env = clean_env();
        let config = TypewriterConfig {
            general: GeneralConfig {
                output: Some("plain".to_string()),
                words: Some(vec!["x".to_string(), "y".to_string()]),
                log_file: Some("other.log".to_string()),
                log_level: Some("warn".to_string()),
            },
            timing: TimingConfig {
                typing_delay: Some(Delay::fixed(10)),
                deleting_delay: Some(Delay::range(1, 2)),
                pause_ms: Some(-40),
                looping: Some(false),
                seed: Some(3),
            },
        };
        let resolved = resolve(&config, &Overrides::default());
        assert!(matches!(resolved.output, Output::Plain));
        assert_eq!(resolved.words, vec!["x", "y"]);
        assert_eq!(resolved.sequence.typing_delay, Delay::Fixed(10));
        assert_eq!(resolved.sequence.deleting_delay, Delay::range(1, 2));
        assert_eq!(resolved.sequence.pause, Duration::ZERO);
        assert!(!resolved.sequence.looping);
        assert_eq!(resolved.sequence.seed, Some(3));
        let log = log_settings(&config);
        assert_eq!(log.file, PathBuf::from("other.log"));
        assert_eq!(log.level, LevelFilter::Warn);
    }

    #[test]
    fn test_resolve_cli_wins() {
        let _env = clean_env();
        let config = TypewriterConfig {
            general: GeneralConfig {
                words: Some(vec!["from-config".to_string()]),
                ..Default::default()
            },
            timing: TimingConfig {
                typing_delay: Some(Delay::fixed(500)),
                seed: Some(1),
                ..Default::default()
            },
        };
        let cli = Overrides {
            typing_delay: Some(Delay::fixed(5)),
            no_loop: true,
            seed: Some(2),
            words: vec!["from-cli".to_string()],
            ..Default::default()
        };
        let resolved = resolve(&config, &cli);
        assert_eq!(resolved.words, vec!["from-cli"]);
        assert_eq!(resolved.sequence.typing_delay, Delay::Fixed(5));
        assert!(!resolved.sequence.looping);
        assert_eq!(resolved.sequence.seed, Some(2));
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[general]
output = "plain"
words = ["alpha", "beta"]
log_level = "info"

[timing]
typing_delay = [40, 60]
deleting_delay = 25
pause_ms = 900
loop = false
seed = 11
"#;
        let config: TypewriterConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.output.as_deref(), Some("plain"));
        assert_eq!(
            config.general.words,
            Some(vec!["alpha".to_string(), "beta".to_string()])
        );
        assert_eq!(config.timing.typing_delay, Some(Delay::range(40, 60)));
        assert_eq!(config.timing.deleting_delay, Some(Delay::Fixed(25)));
        assert_eq!(config.timing.pause_ms, Some(900));
        assert_eq!(config.timing.looping, Some(false));
        assert_eq!(config.timing.seed, Some(11));
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing — everything else stays default
        let toml_str = r#"
[timing]
pause_ms = 250
"#;
        let config: TypewriterConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.timing.pause_ms, Some(250));
        assert!(config.timing.typing_delay.is_none());
        assert!(config.general.words.is_none());
    }

    #[test]
    fn test_generated_default_is_valid_toml() {
        // Every line is commented out, so it parses to the defaults.
        let config: TypewriterConfig = toml::from_str(DEFAULT_CONFIG_CONTENT).unwrap();
        assert!(config.general.output.is_none());
        assert!(config.timing.looping.is_none());
    }

    #[test]
    fn test_unknown_log_level_falls_back() {
        let _env = clean_env();
        let config = TypewriterConfig {
            general: GeneralConfig {
                log_level: Some("chatty".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        // resolve() warns about it, but still produces a config.
        let resolved = resolve(&config, &Overrides::default());
        assert_eq!(resolved.output, Output::Tui);
        assert_eq!(log_settings(&config).level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn test_log_settings_come_from_file() {
        let config = TypewriterConfig {
            general: GeneralConfig {
                log_file: Some("from-file.log".to_string()),
                log_level: Some("trace".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let settings = log_settings(&config);
        assert_eq!(settings.file, PathBuf::from("from-file.log"));
        assert_eq!(settings.level, LevelFilter::Trace);
    }

    fn file_layer() -> TypewriterConfig {
        TypewriterConfig {
            general: GeneralConfig {
                output: Some("tui".to_string()),
                ..Default::default()
            },
            timing: TimingConfig {
                typing_delay: Some(Delay::fixed(500)),
                deleting_delay: Some(Delay::fixed(400)),
                pause_ms: Some(900),
                looping: Some(true),
                seed: None,
            },
        }
    }

    #[test]
    fn test_env_layer_sits_between_file_and_cli() {
        let env = clean_env();
        let config = file_layer();

        env.set("TYPEWRITER_OUTPUT", "plain");
        env.set("TYPEWRITER_TYPING_DELAY", "20");
        env.set("TYPEWRITER_DELETING_DELAY", "30..40");
        env.set("TYPEWRITER_PAUSE_MS", "300");
        env.set("TYPEWRITER_LOOP", "false");

        // Env beats the file.
        let resolved = resolve(&config, &Overrides::default());
        assert_eq!(resolved.output, Output::Plain);
        assert_eq!(resolved.sequence.typing_delay, Delay::Fixed(20));
        assert_eq!(resolved.sequence.deleting_delay, Delay::range(30, 40));
        assert_eq!(resolved.sequence.pause, Duration::from_millis(300));
        assert!(!resolved.sequence.looping);

        // CLI beats env.
        let cli = Overrides {
            output: Some(Output::Tui),
            typing_delay: Some(Delay::fixed(5)),
            deleting_delay: Some(Delay::fixed(6)),
            pause_ms: Some(10),
            ..Default::default()
        };
        let resolved = resolve(&config, &cli);
        assert_eq!(resolved.output, Output::Tui);
        assert_eq!(resolved.sequence.typing_delay, Delay::Fixed(5));
        assert_eq!(resolved.sequence.deleting_delay, Delay::Fixed(6));
        assert_eq!(resolved.sequence.pause, Duration::from_millis(10));
    }

    #[test]
    fn test_env_loop_and_no_loop() {
        let env = clean_env();
        let mut config = file_layer();
        config.timing.looping = Some(false);

        env.set("TYPEWRITER_LOOP", "true");
        let resolved = resolve(&config, &Overrides::default());
        assert!(resolved.sequence.looping, "env turns looping back on");

        // --no-loop always wins.
        let cli = Overrides {
            no_loop: true,
            ..Default::default()
        };
        assert!(!resolve(&config, &cli).sequence.looping);
    }

    #[test]
    fn test_unparseable_env_values_fall_back_to_file() {
        let env = clean_env();
        let config = file_layer();

        env.set("TYPEWRITER_OUTPUT", "hologram");
        env.set("TYPEWRITER_TYPING_DELAY", "fast");
        env.set("TYPEWRITER_DELETING_DELAY", "10..");
        env.set("TYPEWRITER_PAUSE_MS", "soon");
        env.set("TYPEWRITER_LOOP", "sometimes");

        let resolved = resolve(&config, &Overrides::default());
        assert_eq!(resolved.output, Output::Tui);
        assert_eq!(resolved.sequence.typing_delay, Delay::Fixed(500));
        assert_eq!(resolved.sequence.deleting_delay, Delay::Fixed(400));
        assert_eq!(resolved.sequence.pause, Duration::from_millis(900));
        assert!(resolved.sequence.looping);
    }

    #[test]
    fn test_generated_default_loads_back() {
        let dir = std::env::temp_dir().join(format!(
            "typewriter-config-gen-{}",
            std::process::id()
        ));
        let path = dir.join("config.toml");
        generate_default_config(&path).unwrap();
        let result = load_config_from(&path);
        let _ = fs::remove_dir_all(&dir);

        let config = result.unwrap();
        assert!(config.timing.typing_delay.is_none());
        assert!(config.general.words.is_none());
    }

    #[test]
    fn test_load_config_from_reports_parse_errors() {
        let path = std::env::temp_dir().join(format!(
            "typewriter-config-test-{}.toml",
            std::process::id()
        ));
        fs::write(&path, "[timing]\npause_ms = \"soon\"\n").unwrap();
        let result = load_config_from(&path);
        let _ = fs::remove_file(&path);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
