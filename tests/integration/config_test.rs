use rigmon::core::awesome_miner::{FleetProfile, DEFAULT_PORT};
use rigmon::core::config::{Config, PC_NAME_ENV, PORT_ENV};
use rigmon::RigmonError;
use std::fs;
use std::sync::{Mutex, MutexGuard};
use tempfile::TempDir;

#[test]
fn test_config_default() {
    let config = Config::default();
    assert_eq!(config.awesome_miner.pc_name, "localhost");
    assert_eq!(config.awesome_miner.port, DEFAULT_PORT);
    assert!(config.fleets.is_empty());
}

#[test]
fn test_config_load_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
[awesome_miner]
pc_name = "gm-pc"

[[fleets]]
group = "Ferm"
expected_devices = 6
default_memory_clock = 3847

[[fleets]]
group = "Rx"
expected_devices = 12
default_memory_clock = 2000
"#,
    )
    .unwrap();

    let config = Config::load_from_file(&path).unwrap();
    assert_eq!(config.awesome_miner.pc_name, "gm-pc");
    assert_eq!(config.awesome_miner.port, 17790);
    assert_eq!(config.awesome_miner.timeout_secs, 10);

    let registry = config.fleet_registry();
    assert_eq!(registry.groups(), vec!["Pang", "Ferm", "Rx"]);
    assert_eq!(registry.lookup("Pang"), Some(&FleetProfile::pangolin()));
    assert_eq!(registry.lookup("Ferm").unwrap().default_memory_clock, 3847);
}

#[test]
fn test_config_roundtrip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nested").join("config.toml");

    let mut config = Config {
        fleets: vec![FleetProfile::pangolin()],
        ..Default::default()
    };
    config.awesome_miner.pc_name = "rig-host".to_string();
    config.save_to(&path).unwrap();

    let loaded = Config::load_from_file(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_config_invalid_toml() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, "[awesome_miner\nport = \"x\"").unwrap();

    assert!(matches!(
        Config::load_from_file(&path),
        Err(RigmonError::TomlDe(_))
    ));
}

#[test]
fn test_explicit_missing_config_is_error() {
    let temp_dir = TempDir::new().unwrap();
    let result = Config::load(Some(&temp_dir.path().join("missing.toml")));
    assert!(matches!(result, Err(RigmonError::Config(_))));
}

// Tests that touch the process environment hold this lock
static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Sets the given override variables and clears both on drop
struct EnvOverrides<'a> {
    _lock: MutexGuard<'a, ()>,
}

impl EnvOverrides<'_> {
    fn set(vars: &[(&str, &str)]) -> Self {
        let lock = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        std::env::remove_var(PC_NAME_ENV);
        std::env::remove_var(PORT_ENV);
        for (key, value) in vars {
            std::env::set_var(key, value);
        }
        EnvOverrides { _lock: lock }
    }
}

impl Drop for EnvOverrides<'_> {
    fn drop(&mut self) {
        std::env::remove_var(PC_NAME_ENV);
        std::env::remove_var(PORT_ENV);
    }
}

fn write_config(temp_dir: &TempDir) -> std::path::PathBuf {
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, "[awesome_miner]\npc_name = \"rig-pc\"\nport = 17000\n").unwrap();
    path
}

#[test]
fn test_env_overrides_file_values() {
    let _env = EnvOverrides::set(&[(PC_NAME_ENV, "farm-pc"), (PORT_ENV, " 18000 ")]);
    let temp_dir = TempDir::new().unwrap();
    let config = Config::load(Some(&write_config(&temp_dir))).unwrap();
    assert_eq!(config.awesome_miner.pc_name, "farm-pc");
    assert_eq!(config.awesome_miner.port, 18000);
}

#[test]
fn test_unset_env_keeps_file_values() {
    let _env = EnvOverrides::set(&[]);
    let temp_dir = TempDir::new().unwrap();
    let config = Config::load(Some(&write_config(&temp_dir))).unwrap();
    assert_eq!(config.awesome_miner.pc_name, "rig-pc");
    assert_eq!(config.awesome_miner.port, 17000);
}

#[test]
fn test_env_pc_name_alone_keeps_port() {
    let _env = EnvOverrides::set(&[(PC_NAME_ENV, "farm-pc")]);
    let mut config = Config::default();
    config.apply_env_overrides().unwrap();
    assert_eq!(config.awesome_miner.pc_name, "farm-pc");
    assert_eq!(config.awesome_miner.port, DEFAULT_PORT);
}

#[test]
fn test_invalid_env_port_is_config_error() {
    for port in ["not-a-port", "70000", "-1", ""] {
        let _env = EnvOverrides::set(&[(PORT_ENV, port)]);
        let mut config = Config::default();
        assert!(
            matches!(config.apply_env_overrides(), Err(RigmonError::Config(_))),
            "port {:?} should be rejected",
            port
        );

        let temp_dir = TempDir::new().unwrap();
        assert!(matches!(
            Config::load(Some(&write_config(&temp_dir))),
            Err(RigmonError::Config(_))
        ));
    }
}
