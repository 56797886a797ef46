use std::collections::HashMap;

use super::*;

fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| vars.get(key).cloned()
}

#[test]
fn defaults_bind_locally_with_sample_data() {
    let settings = Settings::default();
    assert_eq!(settings.server_bind, "127.0.0.1:8080");
    assert!(settings.seed_sample_data);
}

#[test]
fn file_settings_override_defaults() {
    let mut settings = Settings::default();
    apply_file_settings(
        &mut settings,
        "bind_addr = \"0.0.0.0:9000\"\nseed_sample_data = false\n",
    );
    assert_eq!(settings.server_bind, "0.0.0.0:9000");
    assert!(!settings.seed_sample_data);
}

#[test]
fn malformed_file_is_ignored() {
    let mut settings = Settings::default();
    apply_file_settings(&mut settings, "bind_addr = [not toml");
    assert_eq!(settings, Settings::default());
}

#[test]
fn app_prefixed_env_wins_over_plain_env() {
    let mut settings = Settings::default();
    apply_env_overrides(
        &mut settings,
        env(&[
            ("SERVER_BIND", "127.0.0.1:1111"),
            ("APP__BIND_ADDR", "127.0.0.1:2222"),
        ]),
    );
    assert_eq!(settings.server_bind, "127.0.0.1:2222");
}

#[test]
fn seed_flag_env_accepts_common_spellings() {
    let mut settings = Settings::default();
    apply_env_overrides(&mut settings, env(&[("APP__SEED_SAMPLE_DATA", "off")]));
    assert!(!settings.seed_sample_data);

    apply_env_overrides(&mut settings, env(&[("APP__SEED_SAMPLE_DATA", "maybe")]));
    assert!(!settings.seed_sample_data);

    apply_env_overrides(&mut settings, env(&[("APP__SEED_SAMPLE_DATA", "YES")]));
    assert!(settings.seed_sample_data);
}
