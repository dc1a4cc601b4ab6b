use std::env;

/// Runtime environment mode, read from `APP_ENV`.
///
/// Anything other than `production`/`prod` counts as development; the mode
/// only controls whether error detail is echoed to clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    pub fn from_env() -> Self {
        match env::var("APP_ENV") {
            Ok(v) if v.eq_ignore_ascii_case("production") || v.eq_ignore_ascii_case("prod") => {
                AppEnv::Production
            }
            _ => AppEnv::Development,
        }
    }

    pub fn is_development(self) -> bool {
        self == AppEnv::Development
    }
}

#[cfg(test)]
mod tests {
    use std::env;

    use serial_test::serial;

    use super::AppEnv;

    #[test]
    #[serial]
    fn test_defaults_to_development() {
        env::remove_var("APP_ENV");
        assert_eq!(AppEnv::from_env(), AppEnv::Development);
        assert!(AppEnv::from_env().is_development());
    }

    #[test]
    #[serial]
    fn test_production_variants() {
        for value in ["production", "Production", "prod", "PROD"] {
            env::set_var("APP_ENV", value);
            assert_eq!(AppEnv::from_env(), AppEnv::Production);
        }
        env::remove_var("APP_ENV");
    }

    #[test]
    #[serial]
    fn test_unknown_value_is_development() {
        env::set_var("APP_ENV", "staging");
        assert_eq!(AppEnv::from_env(), AppEnv::Development);
        env::remove_var("APP_ENV");
    }
}
