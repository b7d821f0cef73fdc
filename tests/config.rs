#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use zadachi::libs::config::{Config, StorageConfig, ViewConfig, TASKS_FILE_ENV};

    /// Gives each test its own directory for the config file.
    struct ConfigTestContext {
        temp_dir: TempDir,
        config_path: PathBuf,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let config_path = temp_dir.path().join("config.json");
            ConfigTestContext { temp_dir, config_path }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_default_config(_ctx: &mut ConfigTestContext) {
        let config = Config::default();
        assert!(config.storage.is_none());
        assert!(config.view.is_none());
        assert!(config.view().show_description);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_nonexistent_config(ctx: &mut ConfigTestContext) {
        let config = Config::read_from(&ctx.config_path).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_config(ctx: &mut ConfigTestContext) {
        let config = Config {
            storage: Some(StorageConfig {
                tasks_file: ctx.temp_dir.path().join("my_tasks.json"),
            }),
            view: Some(ViewConfig { show_description: false }),
        };
        config.save_to(&ctx.config_path).unwrap();

        let read_config = Config::read_from(&ctx.config_path).unwrap();
        assert_eq!(read_config, config);
        assert!(!read_config.view().show_description);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_empty_sections_are_not_written(ctx: &mut ConfigTestContext) {
        Config::default().save_to(&ctx.config_path).unwrap();

        let content = std::fs::read_to_string(&ctx.config_path).unwrap();
        assert_eq!(content.trim(), "{}");
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_invalid_config_is_an_error(ctx: &mut ConfigTestContext) {
        std::fs::write(&ctx.config_path, "{ not json").unwrap();
        assert!(Config::read_from(&ctx.config_path).is_err());
    }

    /// The only test touching process-wide environment variables.
    #[test_context(ConfigTestContext)]
    #[test]
    fn test_tasks_file_resolution_order(ctx: &mut ConfigTestContext) {
        std::env::set_var("HOME", ctx.temp_dir.path());
        std::env::set_var("LOCALAPPDATA", ctx.temp_dir.path());
        std::env::remove_var(TASKS_FILE_ENV);

        let cli_path = ctx.temp_dir.path().join("cli.json");
        let env_path = ctx.temp_dir.path().join("env.json");
        let config_path = ctx.temp_dir.path().join("configured.json");

        let mut config = Config::default();
        let fallback = config.tasks_file(None).unwrap();
        assert!(fallback.starts_with(ctx.temp_dir.path()));
        assert!(fallback.ends_with("tasks.json"));

        config.storage = Some(StorageConfig {
            tasks_file: config_path.clone(),
        });
        assert_eq!(config.tasks_file(None).unwrap(), config_path);

        std::env::set_var(TASKS_FILE_ENV, &env_path);
        assert_eq!(config.tasks_file(None).unwrap(), env_path);
        assert_eq!(config.tasks_file(Some(cli_path.clone())).unwrap(), cli_path);

        std::env::remove_var(TASKS_FILE_ENV);
    }
}
