#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use zadachi::db::tasks::Tasks;
    use zadachi::libs::error::StoreError;
    use zadachi::libs::task::{NewTask, Priority, Status, TaskUpdate};

    struct StorageTestContext {
        temp_dir: TempDir,
        path: PathBuf,
    }

    impl TestContext for StorageTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let path = temp_dir.path().join("tasks.json");
            StorageTestContext { temp_dir, path }
        }
    }

    const SAMPLE_FILE: &str = r#"[
    {
        "id": 1,
        "title": "Задача 1",
        "description": "Описание 1",
        "category": "Категория 1",
        "due_date": "2024-12-31",
        "priority": "низкий",
        "status": "не выполнена"
    },
    {
        "id": 2,
        "title": "Задача 2",
        "description": "Описание 2",
        "category": "Категория 2",
        "due_date": "2024-11-30",
        "priority": "средний",
        "status": "выполнена"
    }
]"#;

    #[test_context(StorageTestContext)]
    #[test]
    fn test_missing_file_starts_empty(ctx: &mut StorageTestContext) {
        let tasks = Tasks::open(&ctx.path).unwrap();

        assert!(tasks.is_empty());
        assert!(matches!(tasks.recovered_from(), Some(StoreError::StorageMissing(_))));
        // Opening alone never creates the file.
        assert!(!ctx.path.exists());
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_load_reports_missing_file(ctx: &mut StorageTestContext) {
        let mut tasks = Tasks::empty(&ctx.path);
        let err = tasks.load().unwrap_err();
        assert!(matches!(err, StoreError::StorageMissing(_)));
        assert!(err.is_recoverable());
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_malformed_json_starts_empty(ctx: &mut StorageTestContext) {
        fs::write(&ctx.path, "[{\"id\": 1, \"title\": ").unwrap();

        let tasks = Tasks::open(&ctx.path).unwrap();
        assert!(tasks.is_empty());
        assert!(matches!(tasks.recovered_from(), Some(StoreError::StorageCorrupt { .. })));
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_invalid_records_are_corrupt(ctx: &mut StorageTestContext) {
        let cases = [
            SAMPLE_FILE.replace("низкий", "срочный"),
            SAMPLE_FILE.replace("2024-12-31", "2024-13-45"),
            SAMPLE_FILE.replace("\"id\": 2", "\"id\": 1"),
            SAMPLE_FILE.replace("\"id\": 2", "\"id\": 0"),
            SAMPLE_FILE.replace("\"Задача 1\"", "\"\""),
            String::new(),
        ];

        for content in cases {
            fs::write(&ctx.path, content).unwrap();
            let mut tasks = Tasks::empty(&ctx.path);
            assert!(matches!(tasks.load(), Err(StoreError::StorageCorrupt { .. })));
            assert!(tasks.is_empty());
        }
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_loads_existing_file_format(ctx: &mut StorageTestContext) {
        fs::write(&ctx.path, SAMPLE_FILE).unwrap();

        let tasks = Tasks::open(&ctx.path).unwrap();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks.all()[0].title, "Задача 1");
        assert_eq!(tasks.all()[0].priority, Priority::Low);
        assert_eq!(tasks.all()[1].status, Status::Completed);
        assert_eq!(tasks.next_id().unwrap(), 3);
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_english_aliases_are_accepted_on_load(ctx: &mut StorageTestContext) {
        let content = SAMPLE_FILE.replace("низкий", "low").replace("\"выполнена\"", "\"completed\"");
        fs::write(&ctx.path, content).unwrap();

        let tasks = Tasks::open(&ctx.path).unwrap();
        assert_eq!(tasks.all()[0].priority, Priority::Low);
        assert_eq!(tasks.all()[1].status, Status::Completed);
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_round_trip_preserves_collection(ctx: &mut StorageTestContext) {
        let mut tasks = Tasks::open(&ctx.path).unwrap();
        tasks.add(NewTask::new("Первая", "Описание", "Дом", "2025-03-01", "высокий").unwrap()).unwrap();
        tasks.add(NewTask::new("Second", "Description", "Work", "2025-02-28", "low").unwrap()).unwrap();
        tasks.add(NewTask::new("Третья", "Ещё одна", "Дом", "2024-02-29", "средний").unwrap()).unwrap();
        tasks.mark_completed(2).unwrap();

        let reopened = Tasks::open(&ctx.path).unwrap();
        assert_eq!(reopened.all(), tasks.all());
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_saved_file_layout(ctx: &mut StorageTestContext) {
        let mut tasks = Tasks::open(&ctx.path).unwrap();
        tasks.add(NewTask::new("Задача", "Описание", "Категория", "2025-01-01", "high").unwrap()).unwrap();

        let content = fs::read_to_string(&ctx.path).unwrap();
        assert!(content.contains("\"title\": \"Задача\""));
        assert!(content.contains("\"due_date\": \"2025-01-01\""));
        assert!(content.contains("\"priority\": \"высокий\""));
        assert!(content.contains("\"status\": \"не выполнена\""));
        assert!(content.contains("\n        \"id\": 1,"));

        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value.as_array().map(|a| a.len()), Some(1));
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_save_creates_parent_directory(ctx: &mut StorageTestContext) {
        let path = ctx.temp_dir.path().join("nested").join("dir").join("tasks.json");
        let mut tasks = Tasks::open(&path).unwrap();
        tasks.add(NewTask::new("Задача", "Описание", "Категория", "2025-01-01", "low").unwrap()).unwrap();

        assert!(path.exists());
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_write_failure_is_reported_and_rolled_back(ctx: &mut StorageTestContext) {
        // A directory in place of the file makes every write fail.
        fs::create_dir(&ctx.path).unwrap();
        let mut tasks = Tasks::empty(&ctx.path);

        let err = tasks
            .add(NewTask::new("Задача", "Описание", "Категория", "2025-01-01", "low").unwrap())
            .unwrap_err();

        assert!(matches!(err, StoreError::StorageWrite { .. }));
        assert!(!err.is_recoverable());
        assert!(tasks.is_empty());
        assert_eq!(tasks.next_id().unwrap(), 1);
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_failed_mutations_are_rolled_back(ctx: &mut StorageTestContext) {
        fs::write(&ctx.path, SAMPLE_FILE).unwrap();
        let mut tasks = Tasks::open(&ctx.path).unwrap();
        let before = tasks.all().to_vec();

        fs::remove_file(&ctx.path).unwrap();
        fs::create_dir(&ctx.path).unwrap();

        let rename = TaskUpdate::from_input("Новое название", "", "", "", "", "").unwrap();
        assert!(matches!(tasks.edit(1, &rename), Err(StoreError::StorageWrite { .. })));
        assert!(matches!(tasks.mark_completed(1), Err(StoreError::StorageWrite { .. })));
        assert!(matches!(tasks.delete(2), Err(StoreError::StorageWrite { .. })));
        assert!(matches!(
            tasks.delete_by_category("Категория 1"),
            Err(StoreError::StorageWrite { .. })
        ));

        assert_eq!(tasks.all(), before.as_slice());
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_failed_save_leaves_no_temporary_files(ctx: &mut StorageTestContext) {
        fs::create_dir(&ctx.path).unwrap();
        let mut tasks = Tasks::empty(&ctx.path);

        assert!(tasks
            .add(NewTask::new("Задача", "Описание", "Категория", "2025-01-01", "low").unwrap())
            .is_err());

        let entries: Vec<_> = fs::read_dir(ctx.temp_dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec![std::ffi::OsString::from("tasks.json")]);
        assert!(ctx.path.is_dir());
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_save_replaces_previous_file(ctx: &mut StorageTestContext) {
        fs::write(&ctx.path, SAMPLE_FILE).unwrap();
        let mut tasks = Tasks::open(&ctx.path).unwrap();

        tasks.delete(1).unwrap();

        let entries = fs::read_dir(ctx.temp_dir.path()).unwrap().count();
        assert_eq!(entries, 1);
        let reopened = Tasks::open(&ctx.path).unwrap();
        assert_eq!(reopened.all(), tasks.all());
        assert_eq!(reopened.len(), 1);
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_exhausted_ids_are_rejected(ctx: &mut StorageTestContext) {
        fs::write(&ctx.path, SAMPLE_FILE.replace("\"id\": 2", "\"id\": 4294967295")).unwrap();
        let mut tasks = Tasks::open(&ctx.path).unwrap();
        assert_eq!(tasks.len(), 2);
        assert!(matches!(tasks.next_id(), Err(StoreError::Validation { .. })));

        let err = tasks
            .add(NewTask::new("Задача", "Описание", "Категория", "2025-01-01", "low").unwrap())
            .unwrap_err();

        assert!(matches!(err, StoreError::Validation { field: "id", .. }));
        assert_eq!(tasks.len(), 2);
        let reopened = Tasks::open(&ctx.path).unwrap();
        assert!(reopened.recovered_from().is_none());
        assert_eq!(reopened.all(), tasks.all());
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_failed_reload_keeps_current_collection(ctx: &mut StorageTestContext) {
        fs::write(&ctx.path, SAMPLE_FILE).unwrap();
        let mut tasks = Tasks::open(&ctx.path).unwrap();

        fs::write(&ctx.path, "{ broken").unwrap();
        assert!(matches!(tasks.load(), Err(StoreError::StorageCorrupt { .. })));
        assert_eq!(tasks.len(), 2);

        fs::remove_file(&ctx.path).unwrap();
        assert!(matches!(tasks.load(), Err(StoreError::StorageMissing(_))));
        assert_eq!(tasks.len(), 2);
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_unreadable_path_is_a_hard_error(ctx: &mut StorageTestContext) {
        fs::create_dir(&ctx.path).unwrap();

        let err = Tasks::open(&ctx.path).unwrap_err();
        assert!(matches!(err, StoreError::StorageRead { .. }));
    }
}
