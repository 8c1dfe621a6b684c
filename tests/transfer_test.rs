#[cfg(test)]
mod transfer_tests {
    use std::fs;
    use std::path::PathBuf;
    use std::sync::Arc;

    use chrono::NaiveDate;

    use duty_manager::application::commands::*;
    use duty_manager::domain::models::DutyKind;
    use duty_manager::infrastructure::store::{JsonFileStore, MemoryStore};
    use duty_manager::AppServices;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn setup_test_services() -> AppServices {
        AppServices::new(Arc::new(MemoryStore::new()))
    }

    /// テストごとに独立した作業ディレクトリを用意する
    fn setup_test_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join("duty_manager_tests").join(name);
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_export_duty_roster_resolves_names() {
        let services = setup_test_services();
        let dir = setup_test_dir("export_duty_roster");

        let path = export_duty_roster(&services, &dir).expect("Failed to export");
        assert!(path.exists());

        let raw = fs::read_to_string(&path).unwrap();
        let rows: Vec<serde_json::Value> = serde_json::from_str(&raw).unwrap();
        assert_eq!(rows.len(), 4);

        // 先頭行は 2025-01-18 の当番 (職員3と7の氏名が入る)
        assert_eq!(rows[0]["date"], "2025-01-18");
        assert_eq!(rows[0]["employees"], "高橋 健一, 山本 修");
        assert_eq!(rows[0]["type"], "weekend");
        assert_eq!(rows[0]["status"], "approved");
    }

    #[test]
    fn test_export_employees_then_import_counts_only() {
        let services = setup_test_services();
        let dir = setup_test_dir("import_employees");

        let path = export_employees(&services, &dir).unwrap();

        // 1名削除した上で取り込んでも、台帳は復元されない (取り込みは件数のみ)
        delete_employee(&services, 15).unwrap();
        assert_eq!(list_employees(&services).unwrap().len(), 14);

        let count = import_employees(&services, &path).unwrap();
        assert_eq!(count, 15);
        assert_eq!(list_employees(&services).unwrap().len(), 14);
    }

    #[test]
    fn test_settings_roundtrip_through_transfer() {
        let services = setup_test_services();
        let dir = setup_test_dir("settings_roundtrip");

        let mut settings = get_settings(&services).unwrap();
        settings.leave.annual_leave = 15;
        settings.organization.name = String::from("第二事業所");
        update_settings(&services, &settings).unwrap();

        let path = export_settings(&services, &dir).unwrap();

        // 別のストアに取り込んで同じ設定になること
        let other = setup_test_services();
        let imported = import_settings(&other, &path).unwrap();
        assert_eq!(imported, settings);
        assert_eq!(get_settings(&other).unwrap(), settings);
    }

    #[test]
    fn test_import_from_broken_file_fails() {
        let services = setup_test_services();
        let dir = setup_test_dir("broken_import");

        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("broken.json");
        fs::write(&path, "{ not json").unwrap();

        assert!(import_employees(&services, &path).is_err());
    }

    /// JSONファイルストア越しでも保存内容がプロセスをまたいで見えること
    /// (ストアを作り直して読み直すことで再起動を模す)
    #[test]
    fn test_json_file_store_persists_collections() {
        let dir = setup_test_dir("file_store");

        {
            let store = JsonFileStore::new(&dir).expect("Failed to create store");
            let services = AppServices::new(Arc::new(store));
            create_duty(&services, date(2025, 2, 1), vec![1, 2], DutyKind::Weekend).unwrap();
        }

        // 再オープン
        let store = JsonFileStore::new(&dir).unwrap();
        let services = AppServices::new(Arc::new(store));

        let entry = services
            .roster
            .find_by_date(date(2025, 2, 1))
            .unwrap()
            .expect("entry should survive reopen");
        assert_eq!(entry.employees, vec![1, 2]);

        // 保存ファイルの命名はキーと一致する
        assert!(dir.join("dutySchedules.json").exists());
    }
}
