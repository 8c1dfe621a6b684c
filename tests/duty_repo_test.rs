#[cfg(test)]
mod duty_repo_tests {
    use std::sync::Arc;

    use chrono::NaiveDate;

    use duty_manager::domain::models::{DutyKind, DutyStatus};
    use duty_manager::infrastructure::duty_repo::{DutyRosterRepository, NewDuty};
    use duty_manager::infrastructure::store::{MemoryStore, RepoError};

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    // 1. テスト用リポジトリのセットアップ (空のストア = 初期データが見える)
    fn setup_test_repo() -> DutyRosterRepository {
        DutyRosterRepository::new(Arc::new(MemoryStore::new()))
    }

    #[test]
    fn test_seeded_roster_is_visible() {
        let repo = setup_test_repo();

        let roster = repo.list().expect("Failed to list roster");

        // 初期データは2025年1月の週末4件 (日付昇順)
        assert_eq!(roster.len(), 4);
        assert_eq!(roster[0].date, date(2025, 1, 18));
        assert_eq!(roster[3].date, date(2025, 1, 26));
        assert!(roster.iter().all(|d| d.status == DutyStatus::Approved));
    }

    #[test]
    fn test_create_and_find_by_date() {
        let repo = setup_test_repo();

        let created = repo
            .create(NewDuty {
                date: date(2025, 2, 1),
                employees: vec![1, 2],
                kind: DutyKind::Weekend,
            })
            .expect("Failed to create");

        // 初期データの採番が5から続くこと
        assert_eq!(created.id, 5);
        assert_eq!(created.status, DutyStatus::Draft);
        assert!(!created.was_changed);

        let fetched = repo
            .find_by_date(date(2025, 2, 1))
            .expect("Failed to find")
            .expect("entry should exist");
        assert_eq!(fetched, created);
    }

    /// 承認は冪等であること (2回実行しても結果が変わらない)
    #[test]
    fn test_approve_is_idempotent() {
        let repo = setup_test_repo();

        let created = repo
            .create(NewDuty {
                date: date(2025, 2, 1),
                employees: vec![1, 2],
                kind: DutyKind::Weekend,
            })
            .unwrap();

        repo.approve(created.id).expect("Failed to approve");
        repo.approve(created.id).expect("Failed to approve twice");

        let fetched = repo.find(created.id).unwrap().unwrap();
        assert_eq!(fetched.status, DutyStatus::Approved);
    }

    /// スナップショットは初回の入れ替え時のみ記録されること
    #[test]
    fn test_swap_records_snapshot_only_once() {
        let repo = setup_test_repo();

        // 1回目: 2025-01-18 [3, 7] の 3 を 15 に
        repo.apply_employee_swap(date(2025, 1, 18), 3, 15)
            .expect("Failed to swap");

        let entry = repo.find_by_date(date(2025, 1, 18)).unwrap().unwrap();
        assert_eq!(entry.employees, vec![15, 7]);
        assert!(entry.was_changed);
        assert_eq!(entry.original_employees, Some(vec![3, 7]));

        // 2回目: 7 を 9 に。スナップショットは初回のまま
        repo.apply_employee_swap(date(2025, 1, 18), 7, 9)
            .expect("Failed to swap twice");

        let entry = repo.find_by_date(date(2025, 1, 18)).unwrap().unwrap();
        assert_eq!(entry.employees, vec![15, 9]);
        assert_eq!(entry.original_employees, Some(vec![3, 7]));
    }

    /// 該当日の当番が無い場合は NotFound になり、何も変更されないこと
    #[test]
    fn test_swap_missing_date_returns_not_found() {
        let repo = setup_test_repo();

        let result = repo.apply_employee_swap(date(2025, 3, 1), 1, 2);
        assert!(matches!(result, Err(RepoError::NotFound(_))));

        // 既存の当番は無傷
        let roster = repo.list().unwrap();
        assert_eq!(roster.len(), 4);
        assert!(roster.iter().all(|d| !d.was_changed));
    }

    /// 1日付1件の前提で、作成が既存の当番を書き換えないこと
    #[test]
    fn test_create_never_touches_existing_entries() {
        let repo = setup_test_repo();
        let before = repo.list().unwrap();

        repo.create(NewDuty {
            date: date(2025, 2, 8),
            employees: vec![5, 6],
            kind: DutyKind::Special,
        })
        .unwrap();

        let after = repo.list().unwrap();
        assert_eq!(after.len(), before.len() + 1);
        for entry in &before {
            assert!(after.contains(entry));
        }
    }
}
