#[cfg(test)]
mod leave_repo_tests {
    use std::sync::Arc;

    use chrono::NaiveDate;

    use duty_manager::domain::models::{ApprovalStatus, LeaveKind};
    use duty_manager::infrastructure::leave_repo::{LeaveRepository, NewLeave};
    use duty_manager::infrastructure::store::MemoryStore;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn setup_test_repo() -> LeaveRepository {
        LeaveRepository::new(Arc::new(MemoryStore::new()))
    }

    fn new_leave(employee_id: i64, kind: LeaveKind, days: i64) -> NewLeave {
        NewLeave {
            employee_id,
            kind,
            start_date: date(2025, 2, 3),
            end_date: date(2025, 2, 3 + days as u32 - 1),
            days,
            reason: String::from("私用のため"),
        }
    }

    #[test]
    fn test_submit_starts_pending() {
        let repo = setup_test_repo();

        let leave = repo
            .submit(new_leave(9, LeaveKind::Personal, 3))
            .expect("Failed to submit");

        assert_eq!(leave.status, ApprovalStatus::Pending);
        assert_eq!(leave.days, 3);
        assert!(leave.approved_by.is_none());
    }

    #[test]
    fn test_approve_stamps_approver() {
        let repo = setup_test_repo();
        let leave = repo.submit(new_leave(9, LeaveKind::Vacation, 1)).unwrap();

        repo.approve(leave.id, "管理者").expect("Failed to approve");

        let fetched = repo.find(leave.id).unwrap().unwrap();
        assert_eq!(fetched.status, ApprovalStatus::Approved);
        assert_eq!(fetched.approved_by.as_deref(), Some("管理者"));
    }

    /// 終端状態からの遷移は何もしないこと
    #[test]
    fn test_terminal_transitions_are_noops() {
        let repo = setup_test_repo();
        let leave = repo.submit(new_leave(9, LeaveKind::Sick, 1)).unwrap();

        repo.reject(leave.id).unwrap();

        // 却下済みの申請は承認できない
        repo.approve(leave.id, "管理者").unwrap();
        let fetched = repo.find(leave.id).unwrap().unwrap();
        assert_eq!(fetched.status, ApprovalStatus::Rejected);
        assert!(fetched.approved_by.is_none());
    }

    /// 承認済み年休のみが消化日数に数えられること
    #[test]
    fn test_used_vacation_days_counts_only_approved_vacation() {
        let repo = setup_test_repo();

        // 初期データ: 職員4は承認済み年休1日
        assert_eq!(repo.used_vacation_days(4).unwrap(), 1);

        // pendingの年休は数えない
        let pending = repo.submit(new_leave(4, LeaveKind::Vacation, 2)).unwrap();
        assert_eq!(repo.used_vacation_days(4).unwrap(), 1);

        // 承認すると加算される
        repo.approve(pending.id, "管理者").unwrap();
        assert_eq!(repo.used_vacation_days(4).unwrap(), 3);

        // 病欠は年休の消化にならない
        let sick = repo.submit(new_leave(4, LeaveKind::Sick, 5)).unwrap();
        repo.approve(sick.id, "管理者").unwrap();
        assert_eq!(repo.used_vacation_days(4).unwrap(), 3);
    }

    /// 期間に指定日を含む承認済み休暇だけが返ること
    #[test]
    fn test_approved_on_checks_range_and_status() {
        let repo = setup_test_repo();

        let leave = repo
            .submit(NewLeave {
                employee_id: 9,
                kind: LeaveKind::Personal,
                start_date: date(2025, 2, 3),
                end_date: date(2025, 2, 5),
                days: 3,
                reason: String::from("私用のため"),
            })
            .unwrap();

        // pendingの間は対象外
        assert!(repo.approved_on(date(2025, 2, 4)).unwrap().is_empty());

        repo.approve(leave.id, "管理者").unwrap();
        assert_eq!(repo.approved_on(date(2025, 2, 3)).unwrap().len(), 1);
        assert_eq!(repo.approved_on(date(2025, 2, 5)).unwrap().len(), 1);
        assert!(repo.approved_on(date(2025, 2, 6)).unwrap().is_empty());
    }
}
