use crate::domain::models::{
    ApprovalStatus,
    ChangeRequest,
    DutyEntry,
    DutyStatus,
    EmployeeId,
    Leave,
};

impl DutyEntry {
    /// 当番を承認状態にする。
    /// すでに承認済みでも結果は変わらない(冪等)ため再入ガードは持たない
    pub fn approve(&mut self) {
        self.status = DutyStatus::Approved;
    }

    /// 当番者の入れ替えを適用する。
    ///
    /// 初回の変更時のみ、変更前の当番者リストをスナップショットとして
    /// `original_employees` に保存する。一度保存したスナップショットは
    /// 以後の入れ替えでも上書きしない。
    ///
    /// ```text
    ///  employees: [A, B], was_changed: false
    ///      | swap A -> C
    ///  employees: [C, B], was_changed: true, original: [A, B]
    ///      | swap B -> D
    ///  employees: [C, D], was_changed: true, original: [A, B]  <- 変わらない
    /// ```
    ///
    /// fromが当番者に含まれない場合も変更扱いになる
    pub fn apply_employee_swap(&mut self, from: EmployeeId, to: EmployeeId) {
        if !self.was_changed {
            self.original_employees = Some(self.employees.clone());
            self.was_changed = true;
        }
        for slot in self.employees.iter_mut() {
            if *slot == from {
                *slot = to;
            }
        }
    }
}

impl ChangeRequest {
    /// pending -> approved の遷移。承認者名を記録する。
    /// 終端状態(approved / rejected)からは遷移せずfalseを返す
    pub fn approve(&mut self, approved_by: &str) -> bool {
        if self.status != ApprovalStatus::Pending {
            return false;
        }
        self.status = ApprovalStatus::Approved;
        self.approved_by = Some(approved_by.to_string());
        true
    }

    /// pending -> rejected の遷移。他の副作用は無い
    pub fn reject(&mut self) -> bool {
        if self.status != ApprovalStatus::Pending {
            return false;
        }
        self.status = ApprovalStatus::Rejected;
        true
    }
}

impl Leave {
    /// 休暇申請の承認。変更申請と同じくpendingからのみ遷移できる
    pub fn approve(&mut self, approved_by: &str) -> bool {
        if self.status != ApprovalStatus::Pending {
            return false;
        }
        self.status = ApprovalStatus::Approved;
        self.approved_by = Some(approved_by.to_string());
        true
    }

    pub fn reject(&mut self) -> bool {
        if self.status != ApprovalStatus::Pending {
            return false;
        }
        self.status = ApprovalStatus::Rejected;
        true
    }
}

#[cfg(test)]
mod duty_logic_tests {
    use super::*;
    use crate::domain::models::DutyKind;
    use chrono::NaiveDate;

    fn entry(employees: Vec<EmployeeId>) -> DutyEntry {
        DutyEntry {
            id: 1,
            date: NaiveDate::from_ymd_opt(2025, 1, 18).unwrap(),
            employees,
            kind: DutyKind::Weekend,
            status: DutyStatus::Draft,
            was_changed: false,
            original_employees: None,
        }
    }

    /// スナップショットは初回の入れ替え時のみ保存されること
    #[test]
    fn test_swap_snapshot_is_taken_only_once() {
        let mut duty = entry(vec![1, 2]);

        // 1回目: A -> C
        duty.apply_employee_swap(1, 3);
        assert_eq!(duty.employees, vec![3, 2]);
        assert!(duty.was_changed);
        assert_eq!(duty.original_employees, Some(vec![1, 2]));

        // 2回目: B -> D。スナップショットは変わらない
        duty.apply_employee_swap(2, 4);
        assert_eq!(duty.employees, vec![3, 4]);
        assert_eq!(duty.original_employees, Some(vec![1, 2]));
    }

    /// fromが複数入っている場合は全て置き換わること
    #[test]
    fn test_swap_replaces_every_occurrence() {
        let mut duty = entry(vec![5, 5]);
        duty.apply_employee_swap(5, 9);
        assert_eq!(duty.employees, vec![9, 9]);
        assert_eq!(duty.original_employees, Some(vec![5, 5]));
    }

    #[test]
    fn test_approve_is_idempotent() {
        let mut duty = entry(vec![1, 2]);
        duty.approve();
        assert_eq!(duty.status, DutyStatus::Approved);
        duty.approve();
        assert_eq!(duty.status, DutyStatus::Approved);
    }

    /// 終端状態の申請は再遷移しないこと
    #[test]
    fn test_request_terminal_states() {
        let mut request = ChangeRequest {
            id: 1,
            from_employee: 1,
            to_employee: 3,
            date: NaiveDate::from_ymd_opt(2025, 1, 18).unwrap(),
            reason: String::from("私用のため"),
            status: ApprovalStatus::Pending,
            request_date: NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            approved_by: None,
        };

        assert!(request.approve("管理者"));
        assert_eq!(request.status, ApprovalStatus::Approved);
        assert_eq!(request.approved_by.as_deref(), Some("管理者"));

        // 承認済みの申請は却下できない
        assert!(!request.reject());
        assert_eq!(request.status, ApprovalStatus::Approved);

        // 再承認も何もしない
        assert!(!request.approve("別の管理者"));
        assert_eq!(request.approved_by.as_deref(), Some("管理者"));
    }
}
