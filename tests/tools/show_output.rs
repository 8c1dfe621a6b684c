use duty_manager::application::dto::{DashboardSummary, DutyCalendarCellDto};

#[allow(dead_code)]
pub fn show_duty_calendar_debug_data(cells: &[DutyCalendarCellDto]) {
    println!("\n=======================================================");
    println!("🗓️ [DEBUG] 当番カレンダー (計 {} マス)", cells.len());
    println!("=======================================================");

    for week in cells.chunks(7) {
        for cell in week {
            let marker = if !cell.is_current_month {
                " "
            } else if cell.is_weekend {
                "*"
            } else {
                "."
            };

            // 当番者のIDリストを文字列にする。未割り当てなら "(なし)"
            let duty_str = match &cell.duty {
                Some(duty) => format!(
                    "{:?} {:?}",
                    duty.employees, duty.status
                ),
                None => "(なし)".to_string(),
            };

            println!("   {} {} : {}", marker, cell.date, duty_str);
        }
        println!("   -------------------------------------------------");
    }
    println!("=======================================================\n");
}

#[allow(dead_code)]
pub fn show_dashboard_debug_data(summary: &DashboardSummary) {
    println!("\n=======================================================");
    println!("📋 [DEBUG] ダッシュボード集計");
    println!("=======================================================");
    println!("   職員数        : {}", summary.total_employees);
    println!("   出勤          : {}", summary.working_today);
    println!("   休暇          : {}", summary.on_leave_today);
    println!("   本日の勤務予定: {}", summary.today_schedules);
    for duty in &summary.upcoming_duties {
        println!("   ┣ 直近の当番: {} {:?}", duty.date, duty.employees);
    }
    println!("=======================================================\n");
}
