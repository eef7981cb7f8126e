use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Languages the string catalog ships with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    En,
    Vi,
}

impl Lang {
    pub fn code(&self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Vi => "vi",
        }
    }

    /// Parse a language code. Returns `None` for anything we don't ship.
    pub fn from_code(code: &str) -> Option<Lang> {
        match code {
            "en" => Some(Lang::En),
            "vi" => Some(Lang::Vi),
            _ => None,
        }
    }
}

impl std::fmt::Display for Lang {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// The static string tree for one language.
///
/// Keys are dotted namespaces walked by [`super::lookup_in`]. The two trees
/// are maintained by hand and are not validated against each other: a key
/// missing from one language falls back to the caller-supplied default, not
/// to the other language's text.
pub fn tree(lang: Lang) -> &'static Value {
    match lang {
        Lang::En => &EN,
        Lang::Vi => &VI,
    }
}

static EN: Lazy<Value> = Lazy::new(|| {
    json!({
        "ui": {
            "navbar": {
                "home": "Home",
                "attendance": "Attendance",
                "history": "Attendance history",
                "profile": "Profile",
                "logout": "Log out"
            }
        },
        "attendance": {
            "title": "Timekeeping",
            "actions": {
                "check_in": "Check in",
                "check_out": "Check out",
                "filter": "View history"
            },
            "status_text": {
                "not_checked_in": "Not checked in today",
                "checked_in": "Checked in - ready to check out",
                "checked_out": "All done for today"
            },
            "info": {
                "check_in": "Check-in time",
                "check_out": "Check-out time"
            },
            "summary": {
                "total_days": "Total days",
                "total_hours": "Total hours",
                "present_days": "Days present",
                "absent_days": "Days absent"
            },
            "day_status": {
                "present": "Present",
                "absent": "Absent",
                "late": "Late",
                "half_day": "Half day"
            },
            "history": {
                "title": "Attendance history",
                "empty": "No attendance data for this period"
            },
            "errors": {
                "status": "Unable to load attendance status",
                "check_in": "Error while checking in",
                "check_out": "Error while checking out",
                "history": "Unable to load attendance history",
                "missing_range": "Please select a date range"
            }
        },
        "onboarding": {
            "complete_profile": {
                "title": "Welcome, {name}!",
                "subtitle": "We just need a few details to complete your profile",
                "continue": "Continue",
                "next_step": "Next step: Your organization"
            },
            "organization_setup": {
                "title": "Set up your organization",
                "subtitle": "Tell us about your organization",
                "back": "Back",
                "continue": "Continue"
            },
            "people_count": {
                "title": "How many people work at your organization?",
                "subtitle": "This helps us customize your experience",
                "back": "Back",
                "finish_setup": "Finish setup"
            }
        }
    })
});

static VI: Lazy<Value> = Lazy::new(|| {
    json!({
        "ui": {
            "navbar": {
                "home": "Trang chủ",
                "attendance": "Chấm công",
                "history": "Lịch sử chấm công",
                "profile": "Hồ sơ",
                "logout": "Đăng xuất"
            }
        },
        "attendance": {
            "title": "Chấm công",
            "actions": {
                "check_in": "Chấm công vào",
                "check_out": "Chấm công ra",
                "filter": "Xem lịch sử"
            },
            "status_text": {
                "not_checked_in": "Chưa chấm công hôm nay",
                "checked_in": "Đã check in - Sẵn sàng check out",
                "checked_out": "Hoàn thành chấm công hôm nay"
            },
            "info": {
                "check_in": "Giờ vào",
                "check_out": "Giờ ra"
            },
            "summary": {
                "total_days": "Tổng số ngày",
                "total_hours": "Tổng số giờ",
                "present_days": "Ngày có mặt",
                "absent_days": "Ngày vắng mặt"
            },
            "day_status": {
                "present": "Có mặt",
                "absent": "Vắng mặt",
                "late": "Đi muộn",
                "half_day": "Nửa ngày"
            },
            "history": {
                "title": "Lịch sử chấm công",
                "empty": "Không có dữ liệu chấm công trong khoảng thời gian này"
            },
            "errors": {
                "status": "Không thể tải trạng thái chấm công",
                "check_in": "Lỗi khi check in",
                "check_out": "Lỗi khi check out",
                "history": "Không thể tải lịch sử chấm công",
                "missing_range": "Vui lòng chọn khoảng thời gian"
            }
        },
        "onboarding": {
            "complete_profile": {
                "title": "Chào mừng, {name}!",
                "subtitle": "Chúng tôi cần một vài thông tin để hoàn tất hồ sơ của bạn",
                "continue": "Tiếp tục",
                "next_step": "Bước tiếp theo: Tổ chức của bạn"
            },
            "organization_setup": {
                "title": "Thiết lập tổ chức của bạn",
                "subtitle": "Cho chúng tôi biết về tổ chức của bạn",
                "back": "Quay lại",
                "continue": "Tiếp tục"
            },
            "people_count": {
                "title": "Có bao nhiêu người làm việc tại tổ chức của bạn?",
                "subtitle": "Điều này giúp chúng tôi tùy chỉnh trải nghiệm của bạn",
                "back": "Quay lại",
                "finish_setup": "Hoàn tất thiết lập"
            }
        }
    })
});
