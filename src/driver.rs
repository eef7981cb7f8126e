//! The attendance status driver: keeps the rendered check-in/check-out
//! affordances in lockstep with server-reported state. The client never
//! computes transitions itself, it only reflects what the status endpoint
//! says, re-fetching after every mutating action.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use chrono::Local;
use tracing::error;

use crate::api::{ApiError, AttendanceApi};
use crate::clock;
use crate::i18n::I18n;
use crate::model::{StatusSnapshot, summarize};
use crate::view::{View, history_rows, status_view};

/// Error banners linger for 5 s, success banners for 3 s.
const ERROR_BANNER_TTL: Duration = Duration::from_secs(5);
const SUCCESS_BANNER_TTL: Duration = Duration::from_secs(3);

// Fixed per-operation copy shown when the transport or decoder fails and the
// server never got to say anything. Vietnamese is the product default; the
// catalog localizes these when another language is active.
const STATUS_FALLBACK: &str = "Không thể tải trạng thái chấm công";
const CHECK_IN_FALLBACK: &str = "Lỗi khi check in";
const CHECK_OUT_FALLBACK: &str = "Lỗi khi check out";
const HISTORY_FALLBACK: &str = "Không thể tải lịch sử chấm công";
const MISSING_RANGE_FALLBACK: &str = "Vui lòng chọn khoảng thời gian";

/// Auto-hide deadlines for the two transient banners. A new banner of the
/// same kind replaces the previous deadline, never stacks on it.
#[derive(Debug, Default)]
struct BannerDeadlines {
    error_until: Option<Instant>,
    success_until: Option<Instant>,
}

impl BannerDeadlines {
    fn show_error(&mut self, now: Instant) {
        self.error_until = Some(now + ERROR_BANNER_TTL);
    }

    fn show_success(&mut self, now: Instant) {
        self.success_until = Some(now + SUCCESS_BANNER_TTL);
    }

    fn clear(&mut self) {
        self.error_until = None;
        self.success_until = None;
    }

    /// Returns which banners just expired: (error, success).
    fn expire(&mut self, now: Instant) -> (bool, bool) {
        let error = matches!(self.error_until, Some(t) if t <= now);
        if error {
            self.error_until = None;
        }
        let success = matches!(self.success_until, Some(t) if t <= now);
        if success {
            self.success_until = None;
        }
        (error, success)
    }
}

pub struct StatusDriver<A, V> {
    api: A,
    view: V,
    i18n: Rc<I18n>,
    /// Last successful status fetch, overwritten wholesale, never merged.
    current: RefCell<Option<StatusSnapshot>>,
    banners: RefCell<BannerDeadlines>,
}

impl<A: AttendanceApi, V: View> StatusDriver<A, V> {
    pub fn new(api: A, view: V, i18n: Rc<I18n>) -> Self {
        Self {
            api,
            view,
            i18n,
            current: RefCell::new(None),
            banners: RefCell::new(BannerDeadlines::default()),
        }
    }

    /// Fetch today's status and re-render. On any failure the prior rendered
    /// state is left untouched; only a banner appears.
    pub async fn load_status(&self) {
        match self.api.status().await {
            Ok(snapshot) => {
                self.view.render_status(&status_view(&snapshot, &self.i18n));
                *self.current.borrow_mut() = Some(snapshot);
            }
            Err(err) => self.report(err, "attendance.errors.status", STATUS_FALLBACK),
        }
    }

    pub async fn check_in(&self) {
        self.view.set_loading(true);
        self.hide_banners();

        let result = self.api.check_in().await;
        self.view.set_loading(false);

        match result {
            Ok(receipt) => {
                self.show_success(&receipt.message);
                // No optimistic update: the server remains the source of truth.
                self.load_status().await;
            }
            Err(err) => self.report(err, "attendance.errors.check_in", CHECK_IN_FALLBACK),
        }
    }

    pub async fn check_out(&self) {
        self.view.set_loading(true);
        self.hide_banners();

        let result = self.api.check_out().await;
        self.view.set_loading(false);

        match result {
            Ok(receipt) => {
                self.show_success(&receipt.message);
                self.load_status().await;
            }
            Err(err) => self.report(err, "attendance.errors.check_out", CHECK_OUT_FALLBACK),
        }
    }

    /// Fetch and render history for an inclusive date range. Both bounds are
    /// required; with either missing no request is issued at all.
    pub async fn load_history(&self, start_date: &str, end_date: &str) {
        if start_date.trim().is_empty() || end_date.trim().is_empty() {
            let copy = self
                .i18n
                .lookup("attendance.errors.missing_range", MISSING_RANGE_FALLBACK);
            self.show_error(&copy);
            return;
        }

        self.view.set_loading(true);
        self.view.hide_error();

        let result = self.api.history(start_date, end_date).await;
        self.view.set_loading(false);

        match result {
            Ok(page) => {
                if page.history.is_empty() {
                    self.view.show_history_empty();
                } else {
                    let rows = history_rows(&page.history, &self.i18n);
                    let summary = summarize(&page.history);
                    self.view.render_history(&rows, &summary);
                }
            }
            Err(err) => self.report(err, "attendance.errors.history", HISTORY_FALLBACK),
        }
    }

    /// One clock beat: refresh the time/date line and drop expired banners.
    /// Runs independently of any network state.
    pub fn tick(&self) {
        let (hide_error, hide_success) = self.banners.borrow_mut().expire(Instant::now());
        if hide_error {
            self.view.hide_error();
        }
        if hide_success {
            self.view.hide_success();
        }

        let lang = self.i18n.active_language();
        let now = Local::now().naive_local();
        self.view
            .render_clock(&clock::format_time(lang, now), &clock::format_date(lang, now.date()));
    }

    /// Re-render the last known snapshot, e.g. after a language switch.
    pub fn rerender(&self) {
        if let Some(snapshot) = self.current.borrow().as_ref() {
            self.view.render_status(&status_view(snapshot, &self.i18n));
        }
    }

    fn report(&self, err: ApiError, key: &str, fallback: &str) {
        match err {
            // Server-sent error text goes out verbatim.
            ApiError::Backend(message) => self.show_error(&message),
            other => {
                error!(error = %other, "attendance request failed");
                self.show_error(&self.i18n.lookup(key, fallback));
            }
        }
    }

    fn show_error(&self, message: &str) {
        self.banners.borrow_mut().show_error(Instant::now());
        self.view.show_error(message);
    }

    fn show_success(&self, message: &str) {
        self.banners.borrow_mut().show_success(Instant::now());
        self.view.show_success(message);
    }

    fn hide_banners(&self) {
        self.banners.borrow_mut().clear();
        self.view.hide_error();
        self.view.hide_success();
    }
}
