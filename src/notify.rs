//! Notifications
//!
//! Auto-dismissing error toasts and the browser-backed UI surface.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::controller::ClientUi;

/// Duration of the slide-out animation before a toast is removed
const SLIDE_OUT_MS: u32 = 300;

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub message: String,
    /// Playing the slide-out animation
    pub leaving: bool,
}

/// Start the slide-out animation of a notice; false if already gone
fn mark_leaving(list: &mut [Notice], id: u64) -> bool {
    match list.iter_mut().find(|n| n.id == id) {
        Some(notice) => {
            notice.leaving = true;
            true
        }
        None => false,
    }
}

fn remove_notice(list: &mut Vec<Notice>, id: u64) {
    list.retain(|n| n.id != id);
}

/// Stack of visible notifications
#[derive(Clone, Copy)]
pub struct NoticeBoard {
    notices: RwSignal<Vec<Notice>>,
    next_id: RwSignal<u64>,
    timeout_ms: u32,
}

impl NoticeBoard {
    pub fn new(timeout_ms: u32) -> Self {
        Self {
            notices: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(0),
            timeout_ms,
        }
    }

    /// Visible notices, oldest first (tracked)
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.get()
    }

    /// Show a message and schedule its removal
    pub fn push(&self, message: &str) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);
        self.notices.update(|list| {
            list.push(Notice {
                id,
                message: message.to_string(),
                leaving: false,
            })
        });

        let board = *self;
        spawn_local(async move {
            TimeoutFuture::new(board.timeout_ms).await;
            let mut visible = false;
            board.notices.update(|list| visible = mark_leaving(list, id));
            if !visible {
                return;
            }
            TimeoutFuture::new(SLIDE_OUT_MS).await;
            board.dismiss(id);
        });
    }

    pub fn dismiss(&self, id: u64) {
        self.notices.update(|list| remove_notice(list, id));
    }
}

/// [`ClientUi`] backed by the notice board and `window.confirm`
#[derive(Clone, Copy)]
pub struct BrowserUi {
    board: NoticeBoard,
}

impl BrowserUi {
    pub fn new(board: NoticeBoard) -> Self {
        Self { board }
    }
}

impl ClientUi for BrowserUi {
    fn notify_error(&self, message: &str) {
        self.board.push(message);
    }

    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|window| window.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_notice(id: u64) -> Notice {
        Notice {
            id,
            message: format!("Notice {}", id),
            leaving: false,
        }
    }

    #[test]
    fn test_mark_leaving_then_remove() {
        let mut list = vec![make_notice(0), make_notice(1)];

        assert!(mark_leaving(&mut list, 0));
        assert!(list[0].leaving);
        assert!(!list[1].leaving);

        remove_notice(&mut list, 0);
        assert_eq!(list, vec![make_notice(1)]);
    }

    #[test]
    fn test_dismissed_notice_is_not_marked() {
        let mut list = vec![make_notice(1)];
        remove_notice(&mut list, 1);

        assert!(!mark_leaving(&mut list, 1));
        assert!(list.is_empty());
    }
}
