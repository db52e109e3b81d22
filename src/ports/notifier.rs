//! Notifier Port - Blocking User Notices

use crate::domain::notice::Notice;

/// Sink for user-facing notices.
pub trait Notifier: Send + Sync + 'static {
  /// Show `notice` to the user.
  fn notify(&self, notice: Notice);
}
