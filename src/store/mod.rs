//! Client-side state containers: the download lifecycle store and the
//! notification fan-out it reports through.

pub mod downloads;
pub mod notifications;

pub use downloads::{DOWNLOAD_POLL_INTERVAL, DownloadStore};
pub use notifications::{Notification, NotificationKind, Notifier};
