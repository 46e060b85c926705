use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use nix::unistd::{getgid, getuid, User};
use serde::Serialize;
use tracing::warn;

use crate::config::Config;

/// A directory and the space left on its filesystem.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PathInfo {
    pub path: PathBuf,
    pub space_avail: u64,
    pub space_total: u64,
}

impl PathInfo {
    /// Unreadable paths report zero space.
    pub fn probe(path: &Path) -> Self {
        let (space_avail, space_total) = match disk_space(path) {
            Ok(space) => space,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Disk space unavailable");
                (0, 0)
            }
        };
        Self {
            path: path.to_path_buf(),
            space_avail,
            space_total,
        }
    }

    /// Fraction of the filesystem still free, `None` if the size is unknown.
    pub fn avail_fraction(&self) -> Option<f64> {
        (self.space_total > 0).then(|| self.space_avail as f64 / self.space_total as f64)
    }
}

/// Account the server process runs under.
#[derive(Debug, Clone, Serialize)]
pub struct AccountInfo {
    pub uid: u32,
    pub gid: u32,
    pub user: Option<String>,
}

impl AccountInfo {
    pub fn current() -> Self {
        let uid = getuid();
        let user = match User::from_uid(uid) {
            Ok(user) => user.map(|u| u.name),
            Err(e) => {
                warn!(uid = uid.as_raw(), error = %e, "User lookup failed");
                None
            }
        };
        Self {
            uid: uid.as_raw(),
            gid: getgid().as_raw(),
            user,
        }
    }
}

/// Served as `/srv/about.json` and shown on the admin about page.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct About {
    pub now: DateTime<Utc>,
    pub version: &'static str,
    pub service: bool,
    pub start_time: DateTime<Utc>,
    pub root_dir: PathBuf,
    pub data_dir: PathInfo,
    pub log_dir: PathInfo,
    pub crash_dir: PathInfo,
    pub config: Config,
    pub account: AccountInfo,
}

impl About {
    pub fn collect(config: &Config, start_time: DateTime<Utc>) -> Self {
        Self {
            now: Utc::now(),
            version: env!("CARGO_PKG_VERSION"),
            service: config.service,
            start_time,
            root_dir: config.root_dir.clone(),
            data_dir: PathInfo::probe(&config.data_dir),
            log_dir: PathInfo::probe(&config.log_dir),
            crash_dir: PathInfo::probe(&config.crash_dir),
            config: config.clone(),
            account: AccountInfo::current(),
        }
    }

    pub fn uptime(&self) -> chrono::Duration {
        self.now - self.start_time
    }

    /// Named directories, in display order.
    pub fn dirs(&self) -> [(&'static str, &PathInfo); 3] {
        [
            ("Data", &self.data_dir),
            ("Logs", &self.log_dir),
            ("Crash dumps", &self.crash_dir),
        ]
    }
}

fn disk_space(path: &Path) -> Result<(u64, u64)> {
    let stat = nix::sys::statvfs::statvfs(path)
        .with_context(|| format!("statvfs failed for {}", path.display()))?;
    let fragment = stat.fragment_size() as u64;
    Ok((
        (stat.blocks_available() as u64).saturating_mul(fragment),
        (stat.blocks() as u64).saturating_mul(fragment),
    ))
}

/// Uptime as `1d 2h 3m 4s`, leading zero units dropped.
pub fn format_duration(duration: chrono::Duration) -> String {
    let secs = duration.num_seconds().max(0);
    let (days, rem) = (secs / 86_400, secs % 86_400);
    let (hours, rem) = (rem / 3_600, rem % 3_600);
    let (mins, secs) = (rem / 60, rem % 60);
    if days > 0 {
        format!("{days}d {hours}h {mins}m {secs}s")
    } else if hours > 0 {
        format!("{hours}h {mins}m {secs}s")
    } else if mins > 0 {
        format!("{mins}m {secs}s")
    } else {
        format!("{secs}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tismet_nav::{full_class, StatusClass};

    #[test]
    fn probe_existing_dir() {
        let info = PathInfo::probe(&std::env::temp_dir());
        assert!(info.space_total > 0);
        assert!(info.space_avail <= info.space_total);
        assert!(info.avail_fraction().is_some());
    }

    #[test]
    fn probe_missing_dir_reports_zero() {
        let info = PathInfo::probe(Path::new("/definitely/not/a/tismet/dir"));
        assert_eq!(info.space_avail, 0);
        assert_eq!(info.space_total, 0);
        assert_eq!(info.avail_fraction(), None);
        assert_eq!(full_class(info.avail_fraction()), StatusClass::Disabled);
    }

    #[test]
    fn fraction_feeds_status_class() {
        let info = PathInfo {
            path: PathBuf::from("/data"),
            space_avail: 5,
            space_total: 100,
        };
        assert_eq!(info.avail_fraction(), Some(0.05));
        assert_eq!(full_class(info.avail_fraction()), StatusClass::Error);
    }

    #[test]
    fn json_uses_camel_case() {
        let info = PathInfo {
            path: PathBuf::from("/data"),
            space_avail: 1,
            space_total: 2,
        };
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "path": "/data", "spaceAvail": 1, "spaceTotal": 2 })
        );
    }

    #[test]
    fn account_matches_process() {
        let account = AccountInfo::current();
        assert_eq!(account.uid, getuid().as_raw());
        assert_eq!(account.gid, getgid().as_raw());
        let json = serde_json::to_value(&account).unwrap();
        assert!(json["uid"].is_u64());
        assert!(json.get("user").is_some());
    }

    #[test]
    fn durations() {
        assert_eq!(format_duration(chrono::Duration::seconds(42)), "42s");
        assert_eq!(format_duration(chrono::Duration::seconds(3_725)), "1h 2m 5s");
        assert_eq!(format_duration(chrono::Duration::seconds(90_061)), "1d 1h 1m 1s");
        assert_eq!(format_duration(chrono::Duration::seconds(-5)), "0s");
    }
}
