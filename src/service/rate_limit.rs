//! Per-client fixed-window request limiting.

use rustc_hash::FxHashMap;
use std::net::IpAddr;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

/// Default requests allowed per client per window.
pub const DEFAULT_MAX_REQUESTS: u32 = 100;

/// Default window length.
pub const DEFAULT_WINDOW: Duration = Duration::from_secs(60);

#[derive(Clone, Copy, Debug)]
struct Window {
    started: Instant,
    count: u32,
}

impl Window {
    fn expired(&self, now: Instant, length: Duration) -> bool {
        now.saturating_duration_since(self.started) >= length
    }
}

#[derive(Debug, Default)]
struct Clients {
    windows: FxHashMap<IpAddr, Window>,
    last_sweep: Option<Instant>,
}

impl Clients {
    /// Drop expired windows, at most once per window length.
    fn sweep(&mut self, now: Instant, length: Duration) {
        let due = self
            .last_sweep
            .map_or(true, |last| now.saturating_duration_since(last) >= length);
        if due {
            self.windows.retain(|_, w| !w.expired(now, length));
            self.last_sweep = Some(now);
        }
    }
}

/// Counts requests per client address within fixed windows.
#[derive(Debug)]
pub struct RateLimiter {
    max_requests: u32,
    window: Duration,
    clients: Mutex<Clients>,
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_REQUESTS, DEFAULT_WINDOW)
    }
}

impl RateLimiter {
    pub fn new(max_requests: u32, window: Duration) -> Self {
        Self {
            max_requests,
            window,
            clients: Mutex::new(Clients::default()),
        }
    }

    /// Record a request from `client`. Returns false once the client is over its limit.
    pub async fn check(&self, client: IpAddr) -> bool {
        self.check_at(client, Instant::now()).await
    }

    /// [`check`](Self::check) with an explicit clock reading.
    pub async fn check_at(&self, client: IpAddr, now: Instant) -> bool {
        let mut clients = self.clients.lock().await;
        clients.sweep(now, self.window);

        let fresh = Window {
            started: now,
            count: 0,
        };
        let entry = clients.windows.entry(client).or_insert(fresh);
        if entry.expired(now, self.window) {
            *entry = fresh;
        }
        if entry.count >= self.max_requests {
            return false;
        }
        entry.count += 1;
        true
    }
}
