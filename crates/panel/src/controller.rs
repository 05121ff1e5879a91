//! Refresh controller: fetch, decide, draw, present

use crate::config::PanelPlan;
use crate::render::render_frame;
use chrono::{DateTime, Local, NaiveDate, TimeZone, Timelike};
use eink_components::icon::IconSet;
use eink_emulator::DisplayDriver;
use feeds::fetch::Fetcher;
use feeds::scheduler::Scheduler;
use std::time::Duration;

/// Drives the panel, one pass per minute
///
/// A frame is drawn and presented only while `dirty` is set. `dirty` starts
/// set, is raised by any source change or by the date rolling over since the
/// last present, and is cleared by a successful present. A failed present
/// leaves it set so the next tick retries.
pub struct RefreshController<D, F> {
    plan: PanelPlan,
    icons: IconSet,
    scheduler: Scheduler<F>,
    driver: D,
    dirty: bool,
    /// Date of the frame on the panel
    presented_on: Option<NaiveDate>,
}

impl<D: DisplayDriver, F: Fetcher> RefreshController<D, F> {
    /// Controller for `plan`, fetching with `fetcher` and presenting on `driver`
    pub fn new(plan: PanelPlan, icons: IconSet, fetcher: F, driver: D) -> Self {
        let scheduler = Scheduler::new(plan.sources.clone(), plan.location, fetcher)
            .with_timeout(plan.fetch_timeout);
        Self {
            plan,
            icons,
            scheduler,
            driver,
            dirty: true,
            presented_on: None,
        }
    }

    /// Fetch every source and draw the first frame
    ///
    /// Returns true when a frame was presented.
    pub async fn start<Tz: TimeZone>(&mut self, now: &DateTime<Tz>) -> bool {
        tracing::info!(sources = self.scheduler.sources().len(), "initial fetch");
        self.scheduler.refresh_all(now).await;
        self.dirty = true;
        self.redraw_if_dirty(now).await
    }

    /// One minute-boundary pass
    ///
    /// Returns true when a frame was presented.
    pub async fn tick<Tz: TimeZone>(&mut self, now: &DateTime<Tz>) -> bool {
        if self.scheduler.tick(now).await {
            self.dirty = true;
        }
        // Calendar and next-up depend on the date
        if self.presented_on.is_some_and(|day| day != now.date_naive()) {
            tracing::debug!("date changed");
            self.dirty = true;
        }
        self.redraw_if_dirty(now).await
    }

    /// Start, then tick at every minute boundary of the local clock
    pub async fn run(&mut self) {
        self.start(&Local::now()).await;
        loop {
            tokio::time::sleep(until_next_minute(&Local::now())).await;
            self.tick(&Local::now()).await;
        }
    }

    /// Whether the next pass will redraw
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Display driver
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Mutable display driver
    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }

    /// Scheduler and its snapshot
    pub fn scheduler(&self) -> &Scheduler<F> {
        &self.scheduler
    }

    async fn redraw_if_dirty<Tz: TimeZone>(&mut self, now: &DateTime<Tz>) -> bool {
        if !self.dirty {
            return false;
        }

        let today = now.date_naive();
        let frame = render_frame(&self.plan, self.scheduler.snapshot(), today, &self.icons);
        match self.driver.present(frame).await {
            Ok(()) => {
                tracing::info!(%today, "frame presented");
                self.dirty = false;
                self.presented_on = Some(today);
                true
            }
            Err(err) => {
                tracing::error!(error = %err, "present failed, retrying next tick");
                false
            }
        }
    }
}

/// Time left until the next minute boundary of `now`
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use panel::controller::until_next_minute;
/// use std::time::Duration;
///
/// let now = Utc.with_ymd_and_hms(2026, 10, 19, 9, 15, 42).unwrap();
/// assert_eq!(until_next_minute(&now), Duration::from_secs(18));
/// ```
pub fn until_next_minute<Tz: TimeZone>(now: &DateTime<Tz>) -> Duration {
    let into_minute = Duration::new(u64::from(now.second()), now.nanosecond() % 1_000_000_000);
    Duration::from_secs(60).saturating_sub(into_minute)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_until_next_minute() {
        let on_boundary = Utc.with_ymd_and_hms(2026, 10, 19, 9, 15, 0).unwrap();
        assert_eq!(until_next_minute(&on_boundary), Duration::from_secs(60));

        let late = Utc
            .with_ymd_and_hms(2026, 10, 19, 9, 15, 59)
            .unwrap()
            .with_nanosecond(500_000_000)
            .unwrap();
        assert_eq!(until_next_minute(&late), Duration::from_millis(500));
    }
}
