use crate::dispatcher::{DispatchReport, Dispatcher};
use crate::feed::error::FeedError;
use crate::feed::FeedSource;
use crate::thread_manager::SteppableTask;
use crate::watchlist::WatchList;

#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub struct CycleReport {
    pub aircraft_seen: usize,
    pub matched: usize,
    pub dispatch: DispatchReport,
}

/// One poll of the feed: fetch, match against the watch list, dispatch.
pub struct Spotter<F: FeedSource> {
    feed: F,
    watchlist: WatchList,
    dispatcher: Dispatcher,
    poll_interval: std::time::Duration,
}

impl<F: FeedSource> Spotter<F> {
    #[must_use]
    pub fn new(
        feed: F,
        watchlist: WatchList,
        dispatcher: Dispatcher,
        poll_interval: std::time::Duration,
    ) -> Self {
        Spotter {
            feed,
            watchlist,
            dispatcher,
            poll_interval,
        }
    }

    #[must_use]
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Runs a single cycle as of `now`. A feed failure aborts the cycle before
    /// anything is dispatched.
    ///
    /// # Errors
    ///
    /// Returns the [`FeedError`] raised while fetching or decoding the feed.
    pub fn run_cycle(
        &mut self,
        now: chrono::DateTime<chrono::Utc>,
    ) -> Result<CycleReport, FeedError> {
        let aircraft = self.feed.fetch()?;
        log::debug!("Fetched {} aircraft from feed.", aircraft.len());

        let matches = self.watchlist.matches(&aircraft);
        let dispatch = self.dispatcher.dispatch(&matches, now);

        Ok(CycleReport {
            aircraft_seen: aircraft.len(),
            matched: matches.len(),
            dispatch,
        })
    }
}

impl<F: FeedSource + 'static> SteppableTask for Spotter<F> {
    fn step(&mut self) -> bool {
        if let Err(err) = self.run_cycle(chrono::Utc::now()) {
            log::error!("{err}");
        }
        log::info!(
            "Waiting for {} seconds before the next check...",
            self.poll_interval.as_secs()
        );
        true
    }
}
