use std::fmt;

use indexmap::IndexMap;
use tracing::trace;

use crate::core::DataPoint;
use crate::error::{ChartError, ChartResult};

/// Mutation notification emitted by [`ObservableSeries`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesChange {
    Added { index: usize, point: DataPoint },
    Removed { index: usize, point: DataPoint },
    /// The whole sequence was cleared or replaced.
    Reset,
}

/// Handle returned by [`ObservableSeries::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

type SeriesCallback = Box<dyn FnMut(&SeriesChange, &[DataPoint])>;

/// Ordered, chronological point sequence that notifies subscribers on every
/// mutation. Subscribers are called in subscription order with the change and
/// the points as they are after it.
#[derive(Default)]
pub struct ObservableSeries {
    points: Vec<DataPoint>,
    subscribers: IndexMap<SubscriptionId, SeriesCallback>,
    next_subscription: u64,
}

impl ObservableSeries {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_points(points: Vec<DataPoint>) -> Self {
        Self {
            points,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn push(&mut self, point: DataPoint) {
        let index = self.points.len();
        self.points.push(point);
        self.notify(SeriesChange::Added { index, point });
    }

    pub fn insert(&mut self, index: usize, point: DataPoint) -> ChartResult<()> {
        if index > self.points.len() {
            return Err(ChartError::InvalidData(format!(
                "insert index {index} out of bounds for series of {}",
                self.points.len()
            )));
        }
        self.points.insert(index, point);
        self.notify(SeriesChange::Added { index, point });
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> ChartResult<DataPoint> {
        if index >= self.points.len() {
            return Err(ChartError::InvalidData(format!(
                "remove index {index} out of bounds for series of {}",
                self.points.len()
            )));
        }
        let point = self.points.remove(index);
        self.notify(SeriesChange::Removed { index, point });
        Ok(point)
    }

    pub fn clear(&mut self) {
        self.points.clear();
        self.notify(SeriesChange::Reset);
    }

    pub fn replace_all(&mut self, points: Vec<DataPoint>) {
        self.points = points;
        self.notify(SeriesChange::Reset);
    }

    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&SeriesChange, &[DataPoint]) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.insert(id, Box::new(callback));
        id
    }

    /// Returns `false` when the subscription was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.shift_remove(&id).is_some()
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    fn notify(&mut self, change: SeriesChange) {
        trace!(
            ?change,
            subscribers = self.subscribers.len(),
            "series changed"
        );
        for callback in self.subscribers.values_mut() {
            callback(&change, &self.points);
        }
    }
}

impl fmt::Debug for ObservableSeries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObservableSeries")
            .field("points", &self.points)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
