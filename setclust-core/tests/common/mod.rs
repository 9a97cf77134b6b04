use setclust_test_support::tracing::RecordingLayer;
use tracing_subscriber::layer::SubscriberExt;

/// Sorts each group and then the groups themselves so partitions can be
/// compared without depending on discovery order.
#[must_use]
pub fn canonical<T: Clone + Ord>(groups: &[Vec<&T>]) -> Vec<Vec<T>> {
    let mut sorted: Vec<Vec<T>> = groups
        .iter()
        .map(|group| {
            let mut members: Vec<T> = group.iter().map(|&item| item.clone()).collect();
            members.sort();
            members
        })
        .collect();
    sorted.sort();
    sorted
}

/// Runs `work` with a [`RecordingLayer`] installed as the default subscriber.
pub fn recorded<R>(work: impl FnOnce() -> R) -> (R, RecordingLayer) {
    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());
    let output = tracing::subscriber::with_default(subscriber, work);
    (output, layer)
}
