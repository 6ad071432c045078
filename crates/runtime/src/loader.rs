use std::sync::Arc;

use catalog::{CollectionKind, DataSource, LoadOutcome, load_collection};
use tokio::sync::mpsc;
use tracing::debug;

/// Starts the three collection loads as independent tasks.
///
/// Completions arrive on the returned channel in whatever order they finish;
/// the channel closes once all three have been delivered. Must be called
/// from within a tokio runtime.
pub fn spawn_loads<S>(source: Arc<S>) -> mpsc::UnboundedReceiver<LoadOutcome>
where
    S: DataSource + ?Sized + 'static,
{
    let (tx, rx) = mpsc::unbounded_channel();
    for collection in CollectionKind::ALL {
        let source = Arc::clone(&source);
        let tx = tx.clone();
        tokio::spawn(async move {
            let outcome = load_collection(source.as_ref(), collection).await;
            if tx.send(outcome).is_err() {
                debug!(%collection, "session gone; load result dropped");
            }
        });
    }
    rx
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Session;
    use catalog::{FetchErrorKind, StaticSource};
    use foundation::{CategoryId, SpotId};

    const SPOTS: &str = r#"[
        {"id": 1, "name": "a", "lat": 48.29, "lng": 25.93, "category": null, "images": []},
        {"id": 2, "name": "b", "lat": 48.30, "lng": 25.94, "category": {"id": 5, "name": "Parks", "icon_url": null}, "images": []},
        {"id": 3, "name": "c", "lat": 48.31, "lng": 25.95, "category": {"id": "5", "name": "Parks", "icon_url": null}, "images": []}
    ]"#;

    #[tokio::test]
    async fn loads_settle_independently() {
        let source = StaticSource::new()
            .with_payload(CollectionKind::Spots, SPOTS)
            .with_failure(CollectionKind::Routes, FetchErrorKind::Timeout, "request timed out")
            .with_payload(
                CollectionKind::Categories,
                r#"[{"id": 5, "name": "Parks", "icon_url": "http://x/p.png"}]"#,
            );
        let mut rx = spawn_loads(Arc::new(source));
        let mut session = Session::default();
        let mut updates = 0;
        session.apply_loads(&mut rx, |_| updates += 1).await;

        assert_eq!(updates, 3);
        assert!(session.repository().is_settled());

        let view = session.view();
        assert_eq!(view.map.markers.len(), 3);
        assert_eq!(view.map.route, None);

        session.dispatch(crate::Action::SelectCategory(Some(CategoryId::new(5))));
        let keys: Vec<SpotId> = session.view().map.markers.iter().map(|m| m.key).collect();
        assert_eq!(keys, vec![SpotId::new(2), SpotId::new(3)]);
    }

    #[tokio::test]
    async fn dyn_sources_are_accepted() {
        let source: Arc<dyn DataSource> = Arc::new(StaticSource::new());
        let mut rx = spawn_loads(source);
        let mut session = Session::default();
        session.apply_loads(&mut rx, |_| {}).await;
        assert!(session.repository().is_settled());
        assert!(session.view().map.markers.is_empty());
    }
}
