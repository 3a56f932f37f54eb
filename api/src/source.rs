//! The stream adapter: bridges a push-style quad source into a
//! [`Dataset`] ([`import`](Dataset::import)) and exposes a dataset's
//! contents as a pull-style, finite stream
//! ([`to_stream`](Dataset::to_stream)).
//!
//! A push source is any [`Stream`] of `Result<Quad, E>`:
//! an `Ok` item is a data event,
//! an `Err` item an error event (which aborts the import),
//! and the end of the stream the completion event.
//! A closable channel drained through
//! [`stream::unfold`](futures_util::stream::unfold)
//! is the typical way to obtain one.
//!
//! There is no cancellation primitive, timeout, or backpressure:
//! an import accepts events as fast as they arrive,
//! and never resolves if the source never completes.

use std::error::Error;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures_util::stream::{FusedStream, Stream, StreamExt};

use crate::dataset::{Backend, Dataset};
use crate::quad::Quad;
use crate::term::Term;

/// Error raised by [`Dataset::import`] when the underlying source fails.
///
/// This is the only failure mode of the engine:
/// every other operation on a well-formed dataset is total.
#[derive(Debug, thiserror::Error)]
#[error("quad source failed: {0}")]
pub struct SourceError<E: Error + 'static>(#[source] pub E);

impl<B: Backend> Dataset<B> {
    /// Drain a push-style `source` into this dataset.
    ///
    /// Every quad yielded by the source is [`add`](Dataset::add)ed,
    /// in arrival order, with the usual deduplication.
    /// Resolves with the dataset itself once the source completes.
    ///
    /// The first error item aborts the import;
    /// quads added before the error remain (no rollback),
    /// and retrying means re-importing from scratch.
    pub async fn import<S, E>(&mut self, mut source: S) -> Result<&mut Self, SourceError<E>>
    where
        S: Stream<Item = Result<Quad<B::Term>, E>> + Unpin,
        E: Error + 'static,
    {
        while let Some(event) = source.next().await {
            self.add(event.map_err(SourceError)?);
        }
        Ok(self)
    }

    /// Expose the contents of this dataset as a pull-style, finite stream.
    ///
    /// The contents are snapshotted when this method is called:
    /// each quad held at that moment is yielded exactly once,
    /// whatever polling pattern the consumer uses,
    /// and later mutations of the dataset are not reflected.
    ///
    /// The stream is not restartable;
    /// call `to_stream` again for a fresh snapshot,
    /// reflecting the contents at *that* time.
    pub fn to_stream(&self) -> DatasetStream<B::Term> {
        DatasetStream {
            quads: self.to_vec().into_iter(),
        }
    }
}

/// A one-shot stream over a dataset snapshot;
/// see [`Dataset::to_stream`].
///
/// Implements [`FusedStream`]:
/// once the end of the snapshot has been reached,
/// further polls keep returning `None`
/// rather than re-enumerating anything.
pub struct DatasetStream<T: Term> {
    quads: std::vec::IntoIter<Quad<T>>,
}

impl<T: Term + Unpin> Stream for DatasetStream<T> {
    type Item = Quad<T>;

    fn poll_next(self: Pin<&mut Self>, _: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        Poll::Ready(self.get_mut().quads.next())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.quads.size_hint()
    }
}

impl<T: Term + Unpin> FusedStream for DatasetStream<T> {
    fn is_terminated(&self) -> bool {
        self.quads.len() == 0
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::dataset::test::TestStore;
    use crate::term::SimpleTerm;
    use futures_util::stream;
    use futures_util::task::noop_waker;

    type TestDataset = Dataset<TestStore<SimpleTerm>>;

    fn quad(o: &str) -> Quad<SimpleTerm> {
        Quad::new(
            SimpleTerm::iri("tag:s"),
            SimpleTerm::iri("tag:p"),
            SimpleTerm::literal(o),
            SimpleTerm::DefaultGraph,
        )
    }

    #[tokio::test]
    async fn import_resolves_with_the_dataset() {
        let source = stream::iter(vec![Ok::<_, std::io::Error>(quad("a")), Ok(quad("b"))]);
        let mut d = TestDataset::new();
        let resolved = d.import(source).await.unwrap();
        assert_eq!(resolved.len(), 2);
    }

    #[tokio::test]
    async fn import_drains_a_channel_source() {
        let (tx, rx) = tokio::sync::mpsc::channel::<Result<Quad<SimpleTerm>, std::io::Error>>(8);
        tx.send(Ok(quad("a"))).await.unwrap();
        tx.send(Ok(quad("b"))).await.unwrap();
        // closing the channel is the completion event
        drop(tx);

        let source = stream::unfold(rx, |mut rx| async move {
            rx.recv().await.map(|event| (event, rx))
        });
        let mut d = TestDataset::new();
        d.import(Box::pin(source)).await.unwrap();
        assert_eq!(d.len(), 2);
        assert!(d.contains(&quad("a")));
        assert!(d.contains(&quad("b")));
    }

    #[tokio::test]
    async fn import_error_is_chained_to_the_source_error() {
        let source = stream::iter(vec![
            Ok(quad("a")),
            Err(std::io::Error::new(std::io::ErrorKind::Other, "boom")),
        ]);
        let mut d = TestDataset::new();
        let err = d.import(source).await.unwrap_err();
        assert!(err.to_string().contains("quad source failed"));
        assert_eq!(err.0.to_string(), "boom");
    }

    #[test]
    fn export_yields_each_quad_exactly_once() {
        let d: TestDataset = vec![quad("a"), quad("b")].into_iter().collect();
        let mut exported = d.to_stream();

        let waker = noop_waker();
        let mut cx = Context::from_waker(&waker);

        // eager polling, more demands than items
        let mut seen = Vec::new();
        loop {
            match Pin::new(&mut exported).poll_next(&mut cx) {
                Poll::Ready(Some(q)) => seen.push(q),
                Poll::Ready(None) => break,
                Poll::Pending => unreachable!("snapshot streams are always ready"),
            }
        }
        assert_eq!(seen.len(), 2);
        assert!(seen.contains(&quad("a")));
        assert!(seen.contains(&quad("b")));

        // polling again after the end marker must not re-enumerate
        assert!(exported.is_terminated());
        assert!(matches!(
            Pin::new(&mut exported).poll_next(&mut cx),
            Poll::Ready(None)
        ));
    }

    #[test]
    fn export_is_a_snapshot() {
        let mut d: TestDataset = vec![quad("a")].into_iter().collect();
        let exported = d.to_stream();
        d.add(quad("b"));
        assert_eq!(exported.size_hint(), (1, Some(1)));
    }

    #[test]
    fn fresh_stream_reflects_later_contents() {
        let mut d: TestDataset = vec![quad("a")].into_iter().collect();
        d.add(quad("b"));
        assert_eq!(d.to_stream().size_hint(), (2, Some(2)));
    }
}
