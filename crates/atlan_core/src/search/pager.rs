//! Page-at-a-time iterator over search hits.
//!
//! # Invariants
//! - A page is fetched only when the buffered hits run out.
//! - A short or empty page ends the sequence. The service's approximate
//!   hit count is never used to stop early.
//! - The first transport error is yielded once, then the iterator is fused.

use crate::error::AtlanResult;
use crate::model::asset::Asset;
use crate::transport::{AssetTransport, SearchRequest};
use std::collections::VecDeque;

/// Iterator yielding every hit of a search, one page request at a time.
pub struct AssetPager<'t, T: AssetTransport + ?Sized> {
    transport: &'t T,
    request: SearchRequest,
    buffer: VecDeque<Asset>,
    pages_fetched: usize,
    exhausted: bool,
}

impl<'t, T: AssetTransport + ?Sized> AssetPager<'t, T> {
    /// Starts at `request.from`; `request.size` of zero is treated as one.
    pub fn new(transport: &'t T, mut request: SearchRequest) -> Self {
        request.size = request.size.max(1);
        Self {
            transport,
            request,
            buffer: VecDeque::new(),
            pages_fetched: 0,
            exhausted: false,
        }
    }

    pub fn pages_fetched(&self) -> usize {
        self.pages_fetched
    }

    fn fetch_page(&mut self) -> AtlanResult<()> {
        let page = self.transport.search(&self.request)?;
        self.pages_fetched += 1;
        let received = page.assets.len();
        self.request.from += received;
        if received < self.request.size {
            self.exhausted = true;
        }
        self.buffer.extend(page.assets);
        Ok(())
    }
}

impl<T: AssetTransport + ?Sized> Iterator for AssetPager<'_, T> {
    type Item = AtlanResult<Asset>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.buffer.is_empty() && !self.exhausted {
            if let Err(err) = self.fetch_page() {
                self.exhausted = true;
                self.buffer.clear();
                return Some(Err(err));
            }
        }
        self.buffer.pop_front().map(Ok)
    }
}

#[cfg(test)]
mod tests {
    use super::AssetPager;
    use crate::model::asset::{Asset, AssetGuid, TypeName};
    use crate::model::patch::AssetPatch;
    use crate::transport::{
        AssetTransport, DeleteKind, InMemoryTransport, MutationResponse, SaveOptions, SearchPage,
        SearchRequest, TransportError, TransportResult,
    };

    /// Serves `inner`'s hits but always reports zero as the hit count.
    struct ZeroCountTransport {
        inner: InMemoryTransport,
    }

    impl AssetTransport for ZeroCountTransport {
        fn save(
            &self,
            patches: &[AssetPatch],
            options: SaveOptions,
        ) -> TransportResult<MutationResponse> {
            self.inner.save(patches, options)
        }

        fn retrieve_by_guid(&self, guid: AssetGuid) -> TransportResult<Option<Asset>> {
            self.inner.retrieve_by_guid(guid)
        }

        fn retrieve_by_qualified_name(
            &self,
            type_name: &TypeName,
            qualified_name: &str,
        ) -> TransportResult<Option<Asset>> {
            self.inner.retrieve_by_qualified_name(type_name, qualified_name)
        }

        fn search(&self, request: &SearchRequest) -> TransportResult<SearchPage> {
            let page = self.inner.search(request)?;
            Ok(SearchPage {
                approximate_count: 0,
                ..page
            })
        }

        fn delete(
            &self,
            guids: &[AssetGuid],
            kind: DeleteKind,
        ) -> TransportResult<MutationResponse> {
            self.inner.delete(guids, kind)
        }
    }

    fn seeded(count: usize) -> InMemoryTransport {
        let transport = InMemoryTransport::new();
        for idx in 0..count {
            transport
                .insert(Asset::new(
                    TypeName::new("Persona").unwrap(),
                    format!("persona-{idx:03}"),
                    "ops",
                ))
                .unwrap();
        }
        transport
    }

    #[test]
    fn walks_all_pages_lazily() {
        let transport = seeded(5);
        let request = SearchRequest::for_type(TypeName::new("Persona").unwrap(), 2);
        let mut pager = AssetPager::new(&transport, request);

        assert_eq!(pager.pages_fetched(), 0);
        assert!(pager.next().is_some());
        assert_eq!(pager.pages_fetched(), 1);

        let rest: Vec<_> = pager.by_ref().collect::<Result<_, _>>().unwrap();
        assert_eq!(rest.len(), 4);
        assert_eq!(pager.pages_fetched(), 3);
    }

    #[test]
    fn underestimated_hit_count_does_not_truncate() {
        let transport = ZeroCountTransport { inner: seeded(5) };
        let request = SearchRequest::for_type(TypeName::new("Persona").unwrap(), 2);
        let mut pager = AssetPager::new(&transport, request);

        let all: Vec<_> = pager.by_ref().collect::<Result<_, _>>().unwrap();
        assert_eq!(all.len(), 5);
        assert_eq!(pager.pages_fetched(), 3);
    }

    #[test]
    fn full_last_page_needs_one_empty_page_to_finish() {
        let transport = seeded(4);
        let request = SearchRequest::for_type(TypeName::new("Persona").unwrap(), 2);
        let mut pager = AssetPager::new(&transport, request);

        assert_eq!(pager.by_ref().count(), 4);
        assert_eq!(pager.pages_fetched(), 3);
    }

    #[test]
    fn yields_transport_error_once_then_stops() {
        let transport = seeded(3);
        transport.fail_next(TransportError::Unavailable("down".to_string()));
        let request = SearchRequest::for_type(TypeName::new("Persona").unwrap(), 2);
        let mut pager = AssetPager::new(&transport, request);

        assert!(matches!(pager.next(), Some(Err(_))));
        assert!(pager.next().is_none());
    }
}
