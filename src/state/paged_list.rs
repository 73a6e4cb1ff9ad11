// ============================================================================
// PAGED LIST - Una página de una colección remota + controles de navegación
// ============================================================================
// Compartido por noticias e historial. Cada load() toma un ticket creciente;
// una respuesta con ticket anterior al último despachado se descarta, así
// que respuestas fuera de orden nunca pisan la página más reciente.
// ============================================================================

use std::cell::Cell;
use std::rc::{Rc, Weak};

use futures::future::{self, LocalBoxFuture};
use futures::FutureExt;

use crate::services::error::{ApiError, ApiResult};
use crate::services::gateways::PageSource;
use crate::state::pagination::{compute_window, DEFAULT_WINDOW_SIZE};
use crate::state::reactivity::ReactiveState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListStatus {
    Idle,
    Loading,
    Loaded,
    Errored,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ListState<T> {
    pub status: ListStatus,
    pub items: Vec<T>,
    pub current_page: u32,
    /// 0 hasta el primer load exitoso
    pub page_count: u32,
    pub total_count: u64,
    pub error: Option<String>,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self {
            status: ListStatus::Idle,
            items: Vec::new(),
            current_page: 1,
            page_count: 0,
            total_count: 0,
            error: None,
        }
    }
}

impl<T> ListState<T> {
    pub fn is_loading(&self) -> bool {
        self.status == ListStatus::Loading
    }
}

/// Resultado de un load que terminó sin error
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    Applied,
    /// Otro load más reciente se despachó mientras tanto
    Superseded,
}

pub type LoadFuture = LocalBoxFuture<'static, ApiResult<LoadOutcome>>;

struct ListInner<T> {
    state: ReactiveState<ListState<T>>,
    source: Rc<dyn PageSource<T>>,
    page_size: Cell<u32>,
    window_size: Cell<u32>,
    latest_ticket: Cell<u64>,
}

pub struct PagedListController<T> {
    inner: Rc<ListInner<T>>,
}

/// Referencia débil para closures que el propio controller retiene
pub struct WeakPagedList<T> {
    inner: Weak<ListInner<T>>,
}

impl<T> Clone for WeakPagedList<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Weak::clone(&self.inner),
        }
    }
}

impl<T> WeakPagedList<T> {
    pub fn upgrade(&self) -> Option<PagedListController<T>> {
        self.inner.upgrade().map(|inner| PagedListController { inner })
    }
}

impl<T> PagedListController<T> {
    pub fn downgrade(&self) -> WeakPagedList<T> {
        WeakPagedList {
            inner: Rc::downgrade(&self.inner),
        }
    }
}

impl<T> Clone for PagedListController<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Clone + 'static> PagedListController<T> {
    pub fn new(source: Rc<dyn PageSource<T>>, page_size: u32) -> Self {
        Self {
            inner: Rc::new(ListInner {
                state: ReactiveState::new(ListState::default()),
                source,
                page_size: Cell::new(page_size.max(1)),
                window_size: Cell::new(DEFAULT_WINDOW_SIZE),
                latest_ticket: Cell::new(0),
            }),
        }
    }

    pub fn with_window_size(self, window_size: u32) -> Self {
        self.inner.window_size.set(window_size.max(1));
        self
    }

    /// Despacha el fetch de inmediato (estado → Loading) y devuelve el future
    /// que aplica la respuesta.
    pub fn load(&self, page_number: u32, page_size: u32) -> LoadFuture {
        if page_number < 1 || page_size < 1 {
            let err = ApiError::Validation(format!(
                "Invalid page request: page {} of size {}",
                page_number, page_size
            ));
            return future::ready(Err(err)).boxed_local();
        }

        let ticket = self.inner.latest_ticket.get() + 1;
        self.inner.latest_ticket.set(ticket);
        self.inner.page_size.set(page_size);
        self.inner.state.update(|s| {
            s.status = ListStatus::Loading;
            s.error = None;
        });

        let request = self.inner.source.fetch_page(page_number, page_size);
        let inner = Rc::clone(&self.inner);

        async move {
            let result = request.await;

            if inner.latest_ticket.get() != ticket {
                log::debug!(
                    "⏭️ [LIST] Respuesta de página {} descartada (ticket {} < {})",
                    page_number,
                    ticket,
                    inner.latest_ticket.get()
                );
                return Ok(LoadOutcome::Superseded);
            }

            match result {
                Ok(page) => {
                    if page.page_number != page_number {
                        log::warn!(
                            "⚠️ [LIST] Página {} fuera de rango, la colección tiene {} páginas",
                            page_number,
                            page.page_count
                        );
                    }
                    log::info!(
                        "✅ [LIST] Página {}/{} cargada: {} items de {}",
                        page.page_number,
                        page.page_count,
                        page.items.len(),
                        page.total_count
                    );
                    inner.state.update(move |s| {
                        s.items = page.items;
                        s.current_page = page.page_number;
                        s.page_count = page.page_count;
                        s.total_count = page.total_count;
                        s.status = ListStatus::Loaded;
                        s.error = None;
                    });
                    Ok(LoadOutcome::Applied)
                }
                Err(e) => {
                    log::error!("❌ [LIST] Error cargando página {}: {}", page_number, e);
                    let message = e.message();
                    inner.state.update(move |s| {
                        s.status = ListStatus::Errored;
                        s.error = Some(message);
                    });
                    Err(e)
                }
            }
        }
        .boxed_local()
    }

    /// None si target cae fuera de `1..=page_count`
    pub fn go_to_page(&self, target: u32) -> Option<LoadFuture> {
        let page_count = self.inner.state.with(|s| s.page_count);
        if target < 1 || target > page_count {
            log::debug!("[LIST] go_to_page({}) ignorado, hay {} páginas", target, page_count);
            return None;
        }
        Some(self.load(target, self.page_size()))
    }

    pub fn next_page(&self) -> Option<LoadFuture> {
        self.go_to_page(self.current_page().saturating_add(1))
    }

    pub fn previous_page(&self) -> Option<LoadFuture> {
        self.go_to_page(self.current_page().saturating_sub(1))
    }

    /// Recarga la página actual
    pub fn refresh(&self) -> LoadFuture {
        self.load(self.current_page(), self.page_size())
    }

    pub fn state(&self) -> ListState<T> {
        self.inner.state.get()
    }

    pub fn current_page(&self) -> u32 {
        self.inner.state.with(|s| s.current_page)
    }

    pub fn page_size(&self) -> u32 {
        self.inner.page_size.get()
    }

    /// Ventana de botones para la página actual
    pub fn window(&self) -> Vec<u32> {
        let window_size = self.inner.window_size.get();
        self.inner
            .state
            .with(|s| compute_window(s.current_page, s.page_count, window_size))
    }

    pub fn has_previous(&self) -> bool {
        self.inner.state.with(|s| s.current_page > 1)
    }

    pub fn has_next(&self) -> bool {
        self.inner.state.with(|s| s.current_page < s.page_count)
    }

    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn(&ListState<T>) + 'static,
    {
        self.inner.state.subscribe(callback);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PageResult;
    use futures::channel::oneshot;
    use futures::executor::block_on;
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// Fuente falsa: 47 items, páginas de `page_size`
    struct CountingSource {
        total: Cell<u64>,
        requests: RefCell<Vec<(u32, u32)>>,
        fail_next: Cell<bool>,
    }

    impl CountingSource {
        fn new(total: u64) -> Rc<Self> {
            Rc::new(Self {
                total: Cell::new(total),
                requests: RefCell::new(Vec::new()),
                fail_next: Cell::new(false),
            })
        }
    }

    impl PageSource<u64> for CountingSource {
        fn fetch_page(&self, page: u32, page_size: u32) -> LocalBoxFuture<'static, ApiResult<PageResult<u64>>> {
            self.requests.borrow_mut().push((page, page_size));
            if self.fail_next.replace(false) {
                return future::ready(Err(ApiError::Network("Network error: offline".into()))).boxed_local();
            }
            let size = u64::from(page_size);
            let total = self.total.get();
            let page_count = ((total + size - 1) / size) as u32;
            let start = u64::from(page - 1) * size;
            let items = (start..(start + size).min(total)).collect();
            future::ready(Ok(PageResult::new(items, page, page_count, total))).boxed_local()
        }
    }

    /// Fuente cuyas respuestas se liberan a mano, en el orden que elija el test
    #[derive(Default)]
    struct ManualSource {
        pending: RefCell<HashMap<u32, oneshot::Receiver<ApiResult<PageResult<u64>>>>>,
    }

    impl ManualSource {
        fn expect(&self, page: u32) -> oneshot::Sender<ApiResult<PageResult<u64>>> {
            let (tx, rx) = oneshot::channel();
            self.pending.borrow_mut().insert(page, rx);
            tx
        }
    }

    impl PageSource<u64> for ManualSource {
        fn fetch_page(&self, page: u32, _page_size: u32) -> LocalBoxFuture<'static, ApiResult<PageResult<u64>>> {
            let rx = self.pending.borrow_mut().remove(&page);
            async move {
                match rx {
                    Some(rx) => rx
                        .await
                        .unwrap_or_else(|_| Err(ApiError::Network("cancelled".into()))),
                    None => Err(ApiError::Network("unexpected page".into())),
                }
            }
            .boxed_local()
        }
    }

    #[test]
    fn load_applies_page_fields() {
        let source = CountingSource::new(47);
        let list = PagedListController::<u64>::new(source.clone(), 10);
        assert_eq!(list.state().status, ListStatus::Idle);

        let outcome = block_on(list.load(1, 10)).unwrap();

        let state = list.state();
        assert_eq!(outcome, LoadOutcome::Applied);
        assert_eq!(state.status, ListStatus::Loaded);
        assert_eq!(state.items.len(), 10);
        assert_eq!(state.current_page, 1);
        assert_eq!(state.page_count, 5);
        assert_eq!(state.total_count, 47);
        assert_eq!(*source.requests.borrow(), vec![(1, 10)]);
    }

    #[test]
    fn load_marks_loading_before_the_response() {
        let source = Rc::new(ManualSource::default());
        let tx = source.expect(1);
        let list = PagedListController::<u64>::new(source.clone(), 10);

        let pending = list.load(1, 10);
        assert!(list.state().is_loading());

        tx.send(Ok(PageResult::new(vec![1, 2], 1, 1, 2))).unwrap();
        block_on(pending).unwrap();
        assert_eq!(list.state().status, ListStatus::Loaded);
    }

    #[test]
    fn failed_load_keeps_previous_items() {
        let source = CountingSource::new(47);
        let list = PagedListController::<u64>::new(source.clone(), 10);
        block_on(list.load(2, 10)).unwrap();

        source.fail_next.set(true);
        let err = block_on(list.load(3, 10)).unwrap_err();

        let state = list.state();
        assert_eq!(err, ApiError::Network("Network error: offline".into()));
        assert_eq!(state.status, ListStatus::Errored);
        assert_eq!(state.error.as_deref(), Some("Network error: offline"));
        assert_eq!(state.current_page, 2);
        assert_eq!(state.items, (10..20).collect::<Vec<u64>>());
    }

    #[test]
    fn page_zero_is_rejected_without_fetching() {
        let source = CountingSource::new(47);
        let list = PagedListController::<u64>::new(source.clone(), 10);

        let err = block_on(list.load(0, 10)).unwrap_err();

        assert!(matches!(err, ApiError::Validation(_)));
        assert_eq!(list.state().status, ListStatus::Idle);
        assert!(source.requests.borrow().is_empty());
    }

    #[test]
    fn go_to_page_ignores_out_of_range_targets() {
        let source = CountingSource::new(47);
        let list = PagedListController::<u64>::new(source.clone(), 10);
        // Sin páginas conocidas todavía
        assert!(list.go_to_page(1).is_none());

        block_on(list.load(1, 10)).unwrap();
        assert!(list.go_to_page(0).is_none());
        assert!(list.go_to_page(6).is_none());
        assert!(list.previous_page().is_none());

        block_on(list.go_to_page(5).unwrap()).unwrap();
        assert_eq!(list.current_page(), 5);
        assert_eq!(list.state().items, vec![40, 41, 42, 43, 44, 45, 46]);
        assert!(list.next_page().is_none());
        assert_eq!(source.requests.borrow().len(), 2);
    }

    #[test]
    fn go_to_current_page_reloads() {
        let source = CountingSource::new(47);
        let list = PagedListController::<u64>::new(source.clone(), 10);
        block_on(list.load(2, 10)).unwrap();
        let before = list.state();

        block_on(list.go_to_page(2).unwrap()).unwrap();

        assert_eq!(source.requests.borrow().len(), 2);
        assert_eq!(list.state(), before);
    }

    #[test]
    fn stale_responses_are_discarded() {
        let source = Rc::new(ManualSource::default());
        let tx_first = source.expect(1);
        let tx_second = source.expect(2);
        let list = PagedListController::<u64>::new(source.clone(), 10);

        let first = list.load(1, 10);
        let second = list.load(2, 10);

        // La segunda petición resuelve antes que la primera
        tx_second.send(Ok(PageResult::new(vec![20, 21], 2, 3, 25))).unwrap();
        assert_eq!(block_on(second).unwrap(), LoadOutcome::Applied);

        tx_first.send(Ok(PageResult::new(vec![10, 11], 1, 3, 25))).unwrap();
        assert_eq!(block_on(first).unwrap(), LoadOutcome::Superseded);

        let state = list.state();
        assert_eq!(state.current_page, 2);
        assert_eq!(state.items, vec![20, 21]);
        assert_eq!(state.status, ListStatus::Loaded);
    }

    #[test]
    fn stale_errors_are_discarded_too() {
        let source = Rc::new(ManualSource::default());
        let tx_first = source.expect(1);
        let tx_second = source.expect(2);
        let list = PagedListController::<u64>::new(source.clone(), 10);

        let first = list.load(1, 10);
        let second = list.load(2, 10);

        tx_first.send(Err(ApiError::Network("timeout".into()))).unwrap();
        assert_eq!(block_on(first).unwrap(), LoadOutcome::Superseded);
        assert!(list.state().is_loading());

        tx_second.send(Ok(PageResult::new(vec![7], 2, 2, 11))).unwrap();
        block_on(second).unwrap();
        assert_eq!(list.state().error, None);
    }

    #[test]
    fn window_follows_current_page() {
        let source = CountingSource::new(200);
        let list = PagedListController::<u64>::new(source, 10);
        assert!(list.window().is_empty());

        block_on(list.load(7, 10)).unwrap();
        assert_eq!(list.window(), vec![5, 6, 7, 8, 9]);
        assert!(list.has_previous());
        assert!(list.has_next());

        let narrow = list.clone().with_window_size(3);
        assert_eq!(narrow.window(), vec![6, 7, 8]);
    }

    #[test]
    fn refresh_reuses_current_page_and_size() {
        let source = CountingSource::new(47);
        let list = PagedListController::<u64>::new(source.clone(), 10);
        block_on(list.load(3, 5)).unwrap();

        block_on(list.refresh()).unwrap();

        assert_eq!(*source.requests.borrow(), vec![(3, 5), (3, 5)]);
        assert_eq!(list.page_size(), 5);
    }

    #[test]
    fn subscribers_observe_state_machine() {
        let source = CountingSource::new(47);
        let list = PagedListController::<u64>::new(source.clone(), 10);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let seen_clone = Rc::clone(&seen);
        list.subscribe(move |s| seen_clone.borrow_mut().push(s.status));

        block_on(list.load(1, 10)).unwrap();
        source.fail_next.set(true);
        let _ = block_on(list.refresh());

        assert_eq!(
            *seen.borrow(),
            vec![
                ListStatus::Loading,
                ListStatus::Loaded,
                ListStatus::Loading,
                ListStatus::Errored
            ]
        );
    }

    #[test]
    fn weak_handle_does_not_keep_controller_alive() {
        let source = CountingSource::new(47);
        let list = PagedListController::<u64>::new(source, 10);
        let weak = list.downgrade();
        assert!(weak.upgrade().is_some());

        drop(list);

        assert!(weak.upgrade().is_none());
    }

    #[test]
    fn shrinking_collection_keeps_current_page_in_range() {
        let source = CountingSource::new(50);
        let list = PagedListController::<u64>::new(source.clone(), 10);
        block_on(list.load(1, 10)).unwrap();
        block_on(list.go_to_page(5).unwrap()).unwrap();
        assert_eq!(list.current_page(), 5);

        source.total.set(30);
        block_on(list.refresh()).unwrap();

        let state = list.state();
        assert_eq!(state.page_count, 3);
        assert!(state.current_page >= 1 && state.current_page <= state.page_count);
        assert_eq!(state.current_page, 3);
        assert!(list.window().contains(&state.current_page));
        assert!(!list.has_next());
    }
}
