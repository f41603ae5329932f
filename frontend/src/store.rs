//! Entity-keyed cache invalidation shared by every panel.
//!
//! Panels read server state through [`use_query`]; after a mutation they
//! call [`Store::invalidate`] and every mounted query over that entity (or
//! over something derived from it) refetches.

use std::future::Future;
use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::ApiClient;
use crate::error::ApiError;
use crate::scope::RequestScope;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Entity {
    Transactions,
    Budgets,
    Goals,
    Profile,
    Dashboard,
    Reports,
}

impl Entity {
    const COUNT: usize = 6;

    fn index(self) -> usize {
        self as usize
    }

    /// Entities whose server-side figures are computed from this one.
    pub fn dependents(self) -> &'static [Entity] {
        match self {
            Entity::Transactions => &[Entity::Dashboard, Entity::Reports, Entity::Goals, Entity::Budgets],
            _ => &[],
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Revisions {
    counters: [u32; Entity::COUNT],
}

impl Revisions {
    pub fn revision(&self, entity: Entity) -> u32 {
        self.counters[entity.index()]
    }

    fn bump(&mut self, entity: Entity) {
        let slot = &mut self.counters[entity.index()];
        *slot = slot.wrapping_add(1);
    }
}

impl Reducible for Revisions {
    type Action = Entity;

    fn reduce(self: Rc<Self>, entity: Entity) -> Rc<Self> {
        let mut next = (*self).clone();
        next.bump(entity);
        for dependent in entity.dependents() {
            next.bump(*dependent);
        }
        log::debug!("invalidated {:?}", entity);
        Rc::new(next)
    }
}

/// Handle given to components through context.
#[derive(Clone, PartialEq)]
pub struct Store {
    revisions: UseReducerHandle<Revisions>,
}

impl Store {
    pub fn revision(&self, entity: Entity) -> u32 {
        self.revisions.revision(entity)
    }

    pub fn invalidate(&self, entity: Entity) {
        self.revisions.dispatch(entity);
    }
}

#[derive(Properties, PartialEq)]
pub struct StoreProviderProps {
    pub children: Children,
}

#[function_component(StoreProvider)]
pub fn store_provider(props: &StoreProviderProps) -> Html {
    let revisions = use_reducer(Revisions::default);
    let store = Store { revisions };
    html! {
        <ContextProvider<Store> context={store}>
            { for props.children.iter() }
        </ContextProvider<Store>>
    }
}

/// The shared store, or a store local to the caller outside a provider.
#[hook]
pub fn use_store() -> Store {
    let local = use_reducer(Revisions::default);
    use_context::<Store>().unwrap_or(Store { revisions: local })
}

#[derive(Clone, Debug, PartialEq)]
pub enum QueryState<T> {
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> QueryState<T> {
    pub fn data(&self) -> Option<&T> {
        match self {
            QueryState::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, QueryState::Loading)
    }
}

/// Result of the last fetch together with the key it was fetched for.
pub struct Fetched<K, T> {
    key: K,
    state: Rc<QueryState<T>>,
}

/// What a query shows for `key`. Data fetched for another key is never
/// shown; data for the same key stays visible during a refetch.
pub fn visible_state<K: PartialEq, T>(fetched: Option<&Fetched<K, T>>, key: &K) -> Rc<QueryState<T>> {
    match fetched {
        Some(fetched) if fetched.key == *key => fetched.state.clone(),
        _ => Rc::new(QueryState::Loading),
    }
}

/// Runs `fetch` on mount and again whenever `key` changes or `entity` is
/// invalidated. After an invalidation the earlier data stays visible until
/// the refetch lands; after a key change the query reads as loading.
/// Leaving the page aborts the request.
#[hook]
pub fn use_query<T, K, F, Fut>(entity: Entity, key: K, fetch: F) -> Rc<QueryState<T>>
where
    T: 'static,
    K: PartialEq + Clone + 'static,
    F: FnOnce(ApiClient, K) -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let revision = use_store().revision(entity);
    let fetched = use_state(|| None::<Fetched<K, T>>);

    {
        let fetched = fetched.clone();
        use_effect_with_deps(
            move |(key, _revision)| {
                let scope = RequestScope::new();
                let client = ApiClient::default().with_signal(scope.signal());
                let key = key.clone();
                spawn_local(async move {
                    let state = match fetch(client, key.clone()).await {
                        Ok(data) => QueryState::Ready(data),
                        Err(err) if err.is_aborted() => return,
                        Err(err) => {
                            log::error!("loading {:?} failed: {}", entity, err);
                            QueryState::Failed(err.user_message())
                        }
                    };
                    fetched.set(Some(Fetched {
                        key,
                        state: Rc::new(state),
                    }));
                });
                move || drop(scope)
            },
            (key.clone(), revision),
        );
    }

    visible_state((*fetched).as_ref(), &key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalidation_bumps_only_the_entity_and_its_dependents() {
        let start = Rc::new(Revisions::default());
        let after = start.clone().reduce(Entity::Profile);
        assert_eq!(after.revision(Entity::Profile), 1);
        assert_eq!(after.revision(Entity::Transactions), 0);
        assert_eq!(after.revision(Entity::Dashboard), 0);
    }

    #[test]
    fn transactions_cascade_to_derived_views() {
        let after = Rc::new(Revisions::default()).reduce(Entity::Transactions);
        for entity in [
            Entity::Transactions,
            Entity::Dashboard,
            Entity::Reports,
            Entity::Goals,
            Entity::Budgets,
        ] {
            assert_eq!(after.revision(entity), 1, "{:?}", entity);
        }
        assert_eq!(after.revision(Entity::Profile), 0);
    }

    #[test]
    fn data_for_another_key_reads_as_loading() {
        let february = Fetched {
            key: (2u32, 2024),
            state: Rc::new(QueryState::Ready("february report")),
        };
        assert!(visible_state(Some(&february), &(3u32, 2024)).is_loading());
        assert_eq!(
            visible_state(Some(&february), &(2u32, 2024)).data(),
            Some(&"february report")
        );
        assert!(visible_state::<(u32, i32), &str>(None, &(2, 2024)).is_loading());
    }
}
