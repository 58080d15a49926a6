//! Catalog Client and Selection Tests
//!
//! Runs against an in-memory transport that records every requested URL.

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::HashSet;

    use async_trait::async_trait;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use serde_json::{json, Value};

    use crate::catalog::{
        category_pool, dedup_by_name, fallback_categories, random_ids, run_cycle, select_items,
        CatalogClient, ItemKey, Transport,
    };
    use crate::config::{CatalogConfig, API_BASE};
    use crate::error::{FetchError, FetchResult};
    use crate::filter::FilterState;
    use crate::models::{NamedResource, PLACEHOLDER_IMAGE};

    type Responder = Box<dyn Fn(&str) -> Option<Value>>;

    struct MockTransport {
        respond: Responder,
        calls: RefCell<Vec<String>>,
    }

    impl MockTransport {
        fn new(respond: impl Fn(&str) -> Option<Value> + 'static) -> Self {
            Self {
                respond: Box::new(respond),
                calls: RefCell::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }

        fn calls_under(&self, prefix: &str) -> Vec<String> {
            self.calls().into_iter().filter(|u| u.starts_with(prefix)).collect()
        }
    }

    #[async_trait(?Send)]
    impl Transport for MockTransport {
        async fn get_json(&self, url: &str) -> FetchResult<Value> {
            self.calls.borrow_mut().push(url.to_string());
            (self.respond)(url).ok_or_else(|| FetchError::Status {
                status: 404,
                url: url.to_string(),
            })
        }
    }

    fn client(transport: MockTransport) -> CatalogClient<MockTransport> {
        CatalogClient::new(transport, CatalogConfig::default())
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    fn pokemon_prefix() -> String {
        format!("{}/pokemon/", API_BASE)
    }

    fn member(name: &str) -> NamedResource {
        NamedResource {
            name: name.to_string(),
            url: format!("{}/pokemon/{}/", API_BASE, name),
        }
    }

    /// Answers any `/pokemon/{id|name}` with a minimal record
    fn item_record(url: &str) -> Option<Value> {
        let key = url.strip_prefix(&pokemon_prefix())?.trim_end_matches('/');
        Some(match key.parse::<u32>() {
            Ok(id) => json!({"id": id, "name": format!("mon-{}", id)}),
            Err(_) => json!({"id": key.len(), "name": key}),
        })
    }

    fn category_detail(names: &[&str]) -> Value {
        let members: Vec<Value> = names
            .iter()
            .map(|n| json!({"slot": 1, "pokemon": member(n)}))
            .collect();
        json!({"name": "x", "pokemon": members})
    }

    fn generation_detail(names: &[String]) -> Value {
        let species: Vec<Value> = names
            .iter()
            .map(|n| json!({"name": n, "url": format!("{}/pokemon-species/{}/", API_BASE, n)}))
            .collect();
        json!({"name": "generation-i", "pokemon_species": species})
    }

    fn names(items: &[crate::models::Item]) -> Vec<String> {
        items.iter().filter_map(|i| i.name.clone()).collect()
    }

    // ========================
    // Client
    // ========================

    #[tokio::test]
    async fn test_categories_exclude_nonstandard() {
        let c = client(MockTransport::new(|url| {
            (url == format!("{}/type?limit=25", API_BASE)).then(|| {
                json!({"count": 4, "results": [
                    {"name": "normal", "url": ""},
                    {"name": "unknown", "url": ""},
                    {"name": "fire", "url": ""},
                    {"name": "shadow", "url": ""}
                ]})
            })
        }));

        assert_eq!(c.list_categories().await, vec!["normal", "fire"]);
    }

    #[tokio::test]
    async fn test_categories_fallback_on_failure() {
        let c = client(MockTransport::new(|_| None));
        let categories = c.list_categories().await;
        assert_eq!(categories.len(), 18);
        assert_eq!(categories, fallback_categories());

        let malformed = client(MockTransport::new(|_| Some(json!({"oops": true}))));
        assert_eq!(malformed.list_categories().await, fallback_categories());
    }

    #[tokio::test]
    async fn test_generations() {
        let c = client(MockTransport::new(|url| {
            (url == format!("{}/generation?limit=10", API_BASE)).then(|| {
                json!({"count": 2, "results": [
                    {"name": "generation-i", "url": ""},
                    {"name": "generation-ix", "url": ""}
                ]})
            })
        }));
        let gens = c.list_generations().await;
        let labels: Vec<&str> = gens.iter().map(|g| g.display_name.as_str()).collect();
        assert_eq!(labels, vec!["GEN I", "GEN IX"]);
        assert_eq!(gens[1].name, "generation-ix");

        let failing = client(MockTransport::new(|_| None));
        assert!(failing.list_generations().await.is_empty());
    }

    #[tokio::test]
    async fn test_collection_count() {
        let c = client(MockTransport::new(|url| {
            (url == format!("{}/pokemon?limit=1", API_BASE))
                .then(|| json!({"count": 1302, "results": [{"name": "bulbasaur", "url": ""}]}))
        }));
        assert_eq!(c.collection_count().await, Ok(1302));

        let failing = client(MockTransport::new(|_| None));
        assert!(failing.collection_count().await.is_err());
    }

    #[tokio::test]
    async fn test_item_urls() {
        let c = client(MockTransport::new(item_record));
        assert_eq!(c.item_url(&ItemKey::Id(25)), format!("{}/pokemon/25", API_BASE));
        assert_eq!(
            c.item_url(&ItemKey::Name("mr mime".into())),
            format!("{}/pokemon/mr%20mime", API_BASE)
        );

        let item = c.get_item(&ItemKey::Name("pikachu".into())).await.unwrap();
        assert_eq!(item.display_name(), "Pikachu");
    }

    #[tokio::test]
    async fn test_malformed_record_still_resolves() {
        let c = client(MockTransport::new(|url| {
            (url == format!("{}/pokemon/porygon", API_BASE)).then(|| {
                json!({"id": 137, "name": "porygon", "types": "normal", "sprites": "nope", "height": 8.5})
            })
        }));

        let item = c.get_item(&ItemKey::Name("porygon".into())).await.unwrap();
        assert_eq!(item.id, 137);
        assert!(item.types.is_empty());
        assert_eq!(item.image_src(), PLACEHOLDER_IMAGE);
        assert_eq!(item.weight_label(), "Unknown");
    }

    #[tokio::test]
    async fn test_malformed_record_does_not_fail_cycle() {
        let c = client(MockTransport::new(|url| {
            if url == format!("{}/type/normal", API_BASE) {
                Some(category_detail(&["porygon", "eevee"]))
            } else if url.contains("porygon") {
                Some(json!({"id": 137, "name": "porygon", "types": {"bad": true}, "weight": [1]}))
            } else {
                item_record(url)
            }
        }));
        let mut filter = FilterState::default();
        filter.toggle_category("normal");

        let items = run_cycle(&c, &filter, 6, 1010, &mut rng()).await.unwrap();
        assert_eq!(items.len(), 2);
        let mut got = names(&items);
        got.sort();
        assert_eq!(got, vec!["eevee", "porygon"]);
    }

    #[tokio::test]
    async fn test_type_listing_without_count() {
        let c = client(MockTransport::new(|url| {
            (url == format!("{}/type?limit=25", API_BASE))
                .then(|| json!({"results": [{"name": "fire"}, {"name": "water"}]}))
        }));
        assert_eq!(c.list_categories().await, vec!["fire", "water"]);

        let root = client(MockTransport::new(|url| {
            (url == format!("{}/pokemon?limit=1", API_BASE)).then(|| json!({"results": []}))
        }));
        assert!(root.collection_count().await.is_err());
    }

    // ========================
    // Selection helpers
    // ========================

    #[test]
    fn test_dedup_keeps_first_occurrence() {
        let pool = dedup_by_name(vec![member("a"), member("b"), member("a"), member("c"), member("b")]);
        let names: Vec<&str> = pool.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_random_ids_in_range() {
        let mut rng = rng();
        for total in [1u32, 3, 1010] {
            let ids = random_ids(total, 200, &mut rng);
            assert_eq!(ids.len(), 200);
            assert!(ids.iter().all(|id| (1..=total).contains(id)));
        }
        assert!(random_ids(0, 5, &mut rng).iter().all(|id| *id == 1));
    }

    // ========================
    // Strategies
    // ========================

    #[tokio::test]
    async fn test_random_strategy_issues_count_requests() {
        let c = client(MockTransport::new(item_record));
        let items = select_items(&c, &FilterState::default(), 6, 1010, &mut rng())
            .await
            .unwrap();

        assert_eq!(items.len(), 6);
        let calls = c.transport().calls();
        assert_eq!(calls.len(), 6);
        for url in calls {
            let id: u32 = url.strip_prefix(&pokemon_prefix()).unwrap().parse().unwrap();
            assert!((1..=1010).contains(&id));
        }
    }

    #[tokio::test]
    async fn test_single_category_smaller_than_count() {
        let c = client(MockTransport::new(|url| {
            if url == format!("{}/type/fire", API_BASE) {
                Some(category_detail(&["charmander", "vulpix", "ponyta"]))
            } else {
                item_record(url)
            }
        }));
        let mut filter = FilterState::default();
        filter.toggle_category("fire");

        let items = select_items(&c, &filter, 6, 1010, &mut rng()).await.unwrap();
        assert_eq!(items.len(), 3);
        let fire: HashSet<&str> = ["charmander", "vulpix", "ponyta"].into_iter().collect();
        assert!(names(&items).iter().all(|n| fire.contains(n.as_str())));
    }

    #[tokio::test]
    async fn test_category_union_is_deduplicated() {
        let c = client(MockTransport::new(|url| {
            if url == format!("{}/type/fire", API_BASE) {
                Some(category_detail(&["charmander", "charizard", "moltres"]))
            } else if url == format!("{}/type/flying", API_BASE) {
                Some(category_detail(&["pidgey", "charizard", "moltres"]))
            } else {
                item_record(url)
            }
        }));
        let categories = vec!["fire".to_string(), "flying".to_string()];

        let pool = category_pool(&c, &categories).await.unwrap();
        let pool_names: Vec<&str> = pool.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(pool_names, vec!["charmander", "charizard", "moltres", "pidgey"]);

        let mut filter = FilterState::default();
        filter.set_categories(categories);
        let items = select_items(&c, &filter, 6, 1010, &mut rng()).await.unwrap();
        let got = names(&items);
        let unique: HashSet<&String> = got.iter().collect();
        assert_eq!(got.len(), 4);
        assert_eq!(unique.len(), 4);
        assert!(got.iter().all(|n| pool_names.contains(&n.as_str())));
    }

    #[tokio::test]
    async fn test_generation_strategy_bounded_by_count_and_list() {
        let species: Vec<String> = (1..=10).map(|i| format!("species-{}", i)).collect();
        let listed = species.clone();
        let c = client(MockTransport::new(move |url| {
            if url == format!("{}/generation/generation-i", API_BASE) {
                Some(generation_detail(&listed))
            } else {
                item_record(url)
            }
        }));
        let mut filter = FilterState::default();
        filter.set_generation(Some("generation-i".into()));

        let items = select_items(&c, &filter, 6, 1010, &mut rng()).await.unwrap();
        assert_eq!(items.len(), 6);
        let got = names(&items);
        assert_eq!(got.iter().collect::<HashSet<_>>().len(), 6);
        assert!(got.iter().all(|n| species.contains(n)));

        let items = select_items(&c, &filter, 20, 1010, &mut rng()).await.unwrap();
        assert_eq!(items.len(), 10);
    }

    #[tokio::test]
    async fn test_generation_overrides_categories() {
        let c = client(MockTransport::new(|url| {
            if url == format!("{}/generation/generation-ii", API_BASE) {
                Some(generation_detail(&["chikorita".to_string(), "cyndaquil".to_string()]))
            } else {
                item_record(url)
            }
        }));
        let mut filter = FilterState::default();
        filter.toggle_category("fire");
        filter.set_generation(Some("generation-ii".into()));

        let items = select_items(&c, &filter, 6, 1010, &mut rng()).await.unwrap();
        assert_eq!(items.len(), 2);
        assert!(c.transport().calls_under(&format!("{}/type", API_BASE)).is_empty());
        assert_eq!(filter.categories(), ["fire"]);
    }

    #[tokio::test]
    async fn test_one_failure_fails_the_cycle() {
        let c = client(MockTransport::new(|url| {
            if url == format!("{}/type/ghost", API_BASE) {
                Some(category_detail(&["gastly", "missingno"]))
            } else if url.contains("missingno") {
                None
            } else {
                item_record(url)
            }
        }));
        let mut filter = FilterState::default();
        filter.toggle_category("ghost");

        assert!(select_items(&c, &filter, 6, 1010, &mut rng()).await.is_err());
        assert_eq!(run_cycle(&c, &filter, 6, 1010, &mut rng()).await, None);
    }

    #[tokio::test]
    async fn test_missing_category_fails_the_cycle() {
        let c = client(MockTransport::new(item_record));
        let mut filter = FilterState::default();
        filter.toggle_category("nope");
        assert_eq!(run_cycle(&c, &filter, 6, 1010, &mut rng()).await, None);
        assert!(c.transport().calls_under(&pokemon_prefix()).is_empty());
    }
}
