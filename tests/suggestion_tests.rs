use proptest::prelude::*;
use wordle_client::{SuggestionList, SuggestionPage};

fn page_of(offset: usize, limit: usize, count: usize) -> SuggestionPage {
    SuggestionPage {
        suggestions: (offset..count.min(offset + limit))
            .map(|i| format!("W{:04}", i))
            .collect(),
        count,
    }
}

#[test]
fn test_refresh_starts_at_zero_and_clears() {
    let mut list = SuggestionList::new(3);
    let first = list.begin_refresh();
    assert!(list.accept(first, page_of(0, 3, 7)));
    assert_eq!(list.words().len(), 3);

    let again = list.begin_refresh();
    assert_eq!(again.offset, 0);
    assert_eq!(again.limit, 3);
    assert!(list.words().is_empty());
    assert_eq!(list.count(), 0);
}

#[test]
fn test_load_more_appends_pages() {
    let mut list = SuggestionList::new(3);
    let first = list.begin_refresh();
    list.accept(first, page_of(0, 3, 7));
    assert!(list.can_load_more());

    let second = list.begin_load_more().unwrap();
    assert_eq!(second.offset, 3);
    list.accept(second, page_of(3, 3, 7));
    let third = list.begin_load_more().unwrap();
    assert_eq!(third.offset, 6);
    list.accept(third, page_of(6, 3, 7));

    assert_eq!(list.words().len(), 7);
    assert_eq!(list.words()[0], "W0000");
    assert_eq!(list.words()[6], "W0006");
    assert!(!list.has_more());
    assert_eq!(list.begin_load_more(), None);
}

#[test]
fn test_load_more_debounced_while_outstanding() {
    let mut list = SuggestionList::new(2);
    let first = list.begin_refresh();
    assert_eq!(list.begin_load_more(), None);
    list.accept(first, page_of(0, 2, 10));

    let second = list.begin_load_more().unwrap();
    assert!(list.is_loading());
    assert_eq!(list.begin_load_more(), None);
    list.accept(second, page_of(2, 2, 10));
    assert_eq!(list.words().len(), 4);
}

#[test]
fn test_superseded_page_is_ignored() {
    let mut list = SuggestionList::new(2);
    let first = list.begin_refresh();
    list.accept(first, page_of(0, 2, 10));
    let stale = list.begin_load_more().unwrap();

    // a refresh lands before the load-more response
    let fresh = list.begin_refresh();
    assert!(!list.accept(stale, page_of(2, 2, 10)));
    assert!(list.accept(fresh, page_of(0, 2, 4)));
    assert_eq!(list.words(), &["W0000".to_string(), "W0001".to_string()]);
    assert_eq!(list.count(), 4);
}

#[test]
fn test_oversized_page_is_capped() {
    let mut list = SuggestionList::new(2);
    let page = list.begin_refresh();
    list.accept(
        page,
        SuggestionPage {
            suggestions: vec!["AAAAA".into(), "BBBBB".into(), "CCCCC".into()],
            count: 1,
        },
    );
    assert_eq!(list.words(), &["AAAAA".to_string()]);
}

#[test]
fn test_failed_fetch_reenables_control() {
    let mut list = SuggestionList::new(2);
    let first = list.begin_refresh();
    list.accept(first, page_of(0, 2, 5));
    let second = list.begin_load_more().unwrap();
    list.fail(second);
    assert!(!list.is_loading());
    assert_eq!(list.begin_load_more(), Some(second));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn load_more_never_passes_count(count in 0usize..60, limit in 1usize..12, clicks in 0usize..20) {
        let mut list = SuggestionList::new(limit);
        let first = list.begin_refresh();
        list.accept(first, page_of(0, limit, count));
        for _ in 0..clicks {
            match list.begin_load_more() {
                Some(page) => {
                    prop_assert!(page.offset < count);
                    list.accept(page, page_of(page.offset, page.limit, count));
                }
                None => prop_assert!(!list.has_more()),
            }
            prop_assert!(list.words().len() <= count);
        }
    }
}
