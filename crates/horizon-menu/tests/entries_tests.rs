//! Integration tests for filtering and selection on entry trees.

use horizon_menu::{
    Diagnostic, Entries, Entry, Group, Item, ItemSelection, build_entries,
};

fn setup() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn produce(policy: ItemSelection) -> Entries<&'static str> {
    build_entries(|s: &&str| s.to_string(), policy, |b| {
        b.item("basket");
        b.separator();
        b.group(Some("Fruits"), |g| {
            g.item("apple").item("banana").separator().item("cherry");
        });
        b.group(Some("Veg"), |g| {
            g.item("carrot").item("potato");
        });
        b.item("bag");
    })
}

fn selected(entries: &Entries<&'static str>) -> Vec<&'static str> {
    entries.selection().iter().map(|item| *item.item()).collect()
}

fn labels(entries: &[Entry<&'static str>]) -> Vec<String> {
    entries
        .iter()
        .map(|entry| match entry {
            Entry::Group(group) => {
                let children: Vec<&str> = group.items().map(|item| *item.item()).collect();
                format!("{}{:?}", group.title().unwrap_or_default(), children)
            }
            Entry::Item(item) => item.item().to_string(),
            Entry::Separator => "-".to_string(),
        })
        .collect()
}

#[test]
fn test_fruits_and_veg_scenario() {
    setup();
    let entries = build_entries(|s: &&str| s.to_string(), ItemSelection::SinglePerGroup, |b| {
        b.group(Some("Fruits"), |g| {
            g.item("apple").item("banana");
        });
        b.group(Some("Veg"), |g| {
            g.item("carrot").item("potato");
        });
    });

    let entries = entries.select(&"banana");
    assert_eq!(selected(&entries), vec!["banana"]);

    let entries = entries.select(&"carrot");
    assert_eq!(selected(&entries), vec!["banana", "carrot"]);

    let entries = entries.select(&"apple");
    assert_eq!(selected(&entries), vec!["apple", "carrot"]);
}

#[test]
fn test_unknown_selection_is_noop() {
    setup();
    for policy in [ItemSelection::Single, ItemSelection::SinglePerGroup, ItemSelection::Multiple] {
        let entries = produce(policy).select(&"apple");
        let outcome = entries.select_diagnosed(&"mango");
        assert_eq!(outcome.value, entries);
        assert_eq!(
            outcome.diagnostics,
            vec![Diagnostic::UnknownSelectionTarget { id: "mango".into() }]
        );
        assert_eq!(entries.select(&"mango"), entries);
    }
}

#[test]
fn test_operations_leave_receiver_untouched() {
    setup();
    let entries = produce(ItemSelection::Multiple).select(&"carrot");
    let before: Vec<Entry<&str>> = entries.all().to_vec();

    let _ = entries.filter(|s| s.len() > 5);
    let _ = entries.clear_filter();
    let _ = entries.select(&"apple");
    let _ = entries.select(&"carrot");

    assert_eq!(entries.all(), before.as_slice());
    assert_eq!(selected(&entries), vec!["carrot"]);
}

#[test]
fn test_filter_keeps_selection() {
    setup();
    let entries = produce(ItemSelection::Multiple)
        .select(&"banana")
        .select(&"potato")
        .select(&"bag");

    let predicates: [fn(&&str) -> bool; 4] = [
        |_| true,
        |_| false,
        |s| s.starts_with('b'),
        |s| s.contains('o'),
    ];
    for predicate in predicates {
        let filtered = entries.filter(predicate);
        assert_eq!(filtered.selection(), entries.selection());
        assert_eq!(filtered.single_selection(), entries.single_selection());
    }
}

#[test]
fn test_groups_without_matches_are_dropped() {
    setup();
    let entries = produce(ItemSelection::Single);

    let filtered = entries.filter(|s| s.starts_with('b'));
    assert_eq!(
        labels(&filtered.entries()),
        vec!["basket", "-", "Fruits[\"banana\"]", "bag"]
    );

    let filtered = entries.filter(|s| s.starts_with('p'));
    assert_eq!(labels(&filtered.entries()), vec!["-", "Veg[\"potato\"]"]);
    assert_eq!(filtered.groups().len(), 1);
}

#[test]
fn test_filter_preserves_order() {
    setup();
    let entries = produce(ItemSelection::Single).filter(|s| *s != "banana" && *s != "carrot");

    assert_eq!(
        labels(&entries.entries()),
        vec!["basket", "-", "Fruits[\"apple\", \"cherry\"]", "Veg[\"potato\"]", "bag"]
    );

    let fruits = entries.groups().into_iter().next().unwrap();
    let children: Vec<String> = fruits
        .entries()
        .iter()
        .map(|entry| match entry {
            Entry::Item(item) => item.item().to_string(),
            _ => "-".to_string(),
        })
        .collect();
    assert_eq!(children, vec!["apple", "-", "cherry"]);
}

#[test]
fn test_single_is_exclusive_across_groups() {
    setup();
    let entries = produce(ItemSelection::Single);
    let entries = entries.select(&"apple").select(&"potato");
    assert_eq!(selected(&entries), vec!["potato"]);

    let entries = entries.select(&"bag");
    assert_eq!(selected(&entries), vec!["bag"]);
}

#[test]
fn test_single_per_group_is_independent() {
    setup();
    let entries = produce(ItemSelection::SinglePerGroup);
    let entries = entries.select(&"apple").select(&"carrot");
    assert_eq!(selected(&entries), vec!["apple", "carrot"]);

    let entries = entries.select(&"banana");
    assert_eq!(selected(&entries), vec!["banana", "carrot"]);
}

#[test]
fn test_multiple_toggle_restores_state() {
    setup();
    let entries = produce(ItemSelection::Multiple).select(&"potato");
    let toggled = entries.select(&"cherry");
    assert_eq!(selected(&toggled), vec!["cherry", "potato"]);

    let restored = toggled.select(&"cherry");
    assert_eq!(restored.all(), entries.all());
}

#[test]
fn test_disabled_items_can_still_be_selected() {
    setup();
    let entries = build_entries(|s: &&str| s.to_string(), ItemSelection::Single, |b| {
        b.item_with("locked", |item| item.with_disabled(true));
    });
    let entries = entries.select(&"locked");
    assert!(entries.single_selection().unwrap().is_disabled());
}

#[test]
fn test_nested_group_passes_through_with_diagnostic() {
    setup();
    let inner = Group::new(Some("inner"), vec![Item::new("deep").into()]);
    let inner_id = inner.id().clone();
    let outer = Group::new(Some("outer"), vec![Item::new("shallow").into(), inner.into()]);
    let outer_id = outer.id().clone();

    let entries = Entries::new(
        |s: &&str| s.to_string(),
        ItemSelection::Single,
        vec![outer.into()],
    )
    .with_log_diagnostics(false);

    let expected = vec![Diagnostic::NestedGroup {
        parent: outer_id.clone(),
        child: inner_id.clone(),
    }];

    let filtered = entries.filtered();
    assert_eq!(filtered.diagnostics, expected);
    let nested = filtered.value[0].as_group().unwrap().entries()[1].as_group().unwrap();
    assert_eq!(nested.id(), &inner_id);
    assert_eq!(nested.items().count(), 1);

    let outcome = entries.select_diagnosed(&"shallow");
    assert_eq!(outcome.diagnostics, expected);
    assert_eq!(selected(&outcome.value), vec!["shallow"]);

    // Items below a nested group are not reachable
    let outcome = entries.select_diagnosed(&"deep");
    assert_eq!(
        outcome.diagnostics,
        vec![Diagnostic::UnknownSelectionTarget { id: "deep".into() }]
    );

    match entries.validate() {
        Err(horizon_menu::Error::NestedGroup { parent, child }) => {
            assert_eq!(parent, outer_id);
            assert_eq!(child, inner_id);
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn test_display_formats() {
    setup();
    let group = Group::with_id(
        "fruits".into(),
        Some("Fruits"),
        vec![
            Item::new("apple").with_description("red").into(),
            Entry::Separator,
        ],
    );
    assert_eq!(
        group.to_string(),
        "Group(id=fruits, entries=[Item(item=apple, disabled=false, selected=false, description=red, group=fruits), Separator])"
    );
}
