use tailwind_lookup::classifier::is_utility;
use tailwind_lookup::lookup::{Bundled, ClassDb, Dataset, Declaration, MAX_SEARCH_RESULTS};

fn table() -> ClassDb {
    tailwind_lookup::bundled_table().expect("bundled table parses")
}

#[test]
fn bundled_table_size() {
    let table = table();
    assert!(table.len() > 2000, "only {} entries", table.len());
    assert!(table.len() < 5000, "{} entries", table.len());
}

#[test]
fn well_known_declarations() {
    let table = table();
    assert_eq!(table.get("p-4"), Some("padding: 1rem"));
    assert_eq!(table.get("m-0"), Some("margin: 0px"));
    assert_eq!(table.get("hidden"), Some("display: none"));
    assert_eq!(table.get("flex"), Some("display: flex"));
    assert_eq!(table.get("text-white"), Some("color: #ffffff"));
    assert_eq!(table.get("bg-blue-500"), Some("background-color: #3b82f6"));
}

#[test]
fn variant_lookup_against_bundled_table() {
    let table = table();
    assert_eq!(table.lookup("md:hover:p-4"), Some("padding: 1rem"));
    assert_eq!(
        table.declaration("!bg-blue-500"),
        Some(Declaration {
            property: Some("background-color"),
            value: "#3b82f6",
        })
    );
}

#[test]
fn full_color_palette() {
    let table = table();
    let colors = [
        "slate", "gray", "zinc", "neutral", "stone", "red", "orange", "amber", "yellow", "lime",
        "green", "emerald", "teal", "cyan", "sky", "blue", "indigo", "violet", "purple", "fuchsia",
        "pink", "rose",
    ];
    let shades = [50, 100, 200, 300, 400, 500, 600, 700, 800, 900, 950];
    for prefix in ["text", "bg", "border"] {
        for color in colors {
            for shade in shades {
                let name = format!("{prefix}-{color}-{shade}");
                assert!(table.get(&name).is_some(), "missing {name}");
            }
        }
    }
}

#[test]
fn common_entries_are_classified_as_utilities() {
    let table = table();
    for name in [
        "p-4",
        "bg-blue-500",
        "text-white",
        "hidden",
        "sr-only",
        "rounded-lg",
        "grid-cols-3",
    ] {
        assert!(table.get(name).is_some(), "missing {name}");
        assert!(is_utility(name), "{name} not recognised");
    }
}

#[test]
fn every_entry_has_a_declaration() {
    for entry in table().iter() {
        let decl = Declaration::split(&entry.declaration);
        assert!(decl.property.is_some(), "{} has no property: {:?}", entry.name, entry.declaration);
        assert!(!decl.value.is_empty(), "{} has an empty value", entry.name);
    }
}

#[test]
fn popup_search_on_bundled_table() {
    let table = table();
    let hits = table.search("  Blue-5 ", MAX_SEARCH_RESULTS);
    assert!(!hits.is_empty());
    assert!(hits.len() <= MAX_SEARCH_RESULTS);
    assert!(hits.iter().all(|h| h.name.contains("blue-5")));
    assert!(hits.windows(2).all(|w| w[0].name.len() <= w[1].name.len()));

    let exact = table.search("flex", MAX_SEARCH_RESULTS);
    assert_eq!(exact[0].name, "flex");
    assert!(exact[0].exact);
    assert!(exact[1..].iter().all(|h| !h.exact));
}

#[test]
fn dataset_loads_bundled_source_once() {
    let mut dataset = Dataset::new();
    let len = dataset.load_from(&Bundled).len();
    assert_eq!(len, table().len());
    assert_eq!(dataset.table().map(ClassDb::len), Some(len));
}
