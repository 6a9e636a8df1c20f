//! End-to-end resolution over a JSON catalog.

use turbo_variants::prelude::*;

fn tee() -> Product {
    Product::from_json(include_str!("fixtures/tee.json")).expect("fixture parses")
}

fn codes(chain: &AttributeChain<'_>, type_id: &str) -> Option<Vec<String>> {
    chain
        .get(&type_id.into())
        .map(|link| link.codes().into_iter().map(String::from).collect())
}

#[test]
fn fixture_is_valid() {
    let product = tee();
    assert!(product.validate().is_ok());
    assert_eq!(product.variants.len(), 5);
}

#[test]
fn chain_narrows_level_by_level() {
    let product = tee();
    let variant = product.variant(&"tee-l-red-logo".into()).unwrap();
    let chain = build_attribute_chain(&product, variant);

    let titles: Vec<_> = chain.iter().map(|l| l.attribute_type.title.as_str()).collect();
    assert_eq!(titles, vec!["Size", "Color", "Print"]);
    assert_eq!(codes(&chain, "attr-size").unwrap(), vec!["S", "M", "L"]);
    assert_eq!(codes(&chain, "attr-color").unwrap(), vec!["red", "black"]);
    assert_eq!(codes(&chain, "attr-print").unwrap(), vec!["logo", "plain"]);

    let variant = product.variant(&"tee-l-black-plain".into()).unwrap();
    let chain = build_attribute_chain(&product, variant);
    assert_eq!(codes(&chain, "attr-print").unwrap(), vec!["plain"]);
}

#[test]
fn chain_omits_levels_no_variant_reaches() {
    let product = tee();
    let variant = product.variant(&"tee-m-blue".into()).unwrap();
    let chain = build_attribute_chain(&product, variant);

    assert_eq!(chain.len(), 2);
    assert_eq!(codes(&chain, "attr-color").unwrap(), vec!["blue"]);
    assert!(codes(&chain, "attr-print").is_none());
}

#[test]
fn chain_serializes_as_types_with_values() {
    let product = tee();
    let variant = product.variant(&"tee-s-red".into()).unwrap();
    let json = serde_json::to_value(build_attribute_chain(&product, variant)).unwrap();

    assert_eq!(json[0]["title"], "Size");
    assert_eq!(json[0]["position"], 0);
    assert_eq!(json[1]["id"], "attr-color");
    assert_eq!(json[1]["values"][0]["code"], "red");
    assert_eq!(json[1]["values"].as_array().unwrap().len(), 1);
}

#[test]
fn every_variant_resolves_to_itself() {
    let product = tee();
    for variant in &product.variants {
        let selections = SelectedAttributes::from_variant(variant, &product);
        let by_attributes =
            find_variant_by_attributes(&product, selections.as_slice(), MatchMode::Exact);
        assert_eq!(by_attributes.map(|v| &v.id), Some(&variant.id));

        let by_params =
            find_variant_by_attribute_params(&product, &variant.to_params(), MatchMode::Exact);
        assert_eq!(by_params.map(|v| &v.id), Some(&variant.id));
    }
}

#[test]
fn partial_params_return_earliest_full_match() {
    let product = tee();
    let params: SelectionParams = [("size", "L"), ("color", "red")].into_iter().collect();
    let variant = find_variant_by_attribute_params(&product, &params, MatchMode::Exact).unwrap();
    assert_eq!(variant.id.as_str(), "tee-l-red-logo");
}

#[test]
fn structured_and_flat_matchers_rank_differently() {
    let product = tee();

    // Blue in L does not exist. The structured matcher honours the
    // top-priority color; the flat matcher takes the first variant that
    // matches as many params as any other.
    let selections = SelectedAttributes::new()
        .with("attr-color", "blue")
        .with("attr-size", "L");
    let structured =
        find_variant_by_attributes(&product, selections.as_slice(), MatchMode::Closest).unwrap();
    assert_eq!(structured.id.as_str(), "tee-m-blue");

    let params: SelectionParams = [("color", "blue"), ("size", "L")].into_iter().collect();
    let flat = find_variant_by_attribute_params(&product, &params, MatchMode::Closest).unwrap();
    assert_eq!(flat.id.as_str(), "tee-l-black-plain");

    assert!(find_variant_by_attributes(&product, selections.as_slice(), MatchMode::Exact).is_none());
    assert!(find_variant_by_attribute_params(&product, &params, MatchMode::Exact).is_none());
}

#[test]
fn closest_match_is_always_owned() {
    let product = tee();
    let params: SelectionParams = [("size", "XXL"), ("print", "stripes")].into_iter().collect();
    let variant = find_variant_by_attribute_params(&product, &params, MatchMode::Closest).unwrap();
    assert!(product.owns_variant(variant));

    let selections = [AttributeSelection::new("attr-print", "stripes")];
    let variant = find_variant_by_attributes(&product, &selections, MatchMode::Closest).unwrap();
    assert!(product.owns_variant(variant));
}

#[test]
fn empty_catalog_resolves_nothing() {
    let product = Product::from_json(r#"{ "id": "p-none" }"#).unwrap();
    let params: SelectionParams = [("size", "L")].into_iter().collect();
    let selections = [AttributeSelection::new("attr-size", "L")];

    for mode in [MatchMode::Closest, MatchMode::Exact] {
        assert!(find_variant_by_attribute_params(&product, &params, mode).is_none());
        assert!(find_variant_by_attributes(&product, &selections, mode).is_none());
    }
    assert!(VariantResolver::new(&product).default_variant().is_none());
}

#[test]
fn picker_flow_through_resolver() {
    let product = tee();
    let resolver = VariantResolver::try_new(&product, ResolverConfig::default()).unwrap();

    let params: SelectionParams = [("size", "L"), ("color", "red"), ("print", "plain")]
        .into_iter()
        .collect();
    let current = resolver.resolve_params(&params).unwrap();
    assert_eq!(current.id.as_str(), "tee-l-red-plain");

    let next = resolver.select(current, "attr-print", "logo").unwrap();
    assert_eq!(next.variant.id.as_str(), "tee-l-red-logo");
    assert_eq!(codes(&next.chain, "attr-print").unwrap(), vec!["logo", "plain"]);

    // Medium only comes in blue: the size change wins, color follows.
    let next = resolver.select(next.variant, "attr-size", "M").unwrap();
    assert_eq!(next.variant.id.as_str(), "tee-m-blue");
    assert!(codes(&next.chain, "attr-print").is_none());

    // Back to large keeps nothing else, so the first large variant is used.
    let next = resolver.select(next.variant, "attr-size", "L").unwrap();
    assert_eq!(next.variant.id.as_str(), "tee-l-black-plain");
    assert_eq!(codes(&next.chain, "attr-color").unwrap(), vec!["red", "black"]);
    assert_eq!(next.variant.to_params().get("print"), Some("plain"));
}
