//! Property-based tests for zone lookup and request rendering

use proptest::prelude::*;

use hk_api::{ApiError, Request, ZoneRegistry, DEFAULT_ZONES};

// ============================================================================
// Strategies
// ============================================================================

/// Zone names like "Zone 4" or "Kitchen"
fn zone_name_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        (1u8..10).prop_map(|n| format!("Zone {}", n)),
        "[A-Z][a-z]{2,10}( [A-Z][a-z]{2,8})?",
    ]
}

fn zone_list_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(zone_name_strategy(), 1..8)
}

/// Text without placeholder braces
fn plain_text_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z0-9 _-]{0,20}"
}

// ============================================================================
// Zone lookup
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Every constructed name resolves to itself
    #[test]
    fn prop_every_constructed_zone_resolves(names in zone_list_strategy()) {
        let registry = ZoneRegistry::new(names.clone());
        for name in &names {
            prop_assert_eq!(registry.resolve(name).unwrap(), name.as_str());
        }
    }

    /// Names outside the set fail with InvalidZone naming the input
    #[test]
    fn prop_unknown_zone_is_rejected(
        names in zone_list_strategy(),
        candidate in zone_name_strategy(),
    ) {
        prop_assume!(!names.contains(&candidate));
        let registry = ZoneRegistry::new(names);
        match registry.resolve(&candidate) {
            Err(ApiError::InvalidZone(name)) => prop_assert_eq!(name, candidate),
            other => prop_assert!(false, "expected InvalidZone, got {:?}", other),
        }
    }

    /// The registry holds each distinct name once, in first-seen order
    #[test]
    fn prop_registry_dedups_in_order(names in zone_list_strategy()) {
        let registry = ZoneRegistry::new(names.clone());

        let mut expected: Vec<&str> = Vec::new();
        for name in &names {
            if !expected.contains(&name.as_str()) {
                expected.push(name);
            }
        }
        prop_assert_eq!(registry.names().collect::<Vec<_>>(), expected);
    }

    /// Defaults are only valid when no names were given
    #[test]
    fn prop_defaults_only_when_empty(names in zone_list_strategy()) {
        let registry = ZoneRegistry::new(names.clone());
        for default in DEFAULT_ZONES {
            prop_assert_eq!(registry.contains(default), names.iter().any(|n| n == default));
        }
    }
}

// ============================================================================
// Request rendering
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Rendering is exact substitution followed by a trim
    #[test]
    fn prop_render_is_exact_substitution(
        action in plain_text_strategy(),
        zone in plain_text_strategy(),
        parameter in proptest::option::of(plain_text_strategy()),
    ) {
        let mut request = Request::new(action.clone(), zone.clone());
        request.parameter = parameter.clone();

        let rendered = request.render("<r>{{ name }}|{{ zone }}|{{ para }}</r>");
        let expected = format!(
            "<r>{}|{}|{}</r>",
            action,
            zone,
            parameter.unwrap_or_default()
        );
        prop_assert_eq!(rendered, expected);
    }
}
