//! Property-based checks for the rule parser and matcher.

use filter_rules::{
    FilterDefinition, FilterOperation, FilterType, MatchType, SchemaObject, applies, parse,
};
use proptest::prelude::*;

fn operation_strategy() -> impl Strategy<Value = FilterOperation> {
    prop_oneof![Just(FilterOperation::Ignore), Just(FilterOperation::Keep)]
}

fn filter_type_strategy() -> impl Strategy<Value = FilterType> {
    prop_oneof![
        Just(FilterType::Schema),
        Just(FilterType::Type),
        Just(FilterType::Name),
        Just(FilterType::MultiPartName),
    ]
}

fn pattern_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_.*^$]{1,10}"
}

fn options_strategy() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec("[a-z][a-z0-9_]{0,6}", 0..3)
}

fn schema_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("dbo".to_owned()),
        Just("DBO".to_owned()),
        Just("dev".to_owned()),
        "[a-z]{0,5}",
    ]
}

fn regex_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("^dbo$".to_owned()),
        Just("[a-zA-Z]99.*".to_owned()),
        Just("Table".to_owned()),
        Just("^tmp_".to_owned()),
        Just(",".to_owned()),
        Just(".*".to_owned()),
    ]
}

proptest! {
    #[test]
    fn parse_never_panics_and_keeps_invariants(input in any::<String>()) {
        if let Ok(definition) = parse(&input) {
            prop_assert!(!definition.pattern().trim().is_empty());
            prop_assert!(definition.options().iter().all(|option| !option.is_empty()));
        }
    }

    #[test]
    fn parse_is_deterministic(
        input in "(Ignore|Keep)?(Schema|Type|Name|MultiPartName)?!?\\(?[a-z, ]{0,8}\\)?"
    ) {
        prop_assert_eq!(parse(&input), parse(&input));
    }

    #[test]
    fn generated_rules_parse_to_expected_fields(
        operation in operation_strategy(),
        filter_type in filter_type_strategy(),
        negated in any::<bool>(),
        pattern in pattern_strategy(),
        options in options_strategy(),
    ) {
        let mut content = pattern.clone();
        for option in &options {
            content.push_str(", ");
            content.push_str(option);
        }
        let marker = if negated { "!" } else { "" };
        let rule = format!("{operation}{filter_type}{marker}({content})");

        let definition = parse(&rule).unwrap();
        prop_assert_eq!(definition.operation(), operation);
        prop_assert_eq!(definition.match_type().is_negated(), negated);

        let verbatim = filter_type == FilterType::MultiPartName
            || (filter_type == FilterType::Name && !options.is_empty());
        if verbatim {
            prop_assert_eq!(definition.filter_type(), FilterType::MultiPartName);
            prop_assert_eq!(definition.pattern(), content.as_str());
            prop_assert!(definition.options().is_empty());
        } else {
            prop_assert_eq!(definition.filter_type(), filter_type);
            prop_assert_eq!(definition.pattern(), pattern.as_str());
            prop_assert_eq!(definition.options(), options.as_slice());
        }
    }

    #[test]
    fn display_round_trips(
        operation in operation_strategy(),
        filter_type in filter_type_strategy(),
        negated in any::<bool>(),
        pattern in pattern_strategy(),
    ) {
        let marker = if negated { "!" } else { "" };
        let definition = parse(&format!("{operation}{filter_type}{marker}({pattern})")).unwrap();
        let reparsed: FilterDefinition = definition.to_string().parse().unwrap();
        prop_assert_eq!(reparsed, definition);
    }

    #[test]
    fn negation_inverts_every_verdict(
        filter_type in filter_type_strategy(),
        pattern in regex_strategy(),
        qualifier in proptest::option::of(schema_strategy()),
        object_type in "[A-Z][a-z]{0,8}",
        schema in schema_strategy(),
        containing_schema in proptest::option::of(schema_strategy()),
        name in "[a-zA-Z0-9_]{0,10}",
    ) {
        let mut plain = FilterDefinition::ignore(filter_type, pattern);
        if let Some(qualifier) = qualifier {
            plain = plain.with_option(qualifier);
        }
        let negated = plain.clone().with_match_type(MatchType::DoesNotMatch);

        let mut object = SchemaObject::new(object_type, schema, name);
        if let Some(containing_schema) = containing_schema {
            object = object.with_containing_schema(containing_schema);
        }

        prop_assert_eq!(
            applies(&negated, &object).unwrap(),
            !applies(&plain, &object).unwrap()
        );
    }
}
