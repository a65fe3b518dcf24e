use crate::actions::types::{CardStatus, CardType};
use crate::actions::ActionPolicy;

/// Check if `action` is permitted for a card of the given type and status.
/// Unknown actions and unlisted pairs are simply not permitted, never an
/// error.
pub fn is_permitted(
    policy: &ActionPolicy,
    action: &str,
    card_type: CardType,
    card_status: CardStatus,
) -> bool {
    policy
        .rule(action)
        .map(|rule| rule.allows(card_type, card_status))
        .unwrap_or(false)
}

/// Resolve the full set of actions permitted for the given (type, status)
/// pair.
///
/// The result is sorted ascending by action name; callers rely on the
/// ordering being deterministic. An empty vector is a valid outcome — no
/// action covering the pair is not the same thing as the card not existing.
pub fn resolve(
    policy: &ActionPolicy,
    card_type: CardType,
    card_status: CardStatus,
) -> Vec<String> {
    let mut actions: Vec<String> = policy
        .rules
        .iter()
        .filter(|rule| rule.allows(card_type, card_status))
        .map(|rule| rule.name.to_string())
        .collect();
    actions.sort();
    actions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::policy::build_policy;
    use std::collections::BTreeSet;

    /// The §6-style permission table, re-encoded independently of the
    /// production build so the two can be cross-checked: action name,
    /// permitted card types, permitted statuses.
    fn expected_table() -> Vec<(&'static str, Vec<CardType>, Vec<CardStatus>)> {
        use CardStatus::*;
        use CardType::*;

        let all_types = vec![Prepaid, Debit, Credit];
        let every_status = vec![
            Ordered, Inactive, Active, Restricted, Blocked, Expired, Closed,
        ];
        let up_to_active = vec![Ordered, Inactive, Active];

        vec![
            ("ACTION1", all_types.clone(), vec![Active]),
            ("ACTION2", all_types.clone(), vec![Inactive]),
            ("ACTION3", all_types.clone(), every_status.clone()),
            ("ACTION4", all_types.clone(), every_status.clone()),
            ("ACTION5", vec![Credit], every_status.clone()),
            ("ACTION6", all_types.clone(), up_to_active.clone()),
            ("ACTION7", all_types.clone(), up_to_active.clone()),
            ("ACTION8", all_types.clone(), up_to_active.clone()),
            ("ACTION9", all_types.clone(), every_status),
            ("ACTION10", all_types.clone(), up_to_active.clone()),
            ("ACTION11", all_types.clone(), vec![Inactive, Active]),
            ("ACTION12", all_types.clone(), up_to_active.clone()),
            ("ACTION13", all_types, up_to_active),
        ]
    }

    /// Exhaustive cross-check over the closed domain: 13 actions x 3 types
    /// x 7 statuses = 273 membership cases.
    #[test]
    fn test_every_action_type_status_triple() {
        let policy = build_policy();
        for (action, types, statuses) in expected_table() {
            for card_type in CardType::ALL {
                for status in CardStatus::ALL {
                    let expected = types.contains(&card_type) && statuses.contains(&status);
                    assert_eq!(
                        is_permitted(&policy, action, card_type, status),
                        expected,
                        "{action} for ({card_type}, {status})"
                    );
                    assert_eq!(
                        resolve(&policy, card_type, status).contains(&action.to_string()),
                        expected,
                        "resolve membership of {action} for ({card_type}, {status})"
                    );
                }
            }
        }
    }

    #[test]
    fn test_resolve_is_sorted_for_every_pair() {
        let policy = build_policy();
        for card_type in CardType::ALL {
            for status in CardStatus::ALL {
                let actions = resolve(&policy, card_type, status);
                let mut sorted = actions.clone();
                sorted.sort();
                assert_eq!(actions, sorted, "({card_type}, {status})");
            }
        }
    }

    #[test]
    fn test_resolve_sorts_lexicographically_not_numerically() {
        let policy = build_policy();
        let actions = resolve(&policy, CardType::Credit, CardStatus::Active);
        // "ACTION10" < "ACTION2" in lexicographic order
        let pos_10 = actions.iter().position(|a| a == "ACTION10").unwrap();
        let pos_3 = actions.iter().position(|a| a == "ACTION3").unwrap();
        assert!(pos_10 < pos_3);
    }

    #[test]
    fn test_resolve_credit_active() {
        let policy = build_policy();
        let actions = resolve(&policy, CardType::Credit, CardStatus::Active);
        // Everything except the Inactive-only ACTION2
        assert_eq!(
            actions,
            vec![
                "ACTION1", "ACTION10", "ACTION11", "ACTION12", "ACTION13", "ACTION3", "ACTION4",
                "ACTION5", "ACTION6", "ACTION7", "ACTION8", "ACTION9",
            ]
        );
    }

    #[test]
    fn test_resolve_prepaid_restricted_minimal_set() {
        let policy = build_policy();
        let actions = resolve(&policy, CardType::Prepaid, CardStatus::Restricted);
        assert_eq!(actions, vec!["ACTION3", "ACTION4", "ACTION9"]);
    }

    #[test]
    fn test_resolve_never_absent_always_covered() {
        // ACTION3/4/9 cover every pair, so no pair resolves to an empty
        // list with the current table; the contract still returns a list,
        // never an option.
        let policy = build_policy();
        for card_type in CardType::ALL {
            for status in CardStatus::ALL {
                assert!(!resolve(&policy, card_type, status).is_empty());
            }
        }
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let policy = build_policy();
        let first = resolve(&policy, CardType::Debit, CardStatus::Blocked);
        let second = resolve(&policy, CardType::Debit, CardStatus::Blocked);
        assert_eq!(first, second);
    }

    #[test]
    fn test_unknown_action_is_not_permitted() {
        let policy = build_policy();
        assert!(!is_permitted(
            &policy,
            "ACTION99",
            CardType::Credit,
            CardStatus::Active
        ));
    }

    #[test]
    fn test_resolved_names_are_distinct() {
        let policy = build_policy();
        let actions = resolve(&policy, CardType::Credit, CardStatus::Inactive);
        let unique: BTreeSet<_> = actions.iter().collect();
        assert_eq!(unique.len(), actions.len());
    }
}
