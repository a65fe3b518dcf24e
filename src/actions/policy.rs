use crate::actions::types::{ActionRule, CardStatus, CardType};
use crate::actions::ActionPolicy;

use CardStatus::{Active, Inactive, Ordered};

/// Build the card-action policy table.
///
/// The table is the authoritative source for which actions are permitted
/// for each (card type, card status) pair. Construction is pure and
/// deterministic; the result is shared read-only for the process lifetime.
pub fn build_policy() -> ActionPolicy {
    let rules = vec![
        for_all_card_types("ACTION1", &[Active]),
        for_all_card_types("ACTION2", &[Inactive]),
        for_all_card_types("ACTION3", &CardStatus::ALL),
        for_all_card_types("ACTION4", &CardStatus::ALL),
        for_card_type("ACTION5", CardType::Credit, &CardStatus::ALL),
        for_all_card_types("ACTION6", &[Ordered, Inactive, Active]),
        for_all_card_types("ACTION7", &[Ordered, Inactive, Active]),
        for_all_card_types("ACTION8", &[Ordered, Inactive, Active]),
        for_all_card_types("ACTION9", &CardStatus::ALL),
        for_all_card_types("ACTION10", &[Ordered, Inactive, Active]),
        for_all_card_types("ACTION11", &[Inactive, Active]),
        for_all_card_types("ACTION12", &[Ordered, Inactive, Active]),
        for_all_card_types("ACTION13", &[Ordered, Inactive, Active]),
    ];

    ActionPolicy { rules }
}

/// Rule permitting `action` for every card type in the given statuses.
fn for_all_card_types(action: &'static str, statuses: &[CardStatus]) -> ActionRule {
    let mut permitted = [[false; CardStatus::COUNT]; CardType::COUNT];
    for card_type in CardType::ALL {
        for status in statuses {
            permitted[card_type.index()][status.index()] = true;
        }
    }
    ActionRule {
        name: action,
        permitted,
    }
}

/// Rule permitting `action` for a single card type in the given statuses.
fn for_card_type(
    action: &'static str,
    card_type: CardType,
    statuses: &[CardStatus],
) -> ActionRule {
    let mut permitted = [[false; CardStatus::COUNT]; CardType::COUNT];
    for status in statuses {
        permitted[card_type.index()][status.index()] = true;
    }
    ActionRule {
        name: action,
        permitted,
    }
}
