use serde::{Deserialize, Serialize};

/// Product category of a card. Closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardType {
    Prepaid,
    Debit,
    Credit,
}

impl CardType {
    pub const COUNT: usize = 3;

    /// All card types, in declaration order. The order is load-bearing:
    /// it drives both the policy matrix indexing and the sample-dataset
    /// card numbering.
    pub const ALL: [CardType; Self::COUNT] = [CardType::Prepaid, CardType::Debit, CardType::Credit];

    /// Stable index into per-action policy matrices.
    pub fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for CardType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            CardType::Prepaid => "Prepaid",
            CardType::Debit => "Debit",
            CardType::Credit => "Credit",
        };
        write!(f, "{s}")
    }
}

/// Lifecycle state of a card. Closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardStatus {
    Ordered,
    Inactive,
    Active,
    Restricted,
    Blocked,
    Expired,
    Closed,
}

impl CardStatus {
    pub const COUNT: usize = 7;

    /// All statuses, in declaration order (see `CardType::ALL`).
    pub const ALL: [CardStatus; Self::COUNT] = [
        CardStatus::Ordered,
        CardStatus::Inactive,
        CardStatus::Active,
        CardStatus::Restricted,
        CardStatus::Blocked,
        CardStatus::Expired,
        CardStatus::Closed,
    ];

    /// Stable index into per-action policy matrices.
    pub fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for CardStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            CardStatus::Ordered => "Ordered",
            CardStatus::Inactive => "Inactive",
            CardStatus::Active => "Active",
            CardStatus::Restricted => "Restricted",
            CardStatus::Blocked => "Blocked",
            CardStatus::Expired => "Expired",
            CardStatus::Closed => "Closed",
        };
        write!(f, "{s}")
    }
}

/// Read projection of a card as answered by the card directory. Immutable
/// once constructed; it has no lifecycle beyond the query that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardDetails {
    pub card_number: String,
    pub card_type: CardType,
    pub card_status: CardStatus,
    pub is_pin_set: bool,
}

/// One named action and the exact (type, status) pairs it is permitted for.
/// `permitted[type.index()][status.index()]` is the membership test.
#[derive(Debug, Clone)]
pub struct ActionRule {
    pub name: &'static str,
    pub permitted: [[bool; CardStatus::COUNT]; CardType::COUNT],
}

impl ActionRule {
    pub fn allows(&self, card_type: CardType, card_status: CardStatus) -> bool {
        self.permitted[card_type.index()][card_status.index()]
    }
}

// ---------- API request/response types ----------

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardActionsRequest {
    /// Missing query parameters surface as empty strings so that field
    /// validation owns the failure, not the transport layer.
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub card_number: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AllowedActionsResponse {
    pub allowed_actions: Vec<String>,
}
