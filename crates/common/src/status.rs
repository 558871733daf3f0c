use serde::{Deserialize, Serialize};

/// The status of an initiated order.
///
/// State transitions:
/// ```text
/// Pending ──► Paid ──► Approved
///    │          │
///    │          ▼
///    │      Cancelling ──► Cancelled
///    │                         ▲
///    └─────────────────────────┘
/// ```
///
/// An order that has not been initiated carries no status at all, which is
/// distinct from `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    /// Order was validated and is awaiting payment.
    Pending,

    /// Payment was completed, awaiting restaurant approval.
    Paid,

    /// Restaurant approved the order (terminal state).
    Approved,

    /// Payment is being rolled back.
    Cancelling,

    /// Order was cancelled (terminal state).
    Cancelled,
}

impl OrderStatus {
    /// Returns true if the order can be paid in this status.
    pub fn can_pay(&self) -> bool {
        matches!(self, OrderStatus::Pending)
    }

    /// Returns true if the order can be approved in this status.
    pub fn can_approve(&self) -> bool {
        matches!(self, OrderStatus::Paid)
    }

    /// Returns true if a payment cancellation can start (or be repeated) in this status.
    pub fn can_init_cancel(&self) -> bool {
        matches!(self, OrderStatus::Paid | OrderStatus::Cancelling)
    }

    /// Returns true if this is a terminal status.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Approved | OrderStatus::Cancelled)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::Paid => "PAID",
            OrderStatus::Approved => "APPROVED",
            OrderStatus::Cancelling => "CANCELLING",
            OrderStatus::Cancelled => "CANCELLED",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
