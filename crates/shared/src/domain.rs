use serde::{Deserialize, Serialize};

pub const INITIAL_STATE_TEXT: &str = "Hello World!";
pub const OBSERVABLE_TRIGGERED_TEXT: &str = "Live Data Triggered!";
pub const STATE_TRIGGERED_TEXT: &str = "State Flow Triggered!";
pub const EVENT_TRIGGERED_TEXT: &str = "Shared Flow Triggered!";

pub const DEFAULT_COLD_ITEM_COUNT: usize = 5;
pub const DEFAULT_COLD_ITEM_DELAY_MS: u64 = 1000;
pub const DEFAULT_EVENT_CAPACITY: usize = 16;

/// Text of the `index`-th (1-based) item produced by a cold sequence run.
pub fn cold_item_text(index: usize) -> String {
    format!("Item {index}")
}

/// The closed set of data holder kinds. Each kind is also a trigger on the
/// screen and names the display region its emissions are rendered into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HolderKind {
    ObservableValue,
    StateStream,
    EventStream,
    ColdSequence,
}

impl HolderKind {
    pub const ALL: [HolderKind; 4] = [
        HolderKind::ObservableValue,
        HolderKind::StateStream,
        HolderKind::EventStream,
        HolderKind::ColdSequence,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            HolderKind::ObservableValue => "observable_value",
            HolderKind::StateStream => "state_stream",
            HolderKind::EventStream => "event_stream",
            HolderKind::ColdSequence => "cold_sequence",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            HolderKind::ObservableValue => "observable value",
            HolderKind::StateStream => "state stream",
            HolderKind::EventStream => "event stream",
            HolderKind::ColdSequence => "cold sequence",
        }
    }

    pub fn traits(self) -> HolderTraits {
        match self {
            HolderKind::ObservableValue => HolderTraits {
                replays_last_value: true,
                buffers_for_absent: true,
                multicast: true,
                always_has_value: false,
                cold: false,
            },
            HolderKind::StateStream => HolderTraits {
                replays_last_value: true,
                buffers_for_absent: true,
                multicast: true,
                always_has_value: true,
                cold: false,
            },
            HolderKind::EventStream => HolderTraits {
                replays_last_value: false,
                buffers_for_absent: false,
                multicast: true,
                always_has_value: false,
                cold: false,
            },
            HolderKind::ColdSequence => HolderTraits {
                replays_last_value: false,
                buffers_for_absent: false,
                multicast: false,
                always_has_value: false,
                cold: true,
            },
        }
    }
}

/// Delivery semantics of a holder kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolderTraits {
    pub replays_last_value: bool,
    pub buffers_for_absent: bool,
    pub multicast: bool,
    pub always_has_value: bool,
    pub cold: bool,
}
