pub mod ballot;
pub mod system;

use ballot::BallotMsg;
use system::SystemMsg;

/// Domain messages representing application intent
/// These are processed by the update function
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    // System operations (delegated to SystemState)
    System(SystemMsg),

    // Candidate list and voting (delegated to BallotState)
    Ballot(BallotMsg),
}

impl From<SystemMsg> for Msg {
    fn from(msg: SystemMsg) -> Self {
        Msg::System(msg)
    }
}

impl From<BallotMsg> for Msg {
    fn from(msg: BallotMsg) -> Self {
        Msg::Ballot(msg)
    }
}
