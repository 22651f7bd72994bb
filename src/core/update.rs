use crate::core::{cmd::Cmd, msg::Msg, state::AppState};

/// Elm-like update function
/// Returns new state and list of commands from current state and message
pub fn update(msg: Msg, mut state: AppState) -> (AppState, Vec<Cmd>) {
    match msg {
        // System messages (delegated to SystemState)
        Msg::System(system_msg) => {
            let commands = state.system.update(system_msg);
            (state, commands)
        }

        // Ballot messages (delegated to BallotState, which may ask SystemState
        // for status and notice changes)
        Msg::Ballot(ballot_msg) => {
            if ballot_msg.is_contract_result() {
                log::debug!("update: contract result {ballot_msg:?}");
            }
            let (mut commands, follow_ups) = state.ballot.update(ballot_msg);
            for system_msg in follow_ups {
                commands.extend(state.system.update(system_msg));
            }
            (state, commands)
        }
    }
}
